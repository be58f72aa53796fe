//! Run configuration
//!
//! Built once from the parsed command line and passed by reference into the
//! command layer. Nothing in the crate reads global state.

use crate::core::{Constraint, Word};
use anyhow::{Result, bail};
use clap::ValueEnum;
use std::path::PathBuf;

/// Which evaluator to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// 1-ply min-max search
    #[default]
    #[value(name = "level1", alias = "1")]
    OnePly,
    /// 2-ply min-max search, second guess chosen after seeing feedback
    #[value(name = "level2", alias = "2")]
    TwoPly,
    /// 2-ply search, both guesses chosen before any feedback
    #[value(name = "level2blind", alias = "2b")]
    TwoPlyBlind,
    /// Play the whole game against every solution
    #[value(name = "game", alias = "g")]
    WholeGame,
}

impl Mode {
    /// Modes slow enough to need an explicit word list or `--force`
    #[must_use]
    pub const fn is_expensive(self) -> bool {
        !matches!(self, Self::OnePly)
    }
}

/// Guess pool used for a ply that has no explicit override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolSource {
    /// Only words that can be solutions
    #[default]
    Solutions,
    /// Every accepted guess
    AllGuesses,
}

/// Immutable configuration for one invocation
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    pub mode: Mode,
    pub pool: PoolSource,
    pub hard_mode: bool,
    /// Explicit guess pools, indexed by ply
    pub overrides: Vec<Vec<Word>>,
    /// Prior guesses to replay before evaluating
    pub constraints: Vec<Constraint>,
    /// Trace depth; 0 disables tracing
    pub verbosity: usize,
    /// Number of results to print
    pub count: usize,
    pub force: bool,
    /// Solution list file; the embedded list when absent
    pub solutions: Option<PathBuf>,
    /// Accepted-guess list file; the solution list when absent
    pub guesses: Option<PathBuf>,
}

impl SolverConfig {
    /// Reject configurations that would run an expensive search unintentionally
    ///
    /// # Errors
    /// Returns an error when an expensive mode has no `--words` list and
    /// `force` is not set, when an override list is empty, or when the full
    /// guess pool is requested without a guess list to draw it from.
    pub fn validate(&self) -> Result<()> {
        if self.pool == PoolSource::AllGuesses && self.guesses.is_none() {
            bail!(
                "--all needs an accepted-guess list (--guesses); without one the guess list \
                 equals the solution list."
            );
        }
        if self.mode.is_expensive() && self.overrides.is_empty() && !self.force {
            bail!(
                "Word list (--words) should be provided for this operation mode or it will be \
                 extremely slow (use --force to override)."
            );
        }
        if let Some(ply) = self.overrides.iter().position(Vec::is_empty) {
            bail!("Word list for ply {} is empty.", ply + 1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_ply_needs_no_word_list() {
        let config = SolverConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn expensive_modes_need_words_or_force() {
        for mode in [Mode::TwoPly, Mode::TwoPlyBlind, Mode::WholeGame] {
            let mut config = SolverConfig {
                mode,
                ..SolverConfig::default()
            };
            assert!(config.validate().is_err(), "{mode:?}");

            config.force = true;
            assert!(config.validate().is_ok(), "{mode:?}");

            config.force = false;
            config.overrides = vec![vec![Word::parse("stole").unwrap()]];
            assert!(config.validate().is_ok(), "{mode:?}");
        }
    }

    #[test]
    fn empty_override_is_rejected() {
        let config = SolverConfig {
            overrides: vec![vec![Word::parse("stole").unwrap()], vec![]],
            ..SolverConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ply 2"));
    }

    #[test]
    fn all_guesses_needs_a_guess_list() {
        let mut config = SolverConfig {
            pool: PoolSource::AllGuesses,
            ..SolverConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("--guesses"));

        config.guesses = Some(PathBuf::from("guesses.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn mode_names_and_aliases() {
        assert_eq!(Mode::from_str("level1", true), Ok(Mode::OnePly));
        assert_eq!(Mode::from_str("2", true), Ok(Mode::TwoPly));
        assert_eq!(Mode::from_str("2B", true), Ok(Mode::TwoPlyBlind));
        assert_eq!(Mode::from_str("Game", true), Ok(Mode::WholeGame));
        assert!(Mode::from_str("level3", true).is_err());
    }
}
