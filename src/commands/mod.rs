//! Command implementations
//!
//! Replays the prior guesses, then runs the configured evaluator over what is
//! left.

pub mod game;
mod progress;
pub mod search;

pub use game::{evaluate_openings, run_whole_game};
pub use search::{run_blind, run_one_ply, run_two_ply};

use crate::config::{Mode, SolverConfig};
use crate::core::apply_constraints;
use crate::output::{StderrSink, print_replay};
use crate::solver::{GuessPolicy, Trace};
use crate::wordlists::Dictionary;
use anyhow::{Result, ensure};

/// Run one invocation
///
/// Evaluation is skipped when the replayed guesses leave at most one
/// candidate.
///
/// # Errors
///
/// Returns an error if the first-ply guess pool is empty or an evaluator
/// fails.
pub fn run(config: &SolverConfig, dictionary: &Dictionary) -> Result<()> {
    let candidates = apply_constraints(dictionary.solutions(), &config.constraints);
    print_replay(&config.constraints, &candidates);
    if candidates.len() <= 1 {
        return Ok(());
    }

    let policy = GuessPolicy::from_config(config, dictionary);
    ensure!(
        !policy.pool(0, &candidates).is_empty(),
        "No guess words available for the first ply"
    );

    let sink = StderrSink;
    let trace = if config.verbosity > 0 {
        Trace::new(&sink, config.verbosity)
    } else {
        Trace::disabled()
    };

    match config.mode {
        Mode::OnePly => run_one_ply(&policy, &candidates, &trace, config.count),
        Mode::TwoPly => run_two_ply(&policy, &candidates, &trace, config.count),
        Mode::TwoPlyBlind => run_blind(&policy, &candidates, &trace, config.count),
        Mode::WholeGame => run_whole_game(&policy, &candidates, &trace, config.count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Constraint, Word};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::parse(w).unwrap()).collect()
    }

    fn dictionary() -> Dictionary {
        let solutions = words(&["crane", "slate", "irate", "crate", "stole", "biome"]);
        Dictionary::solutions_only(solutions)
    }

    #[test]
    fn runs_every_mode() {
        let dictionary = dictionary();
        let modes = [
            Mode::OnePly,
            Mode::TwoPly,
            Mode::TwoPlyBlind,
            Mode::WholeGame,
        ];
        for mode in modes {
            let config = SolverConfig {
                mode,
                count: 10,
                force: true,
                ..SolverConfig::default()
            };
            assert!(run(&config, &dictionary).is_ok(), "{mode:?}");
        }
    }

    #[test]
    fn solved_replay_skips_evaluation() {
        let dictionary = dictionary();
        // An empty override would fail evaluation if it were reached
        let config = SolverConfig {
            constraints: vec![Constraint::parse("BIOME:22222").unwrap()],
            overrides: vec![Vec::new()],
            count: 10,
            ..SolverConfig::default()
        };
        assert!(run(&config, &dictionary).is_ok());
    }

    #[test]
    fn empty_first_pool_is_rejected() {
        let dictionary = dictionary();
        let config = SolverConfig {
            overrides: vec![Vec::new()],
            count: 10,
            ..SolverConfig::default()
        };
        assert!(run(&config, &dictionary).is_err());
    }

    #[test]
    fn traced_run_succeeds() {
        let dictionary = dictionary();
        let config = SolverConfig {
            mode: Mode::TwoPly,
            verbosity: 2,
            count: 3,
            force: true,
            ..SolverConfig::default()
        };
        assert!(run(&config, &dictionary).is_ok());
    }
}
