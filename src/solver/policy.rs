//! Guess-pool policy
//!
//! Decides which words may be proposed at a given ply. The evaluators only
//! ever see the resulting slice.

use crate::config::{PoolSource, SolverConfig};
use crate::core::Word;
use crate::wordlists::Dictionary;

/// Per-ply guess pools
#[derive(Debug, Clone)]
pub struct GuessPolicy<'a> {
    dictionary: &'a Dictionary,
    overrides: Vec<Vec<Word>>,
    hard_mode: bool,
    source: PoolSource,
}

impl<'a> GuessPolicy<'a> {
    #[must_use]
    pub const fn new(
        dictionary: &'a Dictionary,
        overrides: Vec<Vec<Word>>,
        hard_mode: bool,
        source: PoolSource,
    ) -> Self {
        Self {
            dictionary,
            overrides,
            hard_mode,
            source,
        }
    }

    #[must_use]
    pub fn from_config(config: &SolverConfig, dictionary: &'a Dictionary) -> Self {
        Self::new(
            dictionary,
            config.overrides.clone(),
            config.hard_mode,
            config.pool,
        )
    }

    /// Words that may be guessed at `ply` (zero-based) given the current candidates
    ///
    /// An explicit override for the ply wins; otherwise hard mode restricts
    /// guesses to the candidates; otherwise the configured dictionary list.
    #[must_use]
    pub fn pool<'s>(&'s self, ply: usize, candidates: &'s [Word]) -> &'s [Word] {
        if let Some(words) = self.overrides.get(ply) {
            return words;
        }
        if self.hard_mode {
            return candidates;
        }
        match self.source {
            PoolSource::AllGuesses => self.dictionary.guesses(),
            PoolSource::Solutions => self.dictionary.solutions(),
        }
    }

    /// Number of plies with an explicit override
    #[must_use]
    pub fn explicit_plies(&self) -> usize {
        self.overrides.len()
    }
}
