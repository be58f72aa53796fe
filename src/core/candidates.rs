//! Candidate filtering
//!
//! Narrows a candidate set to the words consistent with observed feedback.
//! Every operation returns a new `Vec` and keeps the input order.

use super::{Pattern, PatternError, Word, WordError};
use std::fmt;
use std::str::FromStr;

/// A previously played guess and the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub guess: Word,
    pub pattern: Pattern,
}

/// Error type for invalid `GUESS:CODE` text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    MissingSeparator(String),
    Guess(WordError),
    Pattern(PatternError),
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator(text) => {
                write!(f, "Expected GUESS:CODE (e.g. RAISE:00102), got '{text}'")
            }
            Self::Guess(e) => write!(f, "Invalid guess: {e}"),
            Self::Pattern(e) => write!(f, "Invalid feedback: {e}"),
        }
    }
}

impl std::error::Error for ConstraintError {}

impl Constraint {
    #[must_use]
    pub const fn new(guess: Word, pattern: Pattern) -> Self {
        Self { guess, pattern }
    }

    /// Parse `GUESS:CODE`, e.g. `RAISE:00102`
    ///
    /// # Errors
    /// Returns `ConstraintError` if the separator is missing or either half is
    /// malformed.
    pub fn parse(text: &str) -> Result<Self, ConstraintError> {
        let (guess, pattern) = text
            .split_once(':')
            .ok_or_else(|| ConstraintError::MissingSeparator(text.to_string()))?;

        let guess = Word::parse(guess).map_err(ConstraintError::Guess)?;
        let pattern = Pattern::parse(pattern).map_err(ConstraintError::Pattern)?;
        Ok(Self::new(guess, pattern))
    }

    /// Whether `word` could be the solution under this constraint
    #[inline]
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.pattern.is_consistent(&self.guess, word)
    }
}

impl FromStr for Constraint {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.guess, self.pattern)
    }
}

/// Keep the candidates that would produce `pattern` for `guess`
///
/// # Examples
/// ```
/// use wordle_minimax::core::{Pattern, Word, filter};
///
/// let words: Vec<Word> = ["abcde", "edcba", "fghij"]
///     .iter()
///     .map(|w| Word::parse(w).unwrap())
///     .collect();
/// let guess = Word::parse("abcde").unwrap();
///
/// let left = filter(&words, &guess, Pattern::parse("11211").unwrap());
/// assert_eq!(left, vec![Word::parse("edcba").unwrap()]);
/// ```
#[must_use]
pub fn filter(candidates: &[Word], guess: &Word, pattern: Pattern) -> Vec<Word> {
    candidates
        .iter()
        .filter(|word| pattern.is_consistent(guess, word))
        .copied()
        .collect()
}

/// Replay prior guesses over a word list, in order
#[must_use]
pub fn apply_constraints(words: &[Word], constraints: &[Constraint]) -> Vec<Word> {
    constraints
        .iter()
        .fold(words.to_vec(), |remaining, constraint| {
            filter(&remaining, &constraint.guess, constraint.pattern)
        })
}

/// Split candidates into one bucket per feedback code
///
/// Bucket `p.index()` holds exactly `filter(candidates, guess, p)`, in the same
/// order, computed with a single scoring pass.
#[must_use]
pub fn partition(candidates: &[Word], guess: &Word) -> Vec<Vec<Word>> {
    let mut buckets = vec![Vec::new(); Pattern::COUNT];
    for candidate in candidates {
        buckets[Pattern::score(guess, candidate).index()].push(*candidate);
    }
    buckets
}
