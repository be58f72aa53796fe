//! Feedback code scoring and representation
//!
//! A pattern encodes the feedback for one guess as five base-3 digits:
//! - 0 = absent (letter not in word)
//! - 1 = present, wrong position
//! - 2 = correct position
//!
//! The digits are stored big-endian in a single `u8` (0-242), so the numeric
//! order of patterns matches the order of their digit strings: `00000` is 0,
//! `00001` is 1 and `22222` is 242.

use super::word::{WORD_LENGTH, Word};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Feedback code for a guess checked against a solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

/// Error type for invalid feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    InvalidLength(usize),
    InvalidDigit(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly 5 digits, got {len}")
            }
            Self::InvalidDigit(ch) => {
                write!(f, "Feedback digit '{ch}' is not 0, 1 or 2")
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Number of distinct patterns (3^5)
    pub const COUNT: usize = 243;

    /// All positions correct
    pub const PERFECT: Self = Self(242);

    /// Build a pattern from five digits in 0..=2
    #[inline]
    #[must_use]
    pub const fn from_digits(digits: [u8; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut i = 0;
        while i < WORD_LENGTH {
            debug_assert!(digits[i] < 3, "Pattern digits must be 0, 1 or 2");
            value = value * 3 + digits[i];
            i += 1;
        }
        Self(value)
    }

    /// Decode the five digits, leftmost position first
    #[inline]
    #[must_use]
    pub const fn digits(self) -> [u8; WORD_LENGTH] {
        let mut digits = [0u8; WORD_LENGTH];
        let mut value = self.0;
        let mut i = WORD_LENGTH;
        while i > 0 {
            i -= 1;
            digits[i] = value % 3;
            value /= 3;
        }
        digits
    }

    /// Index of this pattern in `0..Pattern::COUNT`
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Pattern at a given index of the enumeration
    ///
    /// # Panics
    /// Panics in debug mode if `index >= Pattern::COUNT`
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::COUNT, "Pattern index must be < 243");
        Self(index as u8)
    }

    /// Every feedback code, from `00000` to `22222`
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from_index)
    }

    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Parse a pattern from a digit string such as `01202`
    ///
    /// # Errors
    /// Returns `PatternError` unless the text is exactly five characters from
    /// `{0, 1, 2}`.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Pattern;
    ///
    /// let pattern = Pattern::parse("00102").unwrap();
    /// assert_eq!(pattern.digits(), [0, 0, 1, 0, 2]);
    /// assert!(Pattern::parse("00103").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let count = text.chars().count();
        if count != WORD_LENGTH {
            return Err(PatternError::InvalidLength(count));
        }

        let mut digits = [0u8; WORD_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(text.chars()) {
            *slot = match ch {
                '0' => 0,
                '1' => 1,
                '2' => 2,
                other => return Err(PatternError::InvalidDigit(other)),
            };
        }

        Ok(Self::from_digits(digits))
    }

    /// Calculate the feedback when `guess` is checked against `solution`
    ///
    /// # Algorithm
    /// 1. Exact matches score 2 and consume their solution position
    /// 2. Every other guess position, left to right, consumes the first
    ///    unconsumed solution position holding the same letter and scores 1,
    ///    or scores 0 if there is none
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{Pattern, Word};
    ///
    /// let guess = Word::parse("aabbb").unwrap();
    /// let solution = Word::parse("babab").unwrap();
    /// assert_eq!(Pattern::score(&guess, &solution).to_string(), "12212");
    /// ```
    #[must_use]
    #[allow(clippy::needless_range_loop)] // Index shared across guess, solution and digits
    pub fn score(guess: &Word, solution: &Word) -> Self {
        let guess = guess.letters();
        let solution = solution.letters();
        let mut digits = [0u8; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            if guess[i] == solution[i] {
                digits[i] = 2;
                consumed[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if digits[i] == 2 {
                continue;
            }
            if let Some(j) = first_unconsumed(guess[i], solution, &consumed) {
                consumed[j] = true;
                digits[i] = 1;
            }
        }

        Self::from_digits(digits)
    }

    /// Whether `score(guess, solution) == self`
    ///
    /// Walks the same two passes as [`Pattern::score`] and bails out at the
    /// first position that disagrees with the expected digit.
    #[must_use]
    #[allow(clippy::needless_range_loop)]
    pub fn is_consistent(self, guess: &Word, solution: &Word) -> bool {
        let expected = self.digits();
        let guess = guess.letters();
        let solution = solution.letters();
        let mut consumed = [false; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            let exact = guess[i] == solution[i];
            if exact != (expected[i] == 2) {
                return false;
            }
            consumed[i] = exact;
        }

        for i in 0..WORD_LENGTH {
            match (expected[i], first_unconsumed(guess[i], solution, &consumed)) {
                (2, _) | (0, None) => {}
                (1, Some(j)) => consumed[j] = true,
                _ => return false,
            }
        }

        true
    }

    /// Render as emoji squares
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.digits()
            .iter()
            .map(|digit| match digit {
                2 => '🟩',
                1 => '🟨',
                _ => '⬜',
            })
            .collect()
    }
}

#[inline]
fn first_unconsumed(
    letter: u8,
    solution: &[u8; WORD_LENGTH],
    consumed: &[bool; WORD_LENGTH],
) -> Option<usize> {
    (0..WORD_LENGTH).find(|&j| !consumed[j] && solution[j] == letter)
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            f.write_char(char::from(b'0' + digit))?;
        }
        Ok(())
    }
}
