//! Five-letter word representation
//!
//! A `Word` is five upper-case ASCII letters packed into a byte array. It is
//! `Copy`, so candidate sets are plain `Vec<Word>` values that workers can share
//! by slice.

use std::fmt::{self, Write};
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word, normalized to upper case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters(String),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::InvalidCharacters(text) => {
                write!(f, "Word '{text}' must contain only ASCII letters")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Parse a word from text, upper-casing it
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly 5 characters long or
    /// contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Word;
    ///
    /// let word = Word::parse("raise").unwrap();
    /// assert_eq!(word.to_string(), "RAISE");
    ///
    /// assert!(Word::parse("toolong").is_err());
    /// assert!(Word::parse("ra1se").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, WordError> {
        let count = text.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacters(text.to_string()));
            }
            *slot = ch.to_ascii_uppercase() as u8;
        }

        Ok(Self(letters))
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[cfg(test)]
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Whether any letter appears more than once
    #[cfg(test)]
    #[must_use]
    pub fn has_repeated_letters(&self) -> bool {
        (0..WORD_LENGTH).any(|i| self.0[i + 1..].contains(&self.0[i]))
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.0 {
            f.write_char(char::from(letter))?;
        }
        Ok(())
    }
}

/// Parse a comma or space separated list of words
///
/// Empty entries between separators are skipped.
///
/// # Errors
/// Returns the first `WordError` encountered.
pub fn parse_word_list(text: &str) -> Result<Vec<Word>, WordError> {
    text.split([',', ' '])
        .filter(|entry| !entry.is_empty())
        .map(Word::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::parse("CRANE").unwrap();
        assert_eq!(word.letters(), b"CRANE");
        assert_eq!(word.to_string(), "CRANE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::parse("crane").unwrap();
        assert_eq!(word.to_string(), "CRANE");

        let word2 = Word::parse("CrAnE").unwrap();
        assert_eq!(word, word2);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::parse("toolong"), Err(WordError::InvalidLength(7)));
        assert_eq!(Word::parse("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::parse(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::parse("cran3").is_err());
        assert!(Word::parse("cran ").is_err());
        assert!(Word::parse("cran!").is_err());
        // Feedback digits are not letters
        assert!(Word::parse("01202").is_err());
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        let expected = WordError::InvalidCharacters("caféé".into());
        assert_eq!(Word::parse("caféé"), Err(expected));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::parse("crane").unwrap();
        assert_eq!(word.letter_at(0), b'C');
        assert_eq!(word.letter_at(4), b'E');
    }

    #[test]
    fn word_repeated_letters() {
        assert!(!Word::parse("crane").unwrap().has_repeated_letters());
        assert!(Word::parse("speed").unwrap().has_repeated_letters());
        assert!(Word::parse("aaaaa").unwrap().has_repeated_letters());
    }

    #[test]
    fn word_from_str() {
        let word: Word = "slate".parse().unwrap();
        assert_eq!(format!("{word}"), "SLATE");
    }

    #[test]
    fn word_list_splits_on_commas_and_spaces() {
        let words = parse_word_list("raise,stole  trace, arise").unwrap();
        let text: Vec<String> = words.iter().map(ToString::to_string).collect();
        assert_eq!(text, ["RAISE", "STOLE", "TRACE", "ARISE"]);
    }

    #[test]
    fn word_list_rejects_bad_entry() {
        assert_eq!(
            parse_word_list("raise,sto"),
            Err(WordError::InvalidLength(3))
        );
    }
}
