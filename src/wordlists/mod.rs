//! Word lists for Wordle solving
//!
//! The dictionary is loaded once at startup and never changes afterwards.
//! The default solution list is compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::SOLUTIONS;

use crate::core::Word;
use anyhow::{Result, ensure};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Accepted guesses and possible solutions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    guesses: Vec<Word>,
    solutions: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from in-memory lists
    ///
    /// Solutions missing from `guesses` are appended so every solution is
    /// also guessable.
    #[must_use]
    pub fn new(guesses: Vec<Word>, solutions: Vec<Word>) -> Self {
        let mut guesses = guesses;
        let mut known: FxHashSet<Word> = guesses.iter().copied().collect();
        guesses.extend(solutions.iter().filter(|w| known.insert(**w)));

        Self { guesses, solutions }
    }

    /// A dictionary whose guess list is the solution list
    #[must_use]
    pub fn solutions_only(solutions: Vec<Word>) -> Self {
        Self {
            guesses: solutions.clone(),
            solutions,
        }
    }

    /// Load from word list files, falling back to the embedded solutions
    ///
    /// Without a guess file the guess list equals the solution list.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, or if the solution
    /// list is empty.
    pub fn load(solutions: Option<&Path>, guesses: Option<&Path>) -> Result<Self> {
        let solution_words = match solutions {
            Some(path) => {
                let words = loader::load_from_file(path)?;
                ensure!(
                    !words.is_empty(),
                    "Solution list {} is empty",
                    path.display()
                );
                words
            }
            None => loader::words_from_slice(SOLUTIONS)?,
        };

        match guesses {
            Some(path) => Ok(Self::new(loader::load_from_file(path)?, solution_words)),
            None => Ok(Self::solutions_only(solution_words)),
        }
    }

    /// Every accepted guess
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Every possible solution
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::parse(w).unwrap()).collect()
    }

    #[test]
    fn solutions_are_appended_to_guesses() {
        let dictionary = Dictionary::new(words(&["aahed", "crane"]), words(&["crane", "slate"]));

        let guesses = words(&["aahed", "crane", "slate"]);
        assert_eq!(dictionary.guesses(), guesses.as_slice());
        assert_eq!(dictionary.solutions(), &guesses[1..]);
    }

    #[test]
    fn solutions_only_shares_lists() {
        let dictionary = Dictionary::solutions_only(words(&["crane", "slate"]));
        assert_eq!(dictionary.guesses(), dictionary.solutions());
    }

    #[test]
    fn load_defaults_to_embedded_solutions() {
        let dictionary = Dictionary::load(None, None).unwrap();

        assert_eq!(dictionary.solutions().len(), SOLUTIONS.len());
        assert_eq!(dictionary.solutions().len(), 2315);
        let biome = Word::parse("biome").unwrap();
        assert!(dictionary.solutions().contains(&biome));
        assert_eq!(dictionary.guesses(), dictionary.solutions());
    }

    #[test]
    fn guess_file_extends_embedded_solutions() {
        let name = format!("wordle_minimax_guesses_{}.txt", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, "aahed\nbiome\n").unwrap();

        let result = Dictionary::load(None, Some(path.as_path()));
        std::fs::remove_file(&path).unwrap();

        let dictionary = result.unwrap();
        assert_eq!(dictionary.guesses().len(), SOLUTIONS.len() + 1);
        assert_eq!(dictionary.guesses()[0], Word::parse("aahed").unwrap());
    }

    #[test]
    fn load_rejects_empty_solution_list() {
        let name = format!("wordle_minimax_empty_{}.txt", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, "\n\n").unwrap();

        let result = Dictionary::load(Some(path.as_path()), None);
        std::fs::remove_file(&path).unwrap();

        assert!(result.unwrap_err().to_string().contains("is empty"));
    }
}
