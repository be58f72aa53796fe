//! Word list loading utilities
//!
//! Reads plain text word lists, one word per line.

use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Blank lines are skipped and surrounding whitespace is trimmed.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is not a valid word;
/// the message names the file and line.
///
/// # Examples
/// ```no_run
/// use wordle_minimax::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    words_from_text(&content).with_context(|| format!("Invalid word list {}", path.display()))
}

/// Parse newline separated words
///
/// # Errors
///
/// Returns an error naming the first invalid line.
pub fn words_from_text(content: &str) -> Result<Vec<Word>> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| {
            Word::parse(line).with_context(|| format!("line {line_no}: '{line}'"))
        })
        .collect()
}

/// Parse an in-memory list of words
///
/// # Errors
///
/// Returns an error naming the first invalid entry.
pub fn words_from_slice(words: &[&str]) -> Result<Vec<Word>> {
    words
        .iter()
        .map(|w| Word::parse(w).with_context(|| format!("Invalid word '{w}'")))
        .collect()
}
