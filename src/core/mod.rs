//! Core domain types for Wordle
//!
//! Words, feedback codes and candidate filtering. Nothing here depends on the
//! search layer, and every type is a plain value.

mod candidates;
mod pattern;
mod word;

pub use candidates::{Constraint, ConstraintError, apply_constraints, filter, partition};
pub use pattern::{Pattern, PatternError};
pub use word::{WORD_LENGTH, Word, WordError, parse_word_list};
