//! Wordle Minimax
//!
//! Ranks Wordle guesses by the worst-case number of candidate solutions they
//! can leave, one or two plies deep, and simulates whole games under the
//! one-ply policy.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_minimax::core::{Pattern, Word};
//! use wordle_minimax::solver::{Trace, minimax::rank_guesses};
//!
//! let guess = Word::parse("crane").unwrap();
//! let answer = Word::parse("slate").unwrap();
//! assert_eq!(Pattern::score(&guess, &answer).to_string(), "00202");
//!
//! let ranked = rank_guesses(&[guess], &[answer], &Trace::disabled());
//! assert_eq!(ranked[0].worst_case, 1);
//! ```

// Run configuration
pub mod config;

// Core domain types
pub mod core;

// Search algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
