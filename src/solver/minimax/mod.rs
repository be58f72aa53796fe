//! One-ply minimax evaluation
//!
//! Scores a guess by the largest bucket of candidates any feedback code can
//! leave, and ranks guess pools by that score.

mod calculator;
mod selector;

pub use calculator::{evaluate_guess, evaluate_guess_traced};
pub use selector::{Evaluation, best_guess, evaluate_pool, rank_guesses};
