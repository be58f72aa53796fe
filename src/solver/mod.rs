//! Minimax guess search
//!
//! One evaluator per search mode, all parameterised by a [`GuessPolicy`]
//! and an optional [`Trace`].

pub mod blind;
mod error;
pub mod game;
pub mod minimax;
mod parallel;
mod policy;
mod trace;
pub mod two_ply;

pub use blind::{PairEvaluation, rank_pairs};
pub use error::SolverError;
pub use game::{OpeningEvaluation, evaluate_opening, simulate_game};
pub use minimax::{Evaluation, best_guess, rank_guesses};
pub use policy::GuessPolicy;
pub use trace::{Event, EventSink, Scope, Trace};
pub use two_ply::{TwoPlyEvaluation, rank_two_ply};
