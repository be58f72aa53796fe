//! Errors raised while searching

use crate::core::Word;
use std::fmt;

/// Failure inside an evaluator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The guess-pool policy produced no words for a ply (1-based) that needs a guess
    EmptyGuessPool { ply: usize },
    /// A simulation ran out of candidates before reaching its solution
    InconsistentState { solution: Word, turn: u32 },
    /// A simulation kept guessing without narrowing its candidates
    TurnLimit { solution: Word, limit: u32 },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGuessPool { ply } => {
                write!(f, "No guess words available for ply {ply}")
            }
            Self::InconsistentState { solution, turn } => {
                write!(
                    f,
                    "No candidates left at turn {turn} while solving {solution}; \
                     feedback and filtering disagree"
                )
            }
            Self::TurnLimit { solution, limit } => {
                write!(f, "Solving {solution} did not finish within {limit} turns")
            }
        }
    }
}

impl std::error::Error for SolverError {}
