//! Minimax-based guess ranking
//!
//! Evaluates a whole guess pool in parallel. Ordering and tie-breaking
//! happen after every value is collected, so ties always resolve to guess
//! pool order.

use super::calculator::evaluate_guess_traced;
use crate::core::Word;
use crate::solver::parallel::{Schedule, first_min_by_key, map_ordered};
use crate::solver::trace::Trace;

/// Worst-case value of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub guess: Word,
    pub worst_case: usize,
}

/// Evaluate every guess in the pool, in pool order
#[must_use]
pub fn evaluate_pool(
    guess_pool: &[Word],
    candidates: &[Word],
    trace: &Trace<'_>,
) -> Vec<Evaluation> {
    map_ordered(guess_pool, Schedule::Uniform, |guess| {
        let scope = trace.scope(guess);
        let worst_case = evaluate_guess_traced(guess, candidates, &trace.child(scope.as_ref()));
        Evaluation {
            guess: *guess,
            worst_case,
        }
    })
}

/// Rank guesses by ascending worst case, ties kept in pool order
///
/// # Examples
/// ```
/// use wordle_minimax::core::Word;
/// use wordle_minimax::solver::{Trace, minimax::rank_guesses};
///
/// let parse = |w: &str| Word::parse(w).unwrap();
/// let guesses = vec![parse("zzzzz"), parse("crane")];
/// let candidates = vec![parse("slate"), parse("irate"), parse("crate")];
///
/// let ranked = rank_guesses(&guesses, &candidates, &Trace::disabled());
/// assert_eq!(ranked[0].guess, parse("crane"));
/// assert_eq!(ranked[1].worst_case, 3);
/// ```
#[must_use]
pub fn rank_guesses(
    guess_pool: &[Word],
    candidates: &[Word],
    trace: &Trace<'_>,
) -> Vec<Evaluation> {
    let mut evaluations = evaluate_pool(guess_pool, candidates, trace);
    evaluations.sort_by_key(|e| e.worst_case);
    evaluations
}

/// Guess with the lowest worst case, earliest in the pool on ties
///
/// Returns `None` if the guess pool is empty.
#[must_use]
pub fn best_guess(
    guess_pool: &[Word],
    candidates: &[Word],
    trace: &Trace<'_>,
) -> Option<Evaluation> {
    let evaluations = evaluate_pool(guess_pool, candidates, trace);
    first_min_by_key(&evaluations, |e| e.worst_case)
        .map(|idx| evaluations[idx])
}
