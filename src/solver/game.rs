//! Whole-game simulation
//!
//! Plays a fixed opening to completion against every possible solution, using
//! the one-ply minimax choice as the guess policy for every later turn.

use super::SolverError;
use super::minimax::best_guess;
use super::parallel::{Schedule, map_ordered, mean};
use super::policy::GuessPolicy;
use super::trace::{Event, Trace};
use crate::core::{Pattern, Word, filter};

/// Turn statistics for one opening guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningEvaluation {
    pub guess: Word,
    pub average_turns: f64,
    pub worst_turns: u32,
}

/// Play one game and return the turn on which `solution` is guessed
///
/// Turn 1 plays `opening`. Later turns guess the only candidate when one is
/// left, and otherwise the `best_guess` of `policy.pool(turn - 1, remaining)`.
/// Turn t therefore draws from ply t - 1: the first `--words` list supplies
/// the openings and the n-th list supplies turn n.
///
/// # Errors
/// - `SolverError::InconsistentState` if the candidates run out before the
///   solution is guessed (the solution was never a candidate)
/// - `SolverError::EmptyGuessPool` if a turn has no guess available
/// - `SolverError::TurnLimit` if the game outlasts the number of candidates
///   plus the explicitly configured plies, which only happens when the
///   policy keeps proposing guesses that rule nothing out
pub fn simulate_game(
    opening: &Word,
    solution: &Word,
    policy: &GuessPolicy<'_>,
    candidates: &[Word],
    trace: &Trace<'_>,
) -> Result<u32, SolverError> {
    let turns = candidates.len() + policy.explicit_plies() + 2;
    let limit = u32::try_from(turns).unwrap_or(u32::MAX);
    let mut remaining = candidates.to_vec();
    let mut turn = 1u32;

    loop {
        if remaining.is_empty() {
            return Err(SolverError::InconsistentState {
                solution: *solution,
                turn,
            });
        }
        if turn > limit {
            return Err(SolverError::TurnLimit {
                solution: *solution,
                limit,
            });
        }

        let guess = if turn == 1 {
            *opening
        } else if let [only] = remaining.as_slice() {
            *only
        } else {
            let ply = (turn - 1) as usize;
            let pool = policy.pool(ply, &remaining);
            best_guess(pool, &remaining, &Trace::disabled())
                .ok_or(SolverError::EmptyGuessPool { ply: ply + 1 })?
                .guess
        };

        if guess == *solution {
            trace.record(Event::Solved { turns: turn });
            return Ok(turn);
        }

        remaining = filter(&remaining, &guess, Pattern::score(&guess, solution));
        turn += 1;
    }
}

/// Simulate `opening` against every solution and summarise the turn counts
///
/// Solutions are handed out one at a time since game length varies.
///
/// # Errors
/// Returns the `SolverError` of the first failing solution in input order.
///
/// # Examples
/// ```
/// use wordle_minimax::config::PoolSource;
/// use wordle_minimax::core::Word;
/// use wordle_minimax::solver::{GuessPolicy, Trace, game::evaluate_opening};
/// use wordle_minimax::wordlists::Dictionary;
///
/// let words: Vec<Word> = ["crate", "grate", "irate"]
///     .iter()
///     .map(|w| Word::parse(w).unwrap())
///     .collect();
/// let dictionary = Dictionary::solutions_only(words.clone());
/// let policy = GuessPolicy::new(&dictionary, Vec::new(), true, PoolSource::Solutions);
/// let trace = Trace::disabled();
///
/// let result = evaluate_opening(&words[0], &words, &policy, &words, &trace).unwrap();
/// assert_eq!(result.worst_turns, 3);
/// ```
pub fn evaluate_opening(
    opening: &Word,
    solutions: &[Word],
    policy: &GuessPolicy<'_>,
    candidates: &[Word],
    trace: &Trace<'_>,
) -> Result<OpeningEvaluation, SolverError> {
    let results = map_ordered(solutions, Schedule::Balanced, |solution| {
        let scope = trace.scope(solution);
        let trace = trace.child(scope.as_ref());
        simulate_game(opening, solution, policy, candidates, &trace)
    });
    let turns = results.into_iter().collect::<Result<Vec<_>, _>>()?;

    let evaluation = OpeningEvaluation {
        guess: *opening,
        average_turns: mean(&turns),
        worst_turns: turns.iter().copied().max().unwrap_or(0),
    };
    trace.record(Event::Opening {
        average_turns: evaluation.average_turns,
        worst_turns: evaluation.worst_turns,
    });
    Ok(evaluation)
}
