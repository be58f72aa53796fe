//! Plain-text formatting for result lines

use crate::core::{Constraint, Word};
use crate::solver::{Evaluation, OpeningEvaluation, PairEvaluation, TwoPlyEvaluation};

/// Join words with ", "
#[must_use]
pub fn word_list(words: &[Word]) -> String {
    words
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Replayed guess with its feedback as emoji, e.g. `RAISE 🟨⬜⬜⬜⬜`
#[must_use]
pub fn constraint_line(constraint: &Constraint) -> String {
    format!("{} {}", constraint.guess, constraint.pattern.to_emoji())
}

/// Up to `count` items, skipping those whose value is zero
///
/// Zero means "no candidates in play", which says nothing about the guess.
pub fn top<T, F>(items: &[T], count: usize, value: F) -> impl Iterator<Item = &T>
where
    F: Fn(&T) -> f64,
{
    items
        .iter()
        .filter(move |item| value(*item) > 0.0)
        .take(count)
}

#[must_use]
pub fn evaluation_line(evaluation: &Evaluation) -> String {
    format!("{} - {}", evaluation.guess, evaluation.worst_case)
}

#[must_use]
pub fn two_ply_line(evaluation: &TwoPlyEvaluation) -> String {
    format!(
        "{} - {},{}",
        evaluation.guess, evaluation.branch_size, evaluation.second_ply
    )
}

#[must_use]
pub fn pair_line(evaluation: &PairEvaluation) -> String {
    format!(
        "{}:{} - {}",
        evaluation.first, evaluation.second, evaluation.worst_case
    )
}

#[must_use]
pub fn opening_line(evaluation: &OpeningEvaluation) -> String {
    format!(
        "{} - {:.5} - {}",
        evaluation.guess, evaluation.average_turns, evaluation.worst_turns
    )
}
