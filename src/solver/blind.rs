//! Two-ply blind evaluation
//!
//! Both guesses are fixed before any feedback is seen. A candidate survives a
//! pair of feedback codes only if it is consistent with both against the
//! original candidate set, so the guesses are scored jointly.

use super::parallel::{Schedule, map_ordered};
use super::policy::GuessPolicy;
use super::trace::{Event, Trace};
use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Worst-case value of a guess pair committed in advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairEvaluation {
    pub first: Word,
    pub second: Word,
    pub worst_case: usize,
}

/// Largest number of candidates sharing both feedback codes
///
/// # Examples
/// ```
/// use wordle_minimax::core::Word;
/// use wordle_minimax::solver::blind::evaluate_pair;
///
/// let parse = |w: &str| Word::parse(w).unwrap();
/// let candidates = vec![parse("crate"), parse("grate"), parse("irate")];
///
/// // CRANE alone cannot split GRATE from IRATE; adding GRATE does
/// assert_eq!(evaluate_pair(&parse("crane"), &parse("zzzzz"), &candidates), 2);
/// assert_eq!(evaluate_pair(&parse("crane"), &parse("grate"), &candidates), 1);
/// ```
#[must_use]
pub fn evaluate_pair(first: &Word, second: &Word, candidates: &[Word]) -> usize {
    evaluate_pair_traced(first, second, candidates, &Trace::disabled())
}

/// [`evaluate_pair`], reporting each non-empty joint bucket to `trace`
#[must_use]
pub fn evaluate_pair_traced(
    first: &Word,
    second: &Word,
    candidates: &[Word],
    trace: &Trace<'_>,
) -> usize {
    let buckets = joint_buckets(first, second, candidates);

    if trace.is_enabled() {
        let mut keys: Vec<(Pattern, Pattern)> = buckets.keys().copied().collect();
        keys.sort_unstable();
        for (p1, p2) in keys {
            let scope = trace.scope(format_args!("{p1}:{p2}"));
            let count = buckets[&(p1, p2)];
            trace.child(scope.as_ref()).record(Event::Bucket { count });
        }
    }

    let worst = buckets.values().copied().max().unwrap_or(0);
    if worst > 0 {
        trace.record(Event::WorstCase { value: worst });
    }
    worst
}

/// Candidates grouped by the feedback pair they produce
fn joint_buckets(
    first: &Word,
    second: &Word,
    candidates: &[Word],
) -> FxHashMap<(Pattern, Pattern), usize> {
    let mut buckets = FxHashMap::default();
    for candidate in candidates {
        let first_code = Pattern::score(first, candidate);
        let second_code = Pattern::score(second, candidate);
        *buckets.entry((first_code, second_code)).or_insert(0) += 1;
    }
    buckets
}

/// Evaluate every pair from `pool(0) × pool(1)`, both against `candidates`
///
/// Sorted by ascending worst case; ties keep first-guess-major pool order.
#[must_use]
pub fn rank_pairs(
    policy: &GuessPolicy<'_>,
    candidates: &[Word],
    trace: &Trace<'_>,
) -> Vec<PairEvaluation> {
    let firsts = policy.pool(0, candidates);
    let seconds = policy.pool(1, candidates);
    let pairs: Vec<(Word, Word)> = firsts
        .iter()
        .flat_map(|first| seconds.iter().map(move |second| (*first, *second)))
        .collect();

    let mut evaluations = map_ordered(&pairs, Schedule::Uniform, |(first, second)| {
        let scope = trace.scope(format_args!("{first}:{second}"));
        let trace = trace.child(scope.as_ref());
        PairEvaluation {
            first: *first,
            second: *second,
            worst_case: evaluate_pair_traced(first, second, candidates, &trace),
        }
    });
    evaluations.sort_by_key(|e| e.worst_case);
    evaluations
}
