//! Minimax worst-case calculation for a single guess
//!
//! Given a guess and set of candidates, computes the maximum number of
//! candidates that any one feedback code can leave behind.

use crate::core::{Pattern, Word};
use crate::solver::trace::{Event, Trace};

/// Calculate the worst-case remaining candidates for a guess
///
/// # Strategy
/// For every feedback code the guess could receive:
/// - Count how many candidates would produce that code
/// - Return the maximum count (worst case)
///
/// Returns 0 only for an empty candidate set.
///
/// # Examples
/// ```
/// use wordle_minimax::core::Word;
/// use wordle_minimax::solver::minimax::evaluate_guess;
///
/// let guess = Word::parse("abcde").unwrap();
/// let candidates = vec![
///     Word::parse("abcde").unwrap(),
///     Word::parse("edcba").unwrap(),
/// ];
///
/// assert_eq!(evaluate_guess(&guess, &candidates), 1);
/// ```
#[must_use]
pub fn evaluate_guess(guess: &Word, candidates: &[Word]) -> usize {
    evaluate_guess_traced(guess, candidates, &Trace::disabled())
}

/// [`evaluate_guess`], reporting each non-empty bucket and the result to `trace`
#[must_use]
pub fn evaluate_guess_traced(guess: &Word, candidates: &[Word], trace: &Trace<'_>) -> usize {
    let counts = count_by_pattern(guess, candidates);

    if trace.is_enabled() {
        for pattern in Pattern::all() {
            let count = counts[pattern.index()];
            if count > 0 {
                let scope = trace.scope(pattern);
                trace.child(scope.as_ref()).record(Event::Bucket { count });
            }
        }
    }

    let worst = counts.iter().copied().max().unwrap_or(0);
    if worst > 0 {
        trace.record(Event::WorstCase { value: worst });
    }
    worst
}

/// Histogram of candidates by the feedback they produce for `guess`
fn count_by_pattern(guess: &Word, candidates: &[Word]) -> [usize; Pattern::COUNT] {
    let mut counts = [0usize; Pattern::COUNT];
    for candidate in candidates {
        counts[Pattern::score(guess, candidate).index()] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::trace::testing::RecordingSink;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::parse(w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::parse(text).unwrap()
    }

    #[test]
    fn max_remaining_perfect_split() {
        let candidates = words(&["abcde", "edcba"]);
        assert_eq!(evaluate_guess(&word("abcde"), &candidates), 1);
    }

    #[test]
    fn max_remaining_all_same_pattern() {
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        assert_eq!(evaluate_guess(&word("zzzzz"), &candidates), 3);
    }

    #[test]
    fn max_remaining_skewed_distribution() {
        // IRATE and GRATE both read 02202 against CRANE
        let candidates = words(&["slate", "irate", "crate", "grate"]);
        assert_eq!(evaluate_guess(&word("crane"), &candidates), 2);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        assert_eq!(evaluate_guess(&word("crane"), &[]), 0);
    }

    #[test]
    fn max_remaining_single_candidate() {
        assert_eq!(evaluate_guess(&word("crane"), &words(&["slate"])), 1);
        assert_eq!(evaluate_guess(&word("slate"), &words(&["slate"])), 1);
    }

    #[test]
    fn histogram_agrees_with_is_consistent_counts() {
        let candidates = words(&[
            "slate", "irate", "crate", "grate", "trace", "react", "speed", "erase",
        ]);
        let guess = word("eerie");
        let counts = count_by_pattern(&guess, &candidates);

        for pattern in Pattern::all() {
            let direct = candidates
                .iter()
                .filter(|c| pattern.is_consistent(&guess, c))
                .count();
            assert_eq!(counts[pattern.index()], direct, "{pattern}");
        }
    }

    #[test]
    fn pigeonhole_lower_bound() {
        // 300 distinct words over a small alphabet
        let letters = b"ABCDEFG";
        let mut candidates = Vec::new();
        'outer: for a in letters {
            for b in letters {
                for c in letters {
                    let text = String::from_utf8(vec![*a, *b, *c, b'X', b'Y']).unwrap();
                    candidates.push(word(&text));
                    if candidates.len() == 300 {
                        break 'outer;
                    }
                }
            }
        }

        for guess in ["abcxy", "zzzzz", "gfexy"] {
            let value = evaluate_guess(&word(guess), &candidates);
            assert!(value >= candidates.len().div_ceil(Pattern::COUNT));
            assert!(value <= candidates.len());
        }
    }

    #[test]
    fn trace_does_not_change_value() {
        let candidates = words(&["slate", "irate", "crate", "grate"]);
        let guess = word("crane");
        let sink = RecordingSink::default();

        let plain = evaluate_guess(&guess, &candidates);
        let trace = Trace::new(&sink, 1);
        let traced = evaluate_guess_traced(&guess, &candidates, &trace);
        assert_eq!(plain, traced);

        // One record per non-empty bucket plus the worst case
        let records = sink.records.lock().unwrap();
        assert_eq!(records.len(), 4);
        assert!(records.contains(&(String::new(), Event::WorstCase { value: 2 })));
    }
}
