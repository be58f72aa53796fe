//! Parallel evaluation harness
//!
//! Every outer loop of the search maps a pure function over an immutable
//! slice. Results always come back in input order, and reductions run only
//! after every worker has finished, so the thread schedule cannot change an
//! answer or a tie-break.

use rayon::prelude::*;

/// How work items are handed to the rayon pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Items cost about the same; let rayon split the slice in large chunks
    Uniform,
    /// Item cost varies; hand out one item at a time for work stealing
    Balanced,
}

/// Map `f` over `items` in parallel, keeping input order
pub fn map_ordered<T, R, F>(items: &[T], schedule: Schedule, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    match schedule {
        Schedule::Uniform => items.par_iter().map(f).collect(),
        Schedule::Balanced => items.par_iter().with_max_len(1).map(f).collect(),
    }
}

/// Largest value, or 0 for no values
pub fn max_or_zero<I>(values: I) -> usize
where
    I: IntoIterator<Item = usize>,
{
    values.into_iter().max().unwrap_or(0)
}

/// Arithmetic mean, or 0.0 for no values
#[must_use]
pub fn mean(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
}

/// Position of the first minimum under `key`
pub fn first_min_by_key<T, K, F>(items: &[T], key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items
        .iter()
        .enumerate()
        .min_by_key(|(_, item)| key(item))
        .map(|(idx, _)| idx)
}
