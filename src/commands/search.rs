//! Ranking commands for the one-ply, two-ply and blind modes

use super::progress::spinner;
use crate::core::Word;
use crate::output::{print_evaluations, print_pairs, print_two_ply};
use crate::solver::{GuessPolicy, Trace, rank_guesses, rank_pairs, rank_two_ply};
use anyhow::Result;

/// Rank the first-ply pool by one-ply worst case
///
/// # Errors
///
/// Returns an error if the progress indicator cannot be created.
pub fn run_one_ply(
    policy: &GuessPolicy<'_>,
    candidates: &[Word],
    trace: &Trace<'_>,
    count: usize,
) -> Result<()> {
    let pool = policy.pool(0, candidates);
    let message = format!("Evaluating {} guesses", pool.len());
    let pb = spinner(&message, trace.is_enabled())?;
    let ranked = rank_guesses(pool, candidates, trace);
    pb.finish_and_clear();

    if trace.is_enabled() {
        println!();
    }
    print_evaluations(&ranked, count);
    Ok(())
}

/// Rank the first-ply pool by two-ply worst case
///
/// # Errors
///
/// Returns an error if a second-ply pool is empty.
pub fn run_two_ply(
    policy: &GuessPolicy<'_>,
    candidates: &[Word],
    trace: &Trace<'_>,
    count: usize,
) -> Result<()> {
    let pool = policy.pool(0, candidates);
    let message = format!("Evaluating {} guesses two plies deep", pool.len());
    let pb = spinner(&message, trace.is_enabled())?;
    let ranked = rank_two_ply(policy, candidates, trace);
    pb.finish_and_clear();
    let ranked = ranked?;

    if trace.is_enabled() {
        println!();
    }
    print_two_ply(&ranked, count);
    Ok(())
}

/// Rank guess pairs committed before any feedback
///
/// # Errors
///
/// Returns an error if the progress indicator cannot be created.
pub fn run_blind(
    policy: &GuessPolicy<'_>,
    candidates: &[Word],
    trace: &Trace<'_>,
    count: usize,
) -> Result<()> {
    let pairs = policy.pool(0, candidates).len() * policy.pool(1, candidates).len();
    let message = format!("Evaluating {pairs} guess pairs");
    let pb = spinner(&message, trace.is_enabled())?;
    let ranked = rank_pairs(policy, candidates, trace);
    pb.finish_and_clear();

    if trace.is_enabled() {
        println!();
    }
    print_pairs(&ranked, count);
    Ok(())
}
