//! Whole-game command
//!
//! Every opening in the first-ply pool is played against every remaining
//! candidate. Openings run one after another; each one's games run in
//! parallel.

use super::progress::bar;
use crate::core::Word;
use crate::output::print_openings;
use crate::solver::{GuessPolicy, OpeningEvaluation, Trace, evaluate_opening};
use anyhow::{Context, Result};

/// Evaluate every opening, sorted by ascending average turns
///
/// Ties keep pool order.
///
/// # Errors
///
/// Returns the first simulation failure, naming its opening.
pub fn evaluate_openings(
    policy: &GuessPolicy<'_>,
    candidates: &[Word],
    trace: &Trace<'_>,
) -> Result<Vec<OpeningEvaluation>> {
    let openings = policy.pool(0, candidates);
    let pb = bar(openings.len(), trace.is_enabled())?;

    let mut results = Vec::with_capacity(openings.len());
    for opening in openings {
        pb.set_message(opening.to_string());
        let scope = trace.scope(opening);
        let evaluation = evaluate_opening(
            opening,
            candidates,
            policy,
            candidates,
            &trace.child(scope.as_ref()),
        )
        .with_context(|| format!("Simulating opening {opening}"))
        .inspect_err(|_| pb.abandon())?;
        results.push(evaluation);
        pb.inc(1);
    }
    pb.finish_and_clear();

    results.sort_by(|a, b| a.average_turns.total_cmp(&b.average_turns));
    Ok(results)
}

/// Run the whole-game mode and print the best `count` openings
///
/// # Errors
///
/// Returns the first simulation failure.
pub fn run_whole_game(
    policy: &GuessPolicy<'_>,
    candidates: &[Word],
    trace: &Trace<'_>,
    count: usize,
) -> Result<()> {
    let mut results = evaluate_openings(policy, candidates, trace)?;
    results.truncate(count);

    if trace.is_enabled() {
        println!();
    }
    print_openings(&results, count);
    Ok(())
}
