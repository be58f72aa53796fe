//! Display functions for command results

use super::formatters::{
    constraint_line, evaluation_line, opening_line, pair_line, top, two_ply_line, word_list,
};
use crate::core::{Constraint, Word};
use crate::solver::{Evaluation, OpeningEvaluation, PairEvaluation, TwoPlyEvaluation};
use colored::Colorize;

/// At most this many remaining candidates are listed by name
const LIST_LIMIT: usize = 10;

/// Print the replayed guesses and what they leave
pub fn print_replay(constraints: &[Constraint], remaining: &[Word]) {
    for constraint in constraints {
        println!("{}", constraint_line(constraint));
    }
    if !constraints.is_empty() {
        println!();
    }

    match remaining.len() {
        0 => println!("{}", "No solutions exist.".red().bold()),
        1 => {
            println!("Word is:");
            println!("{}", remaining[0].to_string().bright_green().bold());
        }
        n if n <= LIST_LIMIT => {
            println!("{} possible words:", n.to_string().bright_yellow());
            println!("{}", word_list(remaining));
            println!();
        }
        n => {
            println!("{} possible words.", n.to_string().bright_yellow());
            println!();
        }
    }
}

/// Print the best one-ply guesses
pub fn print_evaluations(evaluations: &[Evaluation], count: usize) {
    println!("{}", "Best next guesses:".bright_cyan().bold());
    for evaluation in top(evaluations, count, |e| e.worst_case as f64) {
        println!("{}", evaluation_line(evaluation));
    }
}

/// Print the best two-ply first guesses
pub fn print_two_ply(evaluations: &[TwoPlyEvaluation], count: usize) {
    println!("{}", "Best next guesses:".bright_cyan().bold());
    for evaluation in top(evaluations, count, |e| e.second_ply as f64) {
        println!("{}", two_ply_line(evaluation));
    }
}

/// Print the best blind guess pairs
pub fn print_pairs(evaluations: &[PairEvaluation], count: usize) {
    println!("{}", "Best two next guesses:".bright_cyan().bold());
    for evaluation in top(evaluations, count, |e| e.worst_case as f64) {
        println!("{}", pair_line(evaluation));
    }
}

/// Print opening statistics, best average first
pub fn print_openings(evaluations: &[OpeningEvaluation], count: usize) {
    println!("{}", "Results:".bright_cyan().bold());
    for evaluation in top(evaluations, count, |e| e.average_turns) {
        println!("{}", opening_line(evaluation));
    }
}
