//! Terminal output formatting
//!
//! Result listings go to stdout, trace records to stderr.

pub mod display;
pub mod formatters;
mod sink;

pub use display::{print_evaluations, print_openings, print_pairs, print_replay, print_two_ply};
pub use sink::StderrSink;
