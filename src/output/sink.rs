//! Trace output to the terminal

use crate::solver::{Event, EventSink};
use colored::Colorize;

/// Writes each trace record to stderr as `SCOPE - value`
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl EventSink for StderrSink {
    fn record(&self, scope: &str, event: &Event) {
        eprintln!("{}{}", scope.bright_black(), event);
    }
}
