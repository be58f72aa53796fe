//! Depth-limited trace of intermediate search values
//!
//! Evaluators report per-guess and per-branch values to an optional
//! [`EventSink`]. A [`Trace`] carries the scope (the chain of guesses and
//! feedback codes leading to the current branch) and the depth still
//! available. Children of an exhausted or disabled trace are disabled, and a
//! disabled trace never allocates. Tracing never changes a computed value.

use std::fmt;

/// One reported value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Candidates that produce the scope's feedback code
    Bucket { count: usize },
    /// Worst case of a guess (or guess pair)
    WorstCase { value: usize },
    /// Branch size and best follow-up value of a two-ply branch or guess
    TwoPly {
        branch_size: usize,
        second_ply: usize,
    },
    /// Turns needed to reach the scope's solution
    Solved { turns: u32 },
    /// Summary of an opening over all solutions
    Opening {
        average_turns: f64,
        worst_turns: u32,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bucket { count } => write!(f, " - {count}"),
            Self::WorstCase { value } => write!(f, " - {value}"),
            Self::TwoPly {
                branch_size,
                second_ply,
            } => write!(f, " - {branch_size},{second_ply}"),
            Self::Solved { turns } => write!(f, " - {turns}"),
            Self::Opening {
                average_turns,
                worst_turns,
            } => write!(f, " - {average_turns:.5} - {worst_turns}"),
        }
    }
}

/// Receiver of trace events
///
/// Called concurrently from worker threads.
pub trait EventSink: Sync {
    fn record(&self, scope: &str, event: &Event);
}

/// Handle passed down through the evaluators
#[derive(Clone, Copy)]
pub struct Trace<'a> {
    sink: Option<&'a dyn EventSink>,
    scope: Option<&'a Scope<'a>>,
    depth: usize,
}

/// Owned scope label kept alive by the frame that created a child trace
pub struct Scope<'a> {
    parent: Option<&'a Scope<'a>>,
    label: String,
}

impl Scope<'_> {
    fn write_path(&self, out: &mut String) {
        if let Some(parent) = self.parent {
            parent.write_path(out);
            out.push(':');
        }
        out.push_str(&self.label);
    }
}

impl<'a> Trace<'a> {
    /// A trace that records nothing
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            sink: None,
            scope: None,
            depth: 0,
        }
    }

    /// Root trace allowing `depth` nested levels
    #[must_use]
    pub fn new(sink: &'a dyn EventSink, depth: usize) -> Self {
        Self {
            sink: Some(sink),
            scope: None,
            depth,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Label for a child trace, or `None` when depth is exhausted
    ///
    /// The returned scope must outlive the child; see [`Trace::child`].
    #[must_use]
    pub fn scope(&self, label: impl fmt::Display) -> Option<Scope<'a>> {
        if self.sink.is_some() && self.depth > 0 {
            Some(Scope {
                parent: self.scope,
                label: label.to_string(),
            })
        } else {
            None
        }
    }

    /// Child trace one level deeper
    ///
    /// ```
    /// use wordle_minimax::solver::Trace;
    ///
    /// let root = Trace::disabled();
    /// let scope = root.scope("RAISE");
    /// let child = root.child(scope.as_ref());
    /// assert!(!child.is_enabled());
    /// ```
    #[must_use]
    pub fn child<'b>(&self, scope: Option<&'b Scope<'a>>) -> Trace<'b>
    where
        'a: 'b,
    {
        match (self.sink, scope) {
            (Some(sink), Some(scope)) if self.depth > 0 => Trace {
                sink: Some(sink),
                scope: Some(scope),
                depth: self.depth - 1,
            },
            _ => Trace::disabled(),
        }
    }

    /// Report a value under this trace's scope
    pub fn record(&self, event: Event) {
        if let Some(sink) = self.sink {
            let mut path = String::new();
            if let Some(scope) = self.scope {
                scope.write_path(&mut path);
            }
            sink.record(&path, &event);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{Event, EventSink};
    use std::sync::Mutex;

    /// Sink that keeps every record for assertions
    #[derive(Default)]
    pub struct RecordingSink {
        pub records: Mutex<Vec<(String, Event)>>,
    }

    impl RecordingSink {
        pub fn scopes(&self) -> Vec<String> {
            let mut scopes: Vec<String> = self
                .records
                .lock()
                .unwrap()
                .iter()
                .map(|(scope, _)| scope.clone())
                .collect();
            scopes.sort();
            scopes
        }
    }

    impl EventSink for RecordingSink {
        fn record(&self, scope: &str, event: &Event) {
            let mut records = self.records.lock().unwrap();
            records.push((scope.to_string(), *event));
        }
    }
}
