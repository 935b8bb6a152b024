//! Step history tracking.
//!
//! The engine appends one record per successful step. Nothing in the
//! engine reads the history back; it exists for inspection and for
//! replaying a traversal in a visualization.

use super::state::State;
use super::symbol::Symbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single step.
///
/// # Example
///
/// ```rust
/// use nondet::core::StepRecord;
/// use chrono::Utc;
///
/// let record = StepRecord {
///     from: "A",
///     symbol: 'x',
///     to: "B",
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, "B");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord<S, A> {
    /// Cursor before the step
    pub from: S,
    /// Symbol consumed
    pub symbol: A,
    /// State chosen by the tie-break
    pub to: S,
    /// When the step happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of steps since the last `start()`.
///
/// # Example
///
/// ```rust
/// use nondet::core::{StepHistory, StepRecord};
/// use chrono::Utc;
///
/// let mut history = StepHistory::new();
/// history.record(StepRecord { from: "A", symbol: 'x', to: "B", timestamp: Utc::now() });
/// history.record(StepRecord { from: "B", symbol: 'y', to: "C", timestamp: Utc::now() });
///
/// assert_eq!(history.get_path(), vec![&"A", &"B", &"C"]);
/// assert_eq!(history.symbols(), vec![&'x', &'y']);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StepHistory<S, A> {
    steps: Vec<StepRecord<S, A>>,
}

impl<S: State, A: Symbol> Default for StepHistory<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Symbol> StepHistory<S, A> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    pub fn record(&mut self, step: StepRecord<S, A>) {
        self.steps.push(step);
    }

    pub(crate) fn clear(&mut self) {
        self.steps.clear();
    }

    /// Get the path of states traversed.
    ///
    /// The `from` of the first step, then the `to` of every step. Empty if
    /// nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            path.push(&first.from);
        }
        for step in &self.steps {
            path.push(&step.to);
        }
        path
    }

    /// Symbols consumed, in order.
    pub fn symbols(&self) -> Vec<&A> {
        self.steps.iter().map(|step| &step.symbol).collect()
    }

    /// Time between the first and last recorded step.
    ///
    /// `None` if there are no steps, or if the clock went backwards.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all steps.
    pub fn steps(&self) -> &[StepRecord<S, A>] {
        &self.steps
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no step has been recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
