//! The append-only trace recorder.

use serde::Serialize;

use crate::trace::{Snapshot, Step, StepEvent};

/// The complete ordered output of one tracer invocation.
///
/// Append-only while a tracer runs; immutable once returned. Step order
/// is the only ordering guarantee the trace makes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one step. `state` must already be an independent copy of
    /// the traced structure as it exists at this event.
    pub fn record(
        &mut self,
        event: StepEvent,
        state: Snapshot,
        description: impl Into<String>,
    ) {
        self.steps.push(Step {
            event,
            state,
            description: description.into(),
        });
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Count the steps carrying the given wire tag.
    pub fn kind_count(&self, kind: &str) -> usize {
        self.steps.iter().filter(|s| s.kind() == kind).count()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
