//! The trace model: step events, snapshots, and the append-only trace.

pub mod snapshot;
pub mod step;
pub mod trace;

pub use snapshot::{Snapshot, TreeSlot};
pub use step::{Direction, Step, StepEvent};
pub use trace::Trace;
