//! Core vocabulary for the stepviz trace engine.
//!
//! Tracers in `stepviz-engine` append [`Step`] records to a [`Trace`];
//! every step carries a `kind` tag, an independent [`Snapshot`] of the
//! structure being traced, and a one-sentence description. This crate
//! holds no algorithm logic: only the step/trace types, the polymorphic
//! input model, configuration, and error enums.

pub mod config;
pub mod errors;
pub mod input;
pub mod trace;
pub mod types;

pub use config::EngineConfig;
pub use errors::{ConfigError, EngineError};
pub use input::{AdjacencyInput, AlgorithmInput};
pub use trace::{Direction, Snapshot, Step, StepEvent, Trace, TreeSlot};
pub use types::{NodeId, Value, Weight};
