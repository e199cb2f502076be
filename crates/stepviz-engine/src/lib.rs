//! Algorithm step-trace engine.
//!
//! Each tracer executes a classical algorithm and records every state
//! transition as an ordered [`Trace`] of step records, annotated with
//! enough structured metadata for a renderer to replay the run without
//! re-executing the algorithm. Tracers are pure and deterministic: the
//! same input always produces the same step sequence, the caller's
//! input is never mutated, and one invocation computes one complete
//! trace before returning.
//!
//! [`Trace`]: stepviz_core::Trace

pub mod dispatch;
pub mod graph;
pub mod searching;
pub mod sorting;
pub mod tree;

pub use dispatch::{run, AlgorithmName, Engine};
