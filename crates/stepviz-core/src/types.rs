//! Scalar aliases shared across the workspace.

/// The orderable scalar traced by sorting, searching, and tree tracers.
pub type Value = i64;

/// Graph node identifier.
pub type NodeId = usize;

/// Nonnegative edge weight for weighted graphs.
pub type Weight = u64;
