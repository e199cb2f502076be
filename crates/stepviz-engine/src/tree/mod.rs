//! Binary search tree tracers.
//!
//! Trees are ephemeral: built inside one tracer invocation and
//! discarded with it. Nodes live in an index-addressed arena (no
//! sharing, no cycles) and get a level-order display index after every
//! insertion so each snapshot flattens to a renderable slot array.
//! Ties go right throughout.

pub mod arena;
pub mod insertion;
pub mod traversal;

pub use arena::BstArena;
