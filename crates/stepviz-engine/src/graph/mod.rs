//! Graph tracers.
//!
//! Graphs never mutate: every step's `state` is the caller's adjacency
//! mapping verbatim, and only the traversal bookkeeping (queue, stack,
//! distance table) moves. Note the deliberate asymmetry: BFS marks a
//! node visited at enqueue time, DFS at pop time, which changes which
//! duplicate-visit steps appear in the trace.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
