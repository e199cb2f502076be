//! Point-in-time copies of the structure being traced.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{NodeId, Value, Weight};

/// One slot of a tree snapshot: a node's value plus the level-order
/// positions of its children within the same snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeSlot {
    pub value: Value,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// An independent copy of the traced structure's visible state.
///
/// Snapshots are cloned into each step at record time; a later mutation
/// of the live structure never rewrites an earlier step. Trees flatten
/// to compact level-order slots (root at 0, then breadth-first
/// left-to-right; each slot links its children by position), so a
/// skewed chain of n keys is exactly n slots. Graph snapshots are the
/// caller's adjacency mapping verbatim, since graph tracers never
/// mutate the graph itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Snapshot {
    Array(Vec<Value>),
    Tree(Vec<TreeSlot>),
    Graph(BTreeMap<NodeId, Vec<NodeId>>),
    WeightedGraph(BTreeMap<NodeId, BTreeMap<NodeId, Weight>>),
}

impl Snapshot {
    /// The array contents, when this is an array snapshot.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Snapshot::Array(values) => Some(values),
            _ => None,
        }
    }

    /// The level-order display slots, when this is a tree snapshot.
    pub fn as_tree(&self) -> Option<&[TreeSlot]> {
        match self {
            Snapshot::Tree(slots) => Some(slots),
            _ => None,
        }
    }
}
