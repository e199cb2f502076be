//! Step records: one tagged event per state transition.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::trace::Snapshot;
use crate::types::{NodeId, Value, Weight};

/// Which child a tree comparison descends into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

/// The tagged event of a single step.
///
/// Serializes internally tagged as `kind`, so the auxiliary fields of
/// each variant land flat next to `state` and `description` in the
/// step's JSON mapping. Several variants share the wire tag `final`:
/// each algorithm family closes its trace with its own payload. Tags
/// are therefore unique per algorithm, not across the whole enum, and
/// the enum is serialize-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepEvent {
    /// Every trace opens with the untouched input.
    Initial,

    // Sorting.
    Comparison { comparing: [usize; 2] },
    Swap { swapped: [usize; 2] },
    BeforeSwap { swapping: [usize; 2] },
    AfterSwap { swapped: [usize; 2] },
    NoSwapNeeded { index: usize },
    Sorted { sorted_indices: Vec<usize> },
    EarlyTermination { pass: usize },
    MinSelected { min_index: usize },
    NewMin { min_index: usize },
    Shift { from: usize, to: usize },
    Insert { index: usize, key: Value },
    AlreadyPositioned { index: usize },
    Divide { left_range: [usize; 2], right_range: [usize; 2], depth: usize },
    /// Merge comparisons index the halves' original positions, whose
    /// live cells may already be overwritten by earlier placements, so
    /// the payload carries the compared values as well.
    #[serde(rename = "comparison")]
    MergeComparison { comparing: [usize; 2], values: [Value; 2] },
    Place { index: usize, value: Value, depth: usize },
    Merged { range: [usize; 2], depth: usize },
    RecursiveCall { range: [usize; 2], depth: usize },
    Pivot { pivot_index: usize, depth: usize },
    Partition {
        left_range: Option<[usize; 2]>,
        right_range: Option<[usize; 2]>,
        depth: usize,
    },
    #[serde(rename = "final")]
    SortFinal { sorted_indices: Vec<usize> },

    // Searching. Bounds are signed: `right` passes through -1 when the
    // target is smaller than everything in the array.
    Presort,
    SearchRange { left: i64, right: i64, mid: i64 },
    Checking { index: usize },
    Found { index: usize },
    MoveRight { left: i64 },
    MoveLeft { right: i64 },
    NotFound { target: Option<Value> },
    #[serde(rename = "final")]
    SearchFinal {
        found: bool,
        index: Option<usize>,
        target: Option<Value>,
    },

    // Tree construction.
    InsertRoot { value: Value },
    #[serde(rename = "comparison")]
    TreeComparison {
        key: Value,
        node: Value,
        direction: Direction,
    },
    InsertLeft { parent: Value, value: Value },
    InsertRight { parent: Value, value: Value },
    AfterInsertion { inserted: Value, node_count: usize },
    #[serde(rename = "final")]
    TreeFinal { node_count: usize },

    // Tree traversal.
    InorderStart,
    InorderVisit { value: Value },
    InorderLeft { from: Value },
    InorderRight { from: Value },
    InorderComplete { order: Vec<Value> },
    PreorderStart,
    PreorderVisit { value: Value },
    PreorderLeft { from: Value },
    PreorderRight { from: Value },
    PreorderComplete { order: Vec<Value> },
    PostorderStart,
    PostorderVisit { value: Value },
    PostorderLeft { from: Value },
    PostorderRight { from: Value },
    PostorderComplete { order: Vec<Value> },
    #[serde(rename = "final")]
    TraversalFinal {
        inorder_result: Vec<Value>,
        preorder_result: Vec<Value>,
        postorder_result: Vec<Value>,
    },

    // Graph traversal.
    BfsNewLevel { level: usize, frontier: Vec<NodeId> },
    BfsVisit { node: NodeId },
    BfsEnqueue { node: NodeId, from: Option<NodeId> },
    BfsSkip { node: NodeId, from: NodeId },
    DfsPush { node: NodeId, from: Option<NodeId> },
    DfsVisit { node: NodeId },
    DfsSkip { node: NodeId },
    DfsBacktrack { node: NodeId },
    #[serde(rename = "final")]
    GraphFinal { visited: Vec<NodeId> },

    // Shortest paths.
    DijkstraCurrent { node: NodeId, distance: Weight },
    DijkstraCheck {
        from: NodeId,
        to: NodeId,
        weight: Weight,
        candidate: Weight,
    },
    DijkstraUpdate {
        node: NodeId,
        previous: Option<Weight>,
        distance: Weight,
    },
    DijkstraUnreachable { unreachable: Vec<NodeId> },
    #[serde(rename = "final")]
    DijkstraFinal {
        distances: BTreeMap<NodeId, Option<Weight>>,
        paths: BTreeMap<NodeId, Vec<NodeId>>,
    },
}

impl StepEvent {
    /// The wire tag this event serializes under.
    pub fn kind(&self) -> &'static str {
        match self {
            StepEvent::Initial => "initial",
            StepEvent::Comparison { .. } => "comparison",
            StepEvent::Swap { .. } => "swap",
            StepEvent::BeforeSwap { .. } => "before_swap",
            StepEvent::AfterSwap { .. } => "after_swap",
            StepEvent::NoSwapNeeded { .. } => "no_swap_needed",
            StepEvent::Sorted { .. } => "sorted",
            StepEvent::EarlyTermination { .. } => "early_termination",
            StepEvent::MinSelected { .. } => "min_selected",
            StepEvent::NewMin { .. } => "new_min",
            StepEvent::Shift { .. } => "shift",
            StepEvent::Insert { .. } => "insert",
            StepEvent::AlreadyPositioned { .. } => "already_positioned",
            StepEvent::Divide { .. } => "divide",
            StepEvent::MergeComparison { .. } => "comparison",
            StepEvent::Place { .. } => "place",
            StepEvent::Merged { .. } => "merged",
            StepEvent::RecursiveCall { .. } => "recursive_call",
            StepEvent::Pivot { .. } => "pivot",
            StepEvent::Partition { .. } => "partition",
            StepEvent::SortFinal { .. } => "final",
            StepEvent::Presort => "presort",
            StepEvent::SearchRange { .. } => "search_range",
            StepEvent::Checking { .. } => "checking",
            StepEvent::Found { .. } => "found",
            StepEvent::MoveRight { .. } => "move_right",
            StepEvent::MoveLeft { .. } => "move_left",
            StepEvent::NotFound { .. } => "not_found",
            StepEvent::SearchFinal { .. } => "final",
            StepEvent::InsertRoot { .. } => "insert_root",
            StepEvent::TreeComparison { .. } => "comparison",
            StepEvent::InsertLeft { .. } => "insert_left",
            StepEvent::InsertRight { .. } => "insert_right",
            StepEvent::AfterInsertion { .. } => "after_insertion",
            StepEvent::TreeFinal { .. } => "final",
            StepEvent::InorderStart => "inorder_start",
            StepEvent::InorderVisit { .. } => "inorder_visit",
            StepEvent::InorderLeft { .. } => "inorder_left",
            StepEvent::InorderRight { .. } => "inorder_right",
            StepEvent::InorderComplete { .. } => "inorder_complete",
            StepEvent::PreorderStart => "preorder_start",
            StepEvent::PreorderVisit { .. } => "preorder_visit",
            StepEvent::PreorderLeft { .. } => "preorder_left",
            StepEvent::PreorderRight { .. } => "preorder_right",
            StepEvent::PreorderComplete { .. } => "preorder_complete",
            StepEvent::PostorderStart => "postorder_start",
            StepEvent::PostorderVisit { .. } => "postorder_visit",
            StepEvent::PostorderLeft { .. } => "postorder_left",
            StepEvent::PostorderRight { .. } => "postorder_right",
            StepEvent::PostorderComplete { .. } => "postorder_complete",
            StepEvent::TraversalFinal { .. } => "final",
            StepEvent::BfsNewLevel { .. } => "bfs_new_level",
            StepEvent::BfsVisit { .. } => "bfs_visit",
            StepEvent::BfsEnqueue { .. } => "bfs_enqueue",
            StepEvent::BfsSkip { .. } => "bfs_skip",
            StepEvent::DfsPush { .. } => "dfs_push",
            StepEvent::DfsVisit { .. } => "dfs_visit",
            StepEvent::DfsSkip { .. } => "dfs_skip",
            StepEvent::DfsBacktrack { .. } => "dfs_backtrack",
            StepEvent::GraphFinal { .. } => "final",
            StepEvent::DijkstraCurrent { .. } => "dijkstra_current",
            StepEvent::DijkstraCheck { .. } => "dijkstra_check",
            StepEvent::DijkstraUpdate { .. } => "dijkstra_update",
            StepEvent::DijkstraUnreachable { .. } => "dijkstra_unreachable",
            StepEvent::DijkstraFinal { .. } => "final",
        }
    }

    /// True for the terminal step kinds that close a trace.
    pub fn is_final(&self) -> bool {
        self.kind() == "final"
    }
}

/// One atomic, order-timestamped event in a trace.
///
/// Serializes to a flat mapping: the event's `kind` and auxiliary
/// fields, the authoritative `state` snapshot, and a one-sentence,
/// present-tense `description` naming concrete values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    #[serde(flatten)]
    pub event: StepEvent,
    pub state: Snapshot,
    pub description: String,
}

impl Step {
    /// The wire tag of this step's event.
    pub fn kind(&self) -> &'static str {
        self.event.kind()
    }
}
