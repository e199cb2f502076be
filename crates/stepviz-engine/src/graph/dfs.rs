//! Depth-first search tracer.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use stepviz_core::{NodeId, Snapshot, StepEvent, Trace};

/// Trace stack-based depth-first search over `adjacency` from `start`.
///
/// A node is marked visited only when popped, so it may sit on the
/// stack more than once; popping a duplicate records `dfs_skip`.
/// Neighbors are pushed in reverse adjacency order, making the pop
/// order match what ascending recursive DFS would visit. Popping a node
/// whose every neighbor is already visited records `dfs_backtrack`.
pub fn trace(adjacency: &BTreeMap<NodeId, Vec<NodeId>>, start: NodeId) -> Trace {
    let snapshot = || Snapshot::Graph(adjacency.clone());
    let mut trace = Trace::new();

    trace.record(
        StepEvent::Initial,
        snapshot(),
        format!("Starting depth-first search from node {start}"),
    );

    if adjacency.is_empty() {
        trace.record(
            StepEvent::GraphFinal { visited: Vec::new() },
            snapshot(),
            "The graph is empty",
        );
        return trace;
    }

    let mut visited_set: FxHashSet<NodeId> = FxHashSet::default();
    let mut visited: Vec<NodeId> = Vec::new();
    let mut stack = vec![start];

    trace.record(
        StepEvent::DfsPush { node: start, from: None },
        snapshot(),
        format!("Pushed start node {start} onto the stack"),
    );

    while let Some(node) = stack.pop() {
        if !visited_set.insert(node) {
            trace.record(
                StepEvent::DfsSkip { node },
                snapshot(),
                format!("Node {node} was already visited"),
            );
            continue;
        }

        trace.record(
            StepEvent::DfsVisit { node },
            snapshot(),
            format!("Visiting node {node}"),
        );
        visited.push(node);

        let neighbors = adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[]);
        let has_unvisited = neighbors.iter().any(|n| !visited_set.contains(n));
        if !has_unvisited {
            trace.record(
                StepEvent::DfsBacktrack { node },
                snapshot(),
                format!("Every neighbor of node {node} is already visited, backtracking"),
            );
            continue;
        }

        for &neighbor in neighbors.iter().rev() {
            if !visited_set.contains(&neighbor) {
                trace.record(
                    StepEvent::DfsPush { node: neighbor, from: Some(node) },
                    snapshot(),
                    format!("Pushed node {neighbor} onto the stack"),
                );
                stack.push(neighbor);
            }
        }
    }

    trace.record(
        StepEvent::GraphFinal { visited: visited.clone() },
        snapshot(),
        format!("Visited {} nodes", visited.len()),
    );
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> BTreeMap<NodeId, Vec<NodeId>> {
        let mut adjacency = BTreeMap::new();
        adjacency.insert(0, vec![1, 2]);
        adjacency.insert(1, vec![3]);
        adjacency.insert(2, vec![3]);
        adjacency.insert(3, vec![]);
        adjacency
    }

    #[test]
    fn test_pop_order_matches_recursive_dfs() {
        let trace = trace(&diamond(), 0);
        let Some(StepEvent::GraphFinal { visited }) = trace.last().map(|s| &s.event) else {
            panic!("expected a graph final step");
        };
        // Recursive order: 0, then 1, then 3, then back out to 2.
        assert_eq!(visited, &vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_duplicate_pushes_are_processed_once() {
        // 3 is pushed from 0 and again from 1 before either pop; the
        // second pop records a skip instead of a visit.
        let mut adjacency = BTreeMap::new();
        adjacency.insert(0, vec![1, 3]);
        adjacency.insert(1, vec![3]);
        adjacency.insert(3, vec![]);
        let trace = trace(&adjacency, 0);
        assert_eq!(trace.kind_count("dfs_skip"), 1);
        let Some(StepEvent::GraphFinal { visited }) = trace.last().map(|s| &s.event) else {
            panic!("expected a graph final step");
        };
        assert_eq!(visited, &vec![0, 1, 3]);
    }

    #[test]
    fn test_backtracks_at_dead_ends() {
        let trace = trace(&diamond(), 0);
        // 3 has no neighbors and 2's only neighbor is visited by then.
        assert_eq!(trace.kind_count("dfs_backtrack"), 2);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut adjacency = BTreeMap::new();
        adjacency.insert(0, vec![1]);
        adjacency.insert(1, vec![2]);
        adjacency.insert(2, vec![0]);
        let trace = trace(&adjacency, 0);
        let Some(StepEvent::GraphFinal { visited }) = trace.last().map(|s| &s.event) else {
            panic!("expected a graph final step");
        };
        assert_eq!(visited, &vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_graph_short_circuits() {
        let trace = trace(&BTreeMap::new(), 0);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().unwrap().kind(), "final");
    }
}
