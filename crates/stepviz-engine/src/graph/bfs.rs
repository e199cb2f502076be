//! Breadth-first search tracer.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use stepviz_core::{NodeId, Snapshot, StepEvent, Trace};

/// Trace breadth-first search over `adjacency` from `start`.
///
/// Discovery marks a node visited at enqueue time, so a node is never
/// enqueued twice; re-discoveries surface as `bfs_skip`. Level
/// boundaries are explicit: each `bfs_new_level` step carries the whole
/// frontier about to be processed. Neighbors are explored in the order
/// the adjacency mapping lists them.
pub fn trace(adjacency: &BTreeMap<NodeId, Vec<NodeId>>, start: NodeId) -> Trace {
    let snapshot = || Snapshot::Graph(adjacency.clone());
    let mut trace = Trace::new();

    trace.record(
        StepEvent::Initial,
        snapshot(),
        format!("Starting breadth-first search from node {start}"),
    );

    if adjacency.is_empty() {
        trace.record(
            StepEvent::GraphFinal { visited: Vec::new() },
            snapshot(),
            "The graph is empty",
        );
        return trace;
    }

    let mut discovered: FxHashSet<NodeId> = FxHashSet::default();
    let mut visited: Vec<NodeId> = Vec::new();

    discovered.insert(start);
    trace.record(
        StepEvent::BfsEnqueue { node: start, from: None },
        snapshot(),
        format!("Enqueued start node {start}"),
    );

    let mut frontier = vec![start];
    let mut level = 0usize;
    while !frontier.is_empty() {
        tracing::trace!(level, frontier_size = frontier.len(), "exploring level");
        trace.record(
            StepEvent::BfsNewLevel { level, frontier: frontier.clone() },
            snapshot(),
            format!("Exploring level {level} with {} nodes", frontier.len()),
        );

        let mut next = Vec::new();
        for &node in &frontier {
            trace.record(
                StepEvent::BfsVisit { node },
                snapshot(),
                format!("Visiting node {node}"),
            );
            visited.push(node);

            let neighbors = adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[]);
            for &neighbor in neighbors {
                if discovered.insert(neighbor) {
                    trace.record(
                        StepEvent::BfsEnqueue { node: neighbor, from: Some(node) },
                        snapshot(),
                        format!("Discovered node {neighbor} from node {node}"),
                    );
                    next.push(neighbor);
                } else {
                    trace.record(
                        StepEvent::BfsSkip { node: neighbor, from: node },
                        snapshot(),
                        format!("Node {neighbor} was already discovered"),
                    );
                }
            }
        }
        frontier = next;
        level += 1;
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
        // 0 -> 1, 2; both reach 3.
        let mut adjacency = BTreeMap::new();
        adjacency.insert(0, vec![1, 2]);
        adjacency.insert(1, vec![3]);
        adjacency.insert(2, vec![3]);
        adjacency.insert(3, vec![]);
        adjacency
    }

    #[test]
    fn test_visits_in_level_order() {
        let trace = trace(&diamond(), 0);
        let Some(StepEvent::GraphFinal { visited }) = trace.last().map(|s| &s.event) else {
            panic!("expected a graph final step");
        };
        assert_eq!(visited, &vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_rediscovery_is_skipped_not_enqueued() {
        let trace = trace(&diamond(), 0);
        // 3 is discovered from 1 and skipped when reached again from 2.
        assert_eq!(trace.kind_count("bfs_enqueue"), 4);
        assert_eq!(trace.kind_count("bfs_skip"), 1);
        assert_eq!(trace.kind_count("bfs_visit"), 4);
    }

    #[test]
    fn test_level_boundaries_are_explicit() {
        let trace = trace(&diamond(), 0);
        let frontiers: Vec<Vec<NodeId>> = trace
            .steps()
            .iter()
            .filter_map(|s| match &s.event {
                StepEvent::BfsNewLevel { frontier, .. } => Some(frontier.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(frontiers, vec![vec![0], vec![1, 2], vec![3]]);
    }

    #[test]
    fn test_disconnected_nodes_stay_unvisited() {
        let mut adjacency = diamond();
        adjacency.insert(9, vec![]);
        let trace = trace(&adjacency, 0);
        let Some(StepEvent::GraphFinal { visited }) = trace.last().map(|s| &s.event) else {
            panic!("expected a graph final step");
        };
        assert!(!visited.contains(&9));
    }

    #[test]
    fn test_empty_graph_short_circuits() {
        let trace = trace(&BTreeMap::new(), 0);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().unwrap().kind(), "final");
    }

    #[test]
    fn test_state_is_the_unchanged_adjacency() {
        let adjacency = diamond();
        let trace = trace(&adjacency, 0);
        for step in trace.steps() {
            assert_eq!(step.state, Snapshot::Graph(adjacency.clone()));
        }
    }
}
