//! Dijkstra shortest-path tracer.
//!
//! Minimum extraction scans the unvisited set each round instead of
//! using a priority queue: O(V^2), but every selection is a visible,
//! explainable step. Ties between equal distances break toward the
//! smaller node id, keeping the trace deterministic.

use std::collections::{BTreeMap, BTreeSet};

use stepviz_core::{NodeId, Snapshot, StepEvent, Trace, Weight};

/// Trace Dijkstra's algorithm over `adjacency` from `start`.
///
/// Distances start at infinity (`None`) except `start` at 0; a
/// `dijkstra_update` is recorded only on strict improvement. Once the
/// minimum remaining distance is infinite the run ends early with
/// `dijkstra_unreachable`. The `final` step carries the full distance
/// table and the shortest path to every reachable node, reconstructed
/// from predecessor back-pointers and reversed.
pub fn trace(adjacency: &BTreeMap<NodeId, BTreeMap<NodeId, Weight>>, start: NodeId) -> Trace {
    let snapshot = || Snapshot::WeightedGraph(adjacency.clone());
    let mut trace = Trace::new();

    trace.record(
        StepEvent::Initial,
        snapshot(),
        format!("Computing shortest paths from node {start}"),
    );

    let mut nodes: BTreeSet<NodeId> = adjacency.keys().copied().collect();
    for neighbors in adjacency.values() {
        nodes.extend(neighbors.keys().copied());
    }

    if nodes.is_empty() {
        trace.record(
            StepEvent::DijkstraFinal {
                distances: BTreeMap::new(),
                paths: BTreeMap::new(),
            },
            snapshot(),
            "The graph is empty",
        );
        return trace;
    }
    nodes.insert(start);

    let mut distances: BTreeMap<NodeId, Option<Weight>> =
        nodes.iter().map(|&n| (n, None)).collect();
    distances.insert(start, Some(0));
    let mut predecessors: BTreeMap<NodeId, NodeId> = BTreeMap::new();
    let mut unvisited: BTreeSet<NodeId> = nodes.clone();

    let no_neighbors = BTreeMap::new();
    while !unvisited.is_empty() {
        // Array-scan minimum over the unvisited set; (distance, node)
        // ordering makes equal distances resolve to the smaller id.
        let current = unvisited
            .iter()
            .filter_map(|&n| distances[&n].map(|d| (d, n)))
            .min();

        let Some((distance, node)) = current else {
            let unreachable: Vec<NodeId> = unvisited.iter().copied().collect();
            trace.record(
                StepEvent::DijkstraUnreachable { unreachable: unreachable.clone() },
                snapshot(),
                format!("{} nodes are unreachable from node {start}", unreachable.len()),
            );
            break;
        };
        unvisited.remove(&node);
        tracing::trace!(node, distance, remaining = unvisited.len(), "selected minimum");

        trace.record(
            StepEvent::DijkstraCurrent { node, distance },
            snapshot(),
            format!("Visiting node {node} at distance {distance}"),
        );

        for (&neighbor, &weight) in adjacency.get(&node).unwrap_or(&no_neighbors) {
            // Extreme weights saturate in the step payload and never
            // count as an improvement.
            let (candidate, overflowed) = match distance.checked_add(weight) {
                Some(candidate) => (candidate, false),
                None => (Weight::MAX, true),
            };
            trace.record(
                StepEvent::DijkstraCheck { from: node, to: neighbor, weight, candidate },
                snapshot(),
                format!("Checking edge {node} to {neighbor} with weight {weight}"),
            );
            let previous = distances[&neighbor];
            let improves = !overflowed && previous.map_or(true, |d| candidate < d);
            if improves {
                distances.insert(neighbor, Some(candidate));
                predecessors.insert(neighbor, node);
                trace.record(
                    StepEvent::DijkstraUpdate { node: neighbor, previous, distance: candidate },
                    snapshot(),
                    format!("Updating node {neighbor} to distance {candidate} via node {node}"),
                );
            }
        }
    }

    let paths = reconstruct_paths(&distances, &predecessors);
    trace.record(
        StepEvent::DijkstraFinal { distances: distances.clone(), paths },
        snapshot(),
        format!("Computed shortest paths from node {start}"),
    );
    trace
}

/// Walk predecessor back-pointers from each reachable node and reverse.
fn reconstruct_paths(
    distances: &BTreeMap<NodeId, Option<Weight>>,
    predecessors: &BTreeMap<NodeId, NodeId>,
) -> BTreeMap<NodeId, Vec<NodeId>> {
    let mut paths = BTreeMap::new();
    for (&node, distance) in distances {
        if distance.is_none() {
            continue;
        }
        let mut path = vec![node];
        let mut current = node;
        while let Some(&previous) = predecessors.get(&current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        paths.insert(node, path);
    }
    paths
}
