//! Tests for the step/trace wire format.

use std::collections::BTreeMap;

use stepviz_core::{Snapshot, StepEvent, Trace, TreeSlot};

#[test]
fn test_every_step_carries_kind_state_description() {
    let mut trace = Trace::new();
    trace.record(StepEvent::Initial, Snapshot::Array(vec![2, 1]), "Initial array");
    trace.record(
        StepEvent::Swap { swapped: [0, 1] },
        Snapshot::Array(vec![1, 2]),
        "Swapped 2 and 1",
    );
    trace.record(
        StepEvent::SortFinal { sorted_indices: vec![0, 1] },
        Snapshot::Array(vec![1, 2]),
        "Array is sorted",
    );

    let json = serde_json::to_value(&trace).unwrap();
    let steps = json.as_array().unwrap();
    assert_eq!(steps.len(), 3);
    for step in steps {
        assert!(step["kind"].is_string());
        assert!(!step["state"].is_null());
        assert!(step["description"].is_string());
    }
    assert_eq!(steps[1]["swapped"], serde_json::json!([0, 1]));
    assert_eq!(steps[2]["kind"], "final");
}

#[test]
fn test_graph_snapshot_serializes_as_the_adjacency_mapping() {
    let mut adjacency = BTreeMap::new();
    adjacency.insert(0usize, vec![1usize, 2]);
    adjacency.insert(1, vec![]);
    adjacency.insert(2, vec![1]);

    let json = serde_json::to_value(Snapshot::Graph(adjacency)).unwrap();
    assert_eq!(json["0"], serde_json::json!([1, 2]));
    assert_eq!(json["2"], serde_json::json!([1]));
}

#[test]
fn test_tree_snapshot_serializes_slots_with_child_links() {
    let snapshot = Snapshot::Tree(vec![
        TreeSlot { value: 5, left: Some(1), right: Some(2) },
        TreeSlot { value: 3, left: None, right: None },
        TreeSlot { value: 8, left: None, right: None },
    ]);
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"value": 5, "left": 1, "right": 2},
            {"value": 3, "left": null, "right": null},
            {"value": 8, "left": null, "right": null},
        ])
    );
}

#[test]
fn test_dijkstra_final_carries_distances_and_paths() {
    let mut distances = BTreeMap::new();
    distances.insert(0usize, Some(0u64));
    distances.insert(3, None);
    let mut paths = BTreeMap::new();
    paths.insert(0usize, vec![0usize]);

    let event = StepEvent::DijkstraFinal { distances, paths };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["kind"], "final");
    assert_eq!(json["distances"]["0"], 0);
    assert!(json["distances"]["3"].is_null());
    assert_eq!(json["paths"]["0"], serde_json::json!([0]));
}
