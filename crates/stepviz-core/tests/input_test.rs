//! Boundary-shape tests: every accepted JSON form normalizes without error.

use stepviz_core::AlgorithmInput;

#[test]
fn test_graph_object_with_list_neighbors() {
    let input: AlgorithmInput = serde_json::from_str(
        r#"{"graph": {"0": [1, 2], "1": [3], "2": [1, 3], "3": []}, "start": 0}"#,
    )
    .unwrap();
    let (adjacency, start) = input.unweighted_graph(0);
    assert_eq!(start, 0);
    assert_eq!(adjacency.len(), 4);
    assert_eq!(adjacency[&2], vec![1, 3]);
}

#[test]
fn test_neighbor_order_is_preserved() {
    let input: AlgorithmInput =
        serde_json::from_str(r#"{"graph": {"0": [3, 1, 2]}}"#).unwrap();
    let (adjacency, _) = input.unweighted_graph(0);
    assert_eq!(adjacency[&0], vec![3, 1, 2]);
}

#[test]
fn test_weighted_input_can_be_viewed_unweighted() {
    let input: AlgorithmInput =
        serde_json::from_str(r#"{"graph": {"0": {"2": 7, "1": 4}}}"#).unwrap();
    let (adjacency, _) = input.unweighted_graph(0);
    assert_eq!(adjacency[&0], vec![1, 2]);
}

#[test]
fn test_graph_input_degrades_to_empty_sequence() {
    let input: AlgorithmInput = serde_json::from_str(r#"{"graph": {"0": [1]}}"#).unwrap();
    assert!(input.sequence().is_empty());
    assert_eq!(input.search_parts(), (Vec::new(), None));
}

#[test]
fn test_empty_object_is_an_empty_graph() {
    let input: AlgorithmInput = serde_json::from_str("{}").unwrap();
    let (adjacency, start) = input.unweighted_graph(0);
    assert!(adjacency.is_empty());
    assert_eq!(start, 0);
}

#[test]
fn test_input_round_trips_through_json() {
    let source = r#"{"array": [5, 3, 1], "target": 3}"#;
    let input: AlgorithmInput = serde_json::from_str(source).unwrap();
    let json = serde_json::to_string(&input).unwrap();
    let reparsed: AlgorithmInput = serde_json::from_str(&json).unwrap();
    assert_eq!(input, reparsed);
}
