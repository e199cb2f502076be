//! Tree tracer laws.

use proptest::prelude::*;
use stepviz_core::{StepEvent, Value};
use stepviz_engine::tree;

#[test]
fn test_insertion_then_inorder_recovers_sorted_order() {
    let keys = vec![5, 3, 8, 1, 4];
    let trace = tree::traversal::trace(&keys);
    let Some(StepEvent::TraversalFinal { inorder_result, .. }) = trace.last().map(|s| &s.event)
    else {
        panic!("expected a traversal final step");
    };
    assert_eq!(inorder_result, &vec![1, 3, 4, 5, 8]);
}

#[test]
fn test_insertion_trace_comparisons_follow_the_search_path() {
    // 4 descends left of 5 and right of 3 before attaching.
    let trace = tree::insertion::trace(&[5, 3, 4]);
    let directions: Vec<String> = trace
        .steps()
        .iter()
        .filter_map(|s| match &s.event {
            StepEvent::TreeComparison { key: 4, direction, .. } => {
                Some(format!("{direction:?}"))
            }
            _ => None,
        })
        .collect();
    assert_eq!(directions, vec!["Left", "Right"]);
}

#[test]
fn test_after_insertion_snapshots_grow_monotonically() {
    let trace = tree::insertion::trace(&[5, 3, 8, 1]);
    let counts: Vec<usize> = trace
        .steps()
        .iter()
        .filter_map(|s| match s.event {
            StepEvent::AfterInsertion { node_count, .. } => Some(node_count),
            _ => None,
        })
        .collect();
    assert_eq!(counts, vec![1, 2, 3, 4]);
}

#[test]
fn test_ascending_keys_build_a_chain_without_snapshot_blowup() {
    // Ascending insertion degenerates to a right-skewed chain; the
    // snapshots must stay one slot per node, not grow with depth.
    let keys: Vec<Value> = (1..=20).collect();
    let trace = tree::insertion::trace(&keys);
    for step in &trace {
        if let Some(slots) = step.state.as_tree() {
            assert!(slots.len() <= keys.len());
        }
    }
    let last = trace.last().unwrap().state.as_tree().unwrap();
    assert_eq!(last.len(), 20);
    for (position, slot) in last.iter().enumerate().take(19) {
        assert_eq!(slot.value, position as Value + 1);
        assert_eq!(slot.left, None);
        assert_eq!(slot.right, Some(position + 1));
    }
}

proptest! {
    #[test]
    fn prop_inorder_gives_sorted_order_for_any_permutation(
        keys in prop::collection::vec(-100i64..100, 1..16)
    ) {
        let trace = tree::traversal::trace(&keys);
        let Some(StepEvent::TraversalFinal { inorder_result, .. }) =
            trace.last().map(|s| &s.event)
        else {
            panic!("expected a traversal final step");
        };
        let mut expected: Vec<Value> = keys.clone();
        expected.sort_unstable();
        prop_assert_eq!(inorder_result, &expected);
    }

    #[test]
    fn prop_all_orders_visit_every_key_once(
        keys in prop::collection::vec(0i64..50, 1..12)
    ) {
        let trace = tree::traversal::trace(&keys);
        let Some(StepEvent::TraversalFinal {
            inorder_result,
            preorder_result,
            postorder_result,
        }) = trace.last().map(|s| &s.event)
        else {
            panic!("expected a traversal final step");
        };
        prop_assert_eq!(inorder_result.len(), keys.len());
        prop_assert_eq!(preorder_result.len(), keys.len());
        prop_assert_eq!(postorder_result.len(), keys.len());
        let mut sorted_pre = preorder_result.clone();
        sorted_pre.sort_unstable();
        prop_assert_eq!(&sorted_pre, inorder_result);
    }
}
