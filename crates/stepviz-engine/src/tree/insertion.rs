//! BST insertion-sequence tracer.

use stepviz_core::{Direction, Snapshot, StepEvent, Trace, Value};

use super::BstArena;

/// Trace the construction of a BST from `keys`, inserted in order.
///
/// Each key walks from the root with a `comparison` step per visited
/// node, attaches with `insert_root`/`insert_left`/`insert_right`, and
/// closes with `after_insertion` once the level-order reindex has run.
pub fn trace(keys: &[Value]) -> Trace {
    let mut arena = BstArena::new();
    let mut trace = Trace::new();

    trace.record(
        StepEvent::Initial,
        Snapshot::Array(keys.to_vec()),
        "Keys to insert",
    );

    for &key in keys {
        match arena.root() {
            None => {
                arena.insert_root(key);
                trace.record(
                    StepEvent::InsertRoot { value: key },
                    Snapshot::Tree(arena.display_slots()),
                    format!("Inserting {key} as the root"),
                );
            }
            Some(root) => {
                let mut current = root;
                loop {
                    let node_value = arena.node(current).value;
                    if key < node_value {
                        trace.record(
                            StepEvent::TreeComparison {
                                key,
                                node: node_value,
                                direction: Direction::Left,
                            },
                            Snapshot::Tree(arena.display_slots()),
                            format!("{key} is less than {node_value}, going left"),
                        );
                        match arena.node(current).left {
                            Some(left) => current = left,
                            None => {
                                arena.attach_left(current, key);
                                trace.record(
                                    StepEvent::InsertLeft { parent: node_value, value: key },
                                    Snapshot::Tree(arena.display_slots()),
                                    format!("Inserting {key} as the left child of {node_value}"),
                                );
                                break;
                            }
                        }
                    } else {
                        trace.record(
                            StepEvent::TreeComparison {
                                key,
                                node: node_value,
                                direction: Direction::Right,
                            },
                            Snapshot::Tree(arena.display_slots()),
                            format!("{key} is at least {node_value}, going right"),
                        );
                        match arena.node(current).right {
                            Some(right) => current = right,
                            None => {
                                arena.attach_right(current, key);
                                trace.record(
                                    StepEvent::InsertRight { parent: node_value, value: key },
                                    Snapshot::Tree(arena.display_slots()),
                                    format!("Inserting {key} as the right child of {node_value}"),
                                );
                                break;
                            }
                        }
                    }
                }
            }
        }
        trace.record(
            StepEvent::AfterInsertion { inserted: key, node_count: arena.len() },
            Snapshot::Tree(arena.display_slots()),
            format!("Tree now holds {} nodes", arena.len()),
        );
    }

    trace.record(
        StepEvent::TreeFinal { node_count: arena.len() },
        Snapshot::Tree(arena.display_slots()),
        "All keys inserted",
    );
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_gets_an_after_insertion_step() {
        let trace = trace(&[5, 3, 8, 1, 4]);
        assert_eq!(trace.kind_count("after_insertion"), 5);
        assert_eq!(trace.kind_count("insert_root"), 1);
    }

    #[test]
    fn test_final_snapshot_is_the_level_order_tree() {
        let trace = trace(&[5, 3, 8, 1, 4]);
        let last = trace.last().unwrap();
        assert_eq!(last.kind(), "final");
        let slots = last.state.as_tree().unwrap();
        let values: Vec<Value> = slots.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![5, 3, 8, 1, 4]);
        assert_eq!(slots[0].left, Some(1));
        assert_eq!(slots[0].right, Some(2));
    }

    #[test]
    fn test_comparison_snapshot_precedes_the_attach() {
        let trace = trace(&[5, 3]);
        let steps = trace.steps();
        // Walk for key 3: comparison against 5 shows the pre-attach tree.
        assert_eq!(steps[2].kind(), "comparison");
        assert_eq!(steps[2].state.as_tree().map(<[_]>::len), Some(1));
        assert_eq!(steps[3].kind(), "insert_left");
        let after = steps[3].state.as_tree().unwrap();
        assert_eq!(after.len(), 2);
        assert_eq!(after[0].left, Some(1));
        assert_eq!(after[1].value, 3);
    }

    #[test]
    fn test_duplicate_keys_attach_right() {
        let trace = trace(&[5, 5]);
        assert_eq!(trace.kind_count("insert_right"), 1);
        assert_eq!(trace.kind_count("insert_left"), 0);
    }

    #[test]
    fn test_empty_keys_build_an_empty_tree() {
        let trace = trace(&[]);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().unwrap().kind(), "final");
    }
}
