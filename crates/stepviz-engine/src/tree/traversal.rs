//! BST traversal tracer: in-order, pre-order, post-order.

use stepviz_core::{Snapshot, StepEvent, Trace, Value};

use super::BstArena;

/// The three walk orders, in the fixed sequence the tracer runs them.
#[derive(Debug, Clone, Copy)]
enum Order {
    In,
    Pre,
    Post,
}

impl Order {
    fn name(self) -> &'static str {
        match self {
            Order::In => "in-order",
            Order::Pre => "pre-order",
            Order::Post => "post-order",
        }
    }

    fn start(self) -> StepEvent {
        match self {
            Order::In => StepEvent::InorderStart,
            Order::Pre => StepEvent::PreorderStart,
            Order::Post => StepEvent::PostorderStart,
        }
    }

    fn visit(self, value: Value) -> StepEvent {
        match self {
            Order::In => StepEvent::InorderVisit { value },
            Order::Pre => StepEvent::PreorderVisit { value },
            Order::Post => StepEvent::PostorderVisit { value },
        }
    }

    fn left(self, from: Value) -> StepEvent {
        match self {
            Order::In => StepEvent::InorderLeft { from },
            Order::Pre => StepEvent::PreorderLeft { from },
            Order::Post => StepEvent::PostorderLeft { from },
        }
    }

    fn right(self, from: Value) -> StepEvent {
        match self {
            Order::In => StepEvent::InorderRight { from },
            Order::Pre => StepEvent::PreorderRight { from },
            Order::Post => StepEvent::PostorderRight { from },
        }
    }

    fn complete(self, order: Vec<Value>) -> StepEvent {
        match self {
            Order::In => StepEvent::InorderComplete { order },
            Order::Pre => StepEvent::PreorderComplete { order },
            Order::Post => StepEvent::PostorderComplete { order },
        }
    }
}

/// Trace all three traversals of the BST built from `keys`.
///
/// The build itself is silent (same insertion policy as the insertion
/// tracer, no steps); the walks run in-order, pre-order, then
/// post-order, and the `final` step carries all three visit orders.
pub fn trace(keys: &[Value]) -> Trace {
    let mut arena = BstArena::new();
    for &key in keys {
        arena.insert(key);
    }

    let mut trace = Trace::new();
    trace.record(
        StepEvent::Initial,
        Snapshot::Tree(arena.display_slots()),
        "Tree built from the input keys",
    );

    let inorder = walk(&arena, Order::In, &mut trace);
    let preorder = walk(&arena, Order::Pre, &mut trace);
    let postorder = walk(&arena, Order::Post, &mut trace);

    trace.record(
        StepEvent::TraversalFinal {
            inorder_result: inorder,
            preorder_result: preorder,
            postorder_result: postorder,
        },
        Snapshot::Tree(arena.display_slots()),
        "Completed all three traversals",
    );
    trace
}

fn walk(arena: &BstArena, order: Order, trace: &mut Trace) -> Vec<Value> {
    trace.record(
        order.start(),
        Snapshot::Tree(arena.display_slots()),
        format!("Starting {} traversal", order.name()),
    );

    let mut visited = Vec::new();
    if let Some(root) = arena.root() {
        walk_node(arena, root, order, &mut visited, trace);
    }

    trace.record(
        order.complete(visited.clone()),
        Snapshot::Tree(arena.display_slots()),
        format!("Completed {} traversal", order.name()),
    );
    visited
}

fn walk_node(
    arena: &BstArena,
    index: usize,
    order: Order,
    visited: &mut Vec<Value>,
    trace: &mut Trace,
) {
    let node = arena.node(index);
    let (value, left, right) = (node.value, node.left, node.right);
    let snapshot = || Snapshot::Tree(arena.display_slots());

    let visit = |visited: &mut Vec<Value>, trace: &mut Trace| {
        visited.push(value);
        trace.record(
            order.visit(value),
            snapshot(),
            format!("Visiting node {value}"),
        );
    };

    let descend_left = |visited: &mut Vec<Value>, trace: &mut Trace| {
        if let Some(left) = left {
            trace.record(
                order.left(value),
                snapshot(),
                format!("Descending into the left subtree of {value}"),
            );
            walk_node(arena, left, order, visited, trace);
        }
    };

    let descend_right = |visited: &mut Vec<Value>, trace: &mut Trace| {
        if let Some(right) = right {
            trace.record(
                order.right(value),
                snapshot(),
                format!("Descending into the right subtree of {value}"),
            );
            walk_node(arena, right, order, visited, trace);
        }
    };

    match order {
        Order::Pre => {
            visit(visited, trace);
            descend_left(visited, trace);
            descend_right(visited, trace);
        }
        Order::In => {
            descend_left(visited, trace);
            visit(visited, trace);
            descend_right(visited, trace);
        }
        Order::Post => {
            descend_left(visited, trace);
            descend_right(visited, trace);
            visit(visited, trace);
        }
    }
}
