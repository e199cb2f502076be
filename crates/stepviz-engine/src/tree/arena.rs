//! Index-addressed BST arena with level-order display slots.

use std::collections::VecDeque;

use stepviz_core::{TreeSlot, Value};

/// One arena node. Children are arena indices, never raw links; a child
/// belongs to exactly one parent.
#[derive(Debug, Clone)]
pub struct BstNode {
    pub value: Value,
    pub left: Option<usize>,
    pub right: Option<usize>,
    /// Level-order display position: root 0, then breadth-first
    /// left-to-right. Reassigned after every insertion.
    pub display_index: usize,
}

/// A binary search tree held in a flat node arena.
#[derive(Debug, Clone, Default)]
pub struct BstArena {
    nodes: Vec<BstNode>,
    root: Option<usize>,
}

impl BstArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> Option<usize> {
        self.root
    }

    pub fn node(&self, index: usize) -> &BstNode {
        &self.nodes[index]
    }

    /// Create the root node. Reindexes before returning.
    pub fn insert_root(&mut self, value: Value) -> usize {
        let index = self.push_node(value);
        self.root = Some(index);
        self.reindex();
        index
    }

    /// Attach a new leaf as the left child of `parent`. Reindexes.
    pub fn attach_left(&mut self, parent: usize, value: Value) -> usize {
        let index = self.push_node(value);
        self.nodes[parent].left = Some(index);
        self.reindex();
        index
    }

    /// Attach a new leaf as the right child of `parent`. Reindexes.
    pub fn attach_right(&mut self, parent: usize, value: Value) -> usize {
        let index = self.push_node(value);
        self.nodes[parent].right = Some(index);
        self.reindex();
        index
    }

    /// Standard BST insertion without tracing: left when the key is
    /// smaller than the node, right otherwise (ties go right).
    pub fn insert(&mut self, value: Value) {
        let Some(root) = self.root else {
            self.insert_root(value);
            return;
        };
        let mut current = root;
        loop {
            if value < self.nodes[current].value {
                match self.nodes[current].left {
                    Some(left) => current = left,
                    None => {
                        self.attach_left(current, value);
                        return;
                    }
                }
            } else {
                match self.nodes[current].right {
                    Some(right) => current = right,
                    None => {
                        self.attach_right(current, value);
                        return;
                    }
                }
            }
        }
    }

    /// Breadth-first display renumbering from the root. Positions are
    /// compact (0 to n-1), so a skewed chain never inflates them.
    fn reindex(&mut self) {
        let Some(root) = self.root else {
            return;
        };
        let mut queue = VecDeque::new();
        queue.push_back(root);
        let mut position = 0usize;
        while let Some(index) = queue.pop_front() {
            self.nodes[index].display_index = position;
            position += 1;
            if let Some(left) = self.nodes[index].left {
                queue.push_back(left);
            }
            if let Some(right) = self.nodes[index].right {
                queue.push_back(right);
            }
        }
    }

    /// Flatten to level-order display slots, one per node; each slot
    /// links its children by display position.
    pub fn display_slots(&self) -> Vec<TreeSlot> {
        let mut slots = vec![TreeSlot::default(); self.nodes.len()];
        for node in &self.nodes {
            slots[node.display_index] = TreeSlot {
                value: node.value,
                left: node.left.map(|i| self.nodes[i].display_index),
                right: node.right.map(|i| self.nodes[i].display_index),
            };
        }
        slots
    }

    fn push_node(&mut self, value: Value) -> usize {
        self.nodes.push(BstNode {
            value,
            left: None,
            right: None,
            display_index: 0,
        });
        self.nodes.len() - 1
    }
}
