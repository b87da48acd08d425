use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::Employee;

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct OrgNode {
    /// Employee payload for this node
    pub employee: Employee,
    /// Index of the supervisor node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of direct reports, in insertion order
    pub children: Vec<Index>,
}

/// Arena-based tree structure for the organization hierarchy.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Nodes are never removed once inserted; moves only relink parent/child
/// edges.
#[derive(Debug)]
pub struct OrgArena {
    /// Arena storage for all tree nodes
    arena: Arena<OrgNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for OrgArena {
    fn default() -> Self {
        Self::new()
    }
}

impl OrgArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, employee: Employee, parent: Option<Index>) -> Index {
        let node = OrgNode {
            employee,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    /// Detach a node from its current parent and attach it under a new one.
    ///
    /// The child-list entry is matched by index identity; the node ends up as
    /// the last child of the new parent. Relinking a node under its current
    /// parent re-appends it, so it stays present exactly once.
    #[instrument(level = "trace", skip(self))]
    pub fn relink(&mut self, node_idx: Index, new_parent_idx: Index) {
        let old_parent = self.arena.get(node_idx).and_then(|n| n.parent);
        if let Some(old_idx) = old_parent {
            if let Some(old_parent) = self.arena.get_mut(old_idx) {
                old_parent.children.retain(|&child| child != node_idx);
            }
        }
        if let Some(new_parent) = self.arena.get_mut(new_parent_idx) {
            new_parent.children.push(node_idx);
        }
        if let Some(node) = self.arena.get_mut(node_idx) {
            node.parent = Some(new_parent_idx);
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&OrgNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut OrgNode> {
        self.arena.get_mut(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> OrgIterator {
        OrgIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Collects all leaf nodes (employees with no direct reports).
    ///
    /// Empty trees return an empty vector.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<Index> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaves(root, &mut leaves);
        }
        leaves
    }

    fn collect_leaves(&self, node_idx: Index, leaves: &mut Vec<Index>) {
        if let Some(node) = self.get_node(node_idx) {
            if node.children.is_empty() {
                leaves.push(node_idx);
            } else {
                for &child in &node.children {
                    self.collect_leaves(child, leaves);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}

pub struct OrgIterator<'a> {
    arena: &'a OrgArena,
    stack: Vec<Index>,
}

impl<'a> OrgIterator<'a> {
    fn new(arena: &'a OrgArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for OrgIterator<'a> {
    type Item = (Index, &'a OrgNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
