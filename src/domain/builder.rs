//! Builds the arena-backed tree and identifier index from a nested record.

use std::collections::HashMap;

use generational_arena::Index;
use tracing::debug;

use crate::domain::arena::OrgArena;
use crate::domain::entities::{Employee, EmployeeId, EmployeeRecord};

/// Constructs the tree and its identifier index in one traversal.
pub(crate) struct ChartBuilder {
    tree: OrgArena,
    index: HashMap<EmployeeId, Index>,
}

impl ChartBuilder {
    pub(crate) fn new() -> Self {
        Self {
            tree: OrgArena::new(),
            index: HashMap::new(),
        }
    }

    /// Consume a nested record, inserting every node into the arena and
    /// every id into the index.
    ///
    /// Duplicate ids are not rejected: a node visited later in the traversal
    /// silently overwrites the earlier index entry.
    pub(crate) fn build(mut self, root: EmployeeRecord) -> (OrgArena, HashMap<EmployeeId, Index>) {
        let mut stack = vec![(root, None)];

        while let Some((record, parent_idx)) = stack.pop() {
            let EmployeeRecord {
                id,
                name,
                subordinates,
            } = record;
            let node_idx = self.tree.insert_node(Employee { id, name }, parent_idx);
            self.index.insert(id, node_idx);

            // Reversed so subordinates end up in their original order
            for child in subordinates.into_iter().rev() {
                stack.push((child, Some(node_idx)));
            }
        }

        debug!("built chart with {} employees", self.index.len());
        (self.tree, self.index)
    }
}
