//! Organization tree manager: supervisor moves with undo/redo.

use std::collections::HashMap;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::OrgArena;
use crate::domain::builder::ChartBuilder;
use crate::domain::entities::{Employee, EmployeeId, EmployeeRecord, MoveRecord};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::history::MoveLog;

/// Manages one organization hierarchy: an arena-backed employee tree, an
/// identifier index for O(1) lookup, and a linear undo/redo history of
/// supervisor moves.
///
/// Employees are never added or removed after construction; every operation
/// only relinks parent/child edges. All operations are synchronous and either
/// fully apply or fail before mutating any state. A multi-threaded host must
/// wrap the whole chart in a single mutex.
pub struct OrgChart {
    tree: OrgArena,
    index: HashMap<EmployeeId, Index>,
    history: MoveLog,
}

impl OrgChart {
    /// Build a chart from a fully-populated nested record.
    ///
    /// Duplicate ids are not rejected; the node visited later in the
    /// traversal shadows the earlier one in the index.
    pub fn new(root: EmployeeRecord) -> Self {
        let (tree, index) = ChartBuilder::new().build(root);
        Self {
            tree,
            index,
            history: MoveLog::new(),
        }
    }

    /// Read access to the underlying tree, for rendering and traversal.
    /// Returned references are live views into the chart.
    pub fn tree(&self) -> &OrgArena {
        &self.tree
    }

    pub fn root(&self) -> Option<&Employee> {
        self.tree
            .root()
            .and_then(|idx| self.tree.get_node(idx))
            .map(|node| &node.employee)
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.index
            .get(&id)
            .and_then(|&idx| self.tree.get_node(idx))
            .map(|node| &node.employee)
    }

    /// Current supervisor of the given employee.
    ///
    /// The root has no supervisor and yields `NoSupervisor`, as does a node
    /// that has been structurally detached from the chart.
    pub fn supervisor(&self, id: EmployeeId) -> DomainResult<&Employee> {
        let idx = self.lookup(id)?;
        let parent_idx = self
            .tree
            .get_node(idx)
            .and_then(|node| node.parent)
            .ok_or(DomainError::NoSupervisor(id))?;
        self.tree
            .get_node(parent_idx)
            .map(|node| &node.employee)
            .ok_or(DomainError::NoSupervisor(id))
    }

    /// Direct reports of the given employee, in insertion order.
    pub fn subordinates(&self, id: EmployeeId) -> DomainResult<Vec<&Employee>> {
        let idx = self.lookup(id)?;
        let node = self
            .tree
            .get_node(idx)
            .ok_or(DomainError::EmployeeNotFound(id))?;
        Ok(node
            .children
            .iter()
            .filter_map(|&child| self.tree.get_node(child))
            .map(|child| &child.employee)
            .collect())
    }

    /// Reassign an employee to a new supervisor and record the move.
    ///
    /// Validation happens before any mutation: both ids must be in the index,
    /// and the employee must currently have a supervisor (the root can never
    /// be moved). No ancestry check is performed; moving an employee beneath
    /// one of its own subordinates detaches that subtree from the chart.
    ///
    /// A self-move (new supervisor == current supervisor) is a structural
    /// no-op, leaving the employee exactly once in the child list, but is
    /// still recorded in history.
    ///
    /// Recording while undone entries exist discards the redo tail.
    #[instrument(level = "debug", skip(self))]
    pub fn move_employee(
        &mut self,
        employee: EmployeeId,
        supervisor: EmployeeId,
    ) -> DomainResult<()> {
        let employee_idx = self.lookup(employee)?;
        let supervisor_idx = self.lookup(supervisor)?;
        let old_idx = self
            .tree
            .get_node(employee_idx)
            .and_then(|node| node.parent)
            .ok_or(DomainError::NoSupervisor(employee))?;
        let old_supervisor = self
            .tree
            .get_node(old_idx)
            .map(|node| node.employee.id)
            .ok_or(DomainError::NoSupervisor(employee))?;

        self.tree.relink(employee_idx, supervisor_idx);
        self.history.record(MoveRecord {
            employee,
            supervisor,
            old_supervisor,
        });
        debug!("moved {} under {} (was {})", employee, supervisor, old_supervisor);
        Ok(())
    }

    /// Reverse the most recently applied, not-yet-undone move.
    ///
    /// Only the cursor moves on the history side; the record stays in the
    /// log and remains available for redo. Fails with `NothingToUndo` before
    /// touching any state when the cursor is at the start.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) -> DomainResult<()> {
        let record = self
            .history
            .step_back()
            .ok_or(DomainError::NothingToUndo)?;
        self.reapply(record.employee, record.old_supervisor);
        debug!("undid move of {} back under {}", record.employee, record.old_supervisor);
        Ok(())
    }

    /// Reapply the next move forward of the cursor.
    ///
    /// Fails with `NothingToRedo` before touching any state when the cursor
    /// already points at the last record.
    #[instrument(level = "debug", skip(self))]
    pub fn redo(&mut self) -> DomainResult<()> {
        let record = self
            .history
            .step_forward()
            .ok_or(DomainError::NothingToRedo)?;
        self.reapply(record.employee, record.supervisor);
        debug!("redid move of {} under {}", record.employee, record.supervisor);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of moves recorded, including undone ones still in the log.
    pub fn moves_recorded(&self) -> usize {
        self.history.len()
    }

    /// Number of employees in the chart.
    pub fn headcount(&self) -> usize {
        self.tree.len()
    }

    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    /// Preorder iteration over all employees, root first.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> + '_ {
        self.tree.iter().map(|(_, node)| &node.employee)
    }

    /// Snapshot of the current tree as a nested record.
    pub fn to_record(&self) -> Option<EmployeeRecord> {
        self.tree.root().and_then(|idx| self.record_at(idx))
    }

    fn record_at(&self, idx: Index) -> Option<EmployeeRecord> {
        let node = self.tree.get_node(idx)?;
        let subordinates = node
            .children
            .iter()
            .filter_map(|&child| self.record_at(child))
            .collect();
        Some(EmployeeRecord {
            id: node.employee.id,
            name: node.employee.name.clone(),
            subordinates,
        })
    }

    fn lookup(&self, id: EmployeeId) -> DomainResult<Index> {
        self.index
            .get(&id)
            .copied()
            .ok_or(DomainError::EmployeeNotFound(id))
    }

    /// Relink by id without touching the history log. Ids taken from the log
    /// always resolve: nodes are never removed from the index.
    fn reapply(&mut self, employee: EmployeeId, supervisor: EmployeeId) {
        if let (Some(&employee_idx), Some(&supervisor_idx)) =
            (self.index.get(&employee), self.index.get(&supervisor))
        {
            self.tree.relink(employee_idx, supervisor_idx);
        }
    }
}
