//! Domain entities: employees, nested records, move records

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable employee key. Unique within a chart, immutable after construction.
pub type EmployeeId = u32;

/// Employee payload stored at each tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    /// Display name, never used for logic
    pub name: String,
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Nested employee description as supplied by callers and org chart files.
///
/// Subordinate order becomes child insertion order in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subordinates: Vec<EmployeeRecord>,
}

impl EmployeeRecord {
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            subordinates: Vec::new(),
        }
    }

    pub fn with_subordinates(mut self, subordinates: Vec<EmployeeRecord>) -> Self {
        self.subordinates = subordinates;
        self
    }
}

/// One supervisor reassignment, with enough context to replay or invert it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub employee: EmployeeId,
    pub supervisor: EmployeeId,
    pub old_supervisor: EmployeeId,
}
