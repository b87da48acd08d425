//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::EmployeeId;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown employee id: {0}")]
    EmployeeNotFound(EmployeeId),

    #[error("employee {0} is not part of the organization")]
    NoSupervisor(EmployeeId),

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

pub type DomainResult<T> = Result<T, DomainError>;
