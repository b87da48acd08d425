//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod arena;
pub(crate) mod builder;
pub mod chart;
pub mod entities;
pub mod error;
pub mod history;

pub use arena::{OrgArena, OrgNode};
pub use chart::OrgChart;
pub use entities::{Employee, EmployeeId, EmployeeRecord, MoveRecord};
pub use error::{DomainError, DomainResult};
pub use history::MoveLog;
