//! Organizational hierarchy manager.
//!
//! Models a company as a rooted tree of employees and supports reassigning
//! an employee to a new supervisor, with linear undo/redo over the sequence
//! of moves. The tree lives in a generational arena; an identifier index
//! gives O(1) employee lookup.

pub mod cli;
pub mod display;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use display::ChartRender;
pub use domain::{DomainError, Employee, EmployeeId, EmployeeRecord, MoveRecord, OrgChart};
