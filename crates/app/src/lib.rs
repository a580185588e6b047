//! View-state layer for TaskFlow
//!
//! Sits between `taskflow-core` and a host UI: controllers own a reconciled
//! local snapshot of the repository data and expose the action surface the
//! view layer calls, including the selection/bulk workflow.

pub mod categories;
pub mod error;
pub mod selection;
pub mod tasks;

pub use categories::CategoryController;
pub use error::WorkflowError;
pub use selection::{BulkReport, Confirmation, Selection, SelectionState};
pub use tasks::TaskController;

pub type Result<T> = std::result::Result<T, WorkflowError>;
