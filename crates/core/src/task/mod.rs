//! Task module
//!
//! This module contains task-related types and logic.

mod memory_store;
mod model;
mod patch;
mod remote_store;
mod repository;

pub use memory_store::InMemoryTaskStore;
pub use model::*;
pub use patch::{DatePatch, TaskPatch};
pub use remote_store::RemoteTaskStore;
pub use repository::{BulkFailure, BulkOutcome, TaskRepository};
