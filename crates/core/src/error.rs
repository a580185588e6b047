//! Error types for the core library

use thiserror::Error;

use crate::category::CategoryId;
use crate::task::TaskId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True when the error means the referenced record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskNotFound(_) | Self::CategoryNotFound(_))
    }
}
