//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::{Task, TaskDraft, TaskId};
use super::patch::TaskPatch;
use crate::{Error, Result};

/// Repository interface for task CRUD operations
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Get all tasks as a snapshot copy
    async fn get_all(&self) -> Result<Vec<Task>>;

    /// Get a task by ID, failing with `TaskNotFound` when absent
    async fn get_by_id(&self, id: TaskId) -> Result<Task>;

    /// Create a new task; the repository assigns the identifier
    async fn create(&self, draft: TaskDraft) -> Result<Task>;

    /// Merge a patch over an existing task and return the updated record
    async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<Task>;

    /// Delete a task by ID, failing with `TaskNotFound` when absent
    async fn delete(&self, id: TaskId) -> Result<()>;

    /// Apply one patch to every listed task, best-effort per record
    async fn bulk_update(&self, ids: &[TaskId], patch: TaskPatch) -> Result<BulkOutcome>;

    /// Delete every listed task, best-effort per record
    async fn bulk_delete(&self, ids: &[TaskId]) -> Result<BulkOutcome>;

    /// Mark every listed task completed, best-effort per record
    async fn bulk_complete(&self, ids: &[TaskId]) -> Result<BulkOutcome>;
}

/// Per-record failure inside a bulk operation
#[derive(Debug)]
pub struct BulkFailure {
    pub id: TaskId,
    pub error: Error,
}

/// Outcome of a bulk operation.
///
/// Record outcomes are independent: one failing record never aborts the
/// rest. Results are keyed by identifier, not by input position.
#[derive(Debug, Default)]
pub struct BulkOutcome {
    pub succeeded: Vec<TaskId>,
    pub failed: Vec<BulkFailure>,
}

impl BulkOutcome {
    /// Fold a single record's result into the outcome
    pub fn record<T>(&mut self, id: TaskId, result: Result<T>) {
        match result {
            Ok(_) => self.succeeded.push(id),
            Err(error) => self.failed.push(BulkFailure { id, error }),
        }
    }

    /// True when every record succeeded
    pub fn is_full_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Identifiers of the records that failed
    pub fn failed_ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.failed.iter().map(|f| f.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_outcome_record() {
        let mut outcome = BulkOutcome::default();
        outcome.record(1, Ok(()));
        outcome.record(2, Err::<(), _>(Error::TaskNotFound(2)));

        assert_eq!(outcome.succeeded, vec![1]);
        assert_eq!(outcome.failed_ids().collect::<Vec<_>>(), vec![2]);
        assert!(!outcome.is_full_success());
    }
}
