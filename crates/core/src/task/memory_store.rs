//! In-memory task storage implementation
//!
//! Backs development and tests; the map lives behind a `RwLock` so the
//! mutate-then-return sequence stays atomic on a concurrent runtime.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::model::{Task, TaskDraft, TaskId};
use super::patch::TaskPatch;
use super::repository::{BulkOutcome, TaskRepository};
use crate::{Error, Result};

/// In-memory task store
pub struct InMemoryTaskStore {
    inner: RwLock<Inner>,
}

struct Inner {
    tasks: BTreeMap<TaskId, Task>,
    /// Next identifier to issue; monotonic within the session, so deleted
    /// identifiers are never reused
    next_id: TaskId,
}

impl InMemoryTaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    /// Create a store pre-populated with fixture tasks
    pub fn with_seed(seed: Vec<Task>) -> Self {
        let next_id = seed.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let tasks = seed.into_iter().map(|t| (t.id, t)).collect();
        Self {
            inner: RwLock::new(Inner { tasks, next_id }),
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn get_all(&self) -> Result<Vec<Task>> {
        let inner = self.inner.read().await;
        Ok(inner.tasks.values().cloned().collect())
    }

    async fn get_by_id(&self, id: TaskId) -> Result<Task> {
        let inner = self.inner.read().await;
        inner.tasks.get(&id).cloned().ok_or(Error::TaskNotFound(id))
    }

    async fn create(&self, draft: TaskDraft) -> Result<Task> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let task = Task::from_draft(id, draft, Utc::now());
        inner.tasks.insert(id, task.clone());
        debug!(id, title = %task.title, "created task");
        Ok(task)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<Task> {
        let mut inner = self.inner.write().await;
        let task = inner.tasks.get_mut(&id).ok_or(Error::TaskNotFound(id))?;
        patch.apply(task, Utc::now())?;
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(Error::TaskNotFound(id))
    }

    async fn bulk_update(&self, ids: &[TaskId], patch: TaskPatch) -> Result<BulkOutcome> {
        let mut outcome = BulkOutcome::default();
        for &id in ids {
            outcome.record(id, self.update(id, patch.clone()).await);
        }
        debug!(
            succeeded = outcome.succeeded.len(),
            failed = outcome.failed.len(),
            "bulk update settled"
        );
        Ok(outcome)
    }

    async fn bulk_delete(&self, ids: &[TaskId]) -> Result<BulkOutcome> {
        let mut outcome = BulkOutcome::default();
        for &id in ids {
            outcome.record(id, self.delete(id).await);
        }
        debug!(
            succeeded = outcome.succeeded.len(),
            failed = outcome.failed.len(),
            "bulk delete settled"
        );
        Ok(outcome)
    }

    async fn bulk_complete(&self, ids: &[TaskId]) -> Result<BulkOutcome> {
        self.bulk_update(ids, TaskPatch::completion(true)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let store = InMemoryTaskStore::new();

        let first = store.create(TaskDraft::new("Buy milk", "Errands")).await.unwrap();
        let second = store.create(TaskDraft::new("Walk dog", "Errands")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(!first.completed);
        assert!(first.completed_at.is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_round_trip() {
        let store = InMemoryTaskStore::new();
        let draft = TaskDraft::new("Buy milk", "Errands").with_priority(Priority::Low);
        let created = store.create(draft).await.unwrap();

        let fetched = store.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.title, "Buy milk");
        assert_eq!(fetched.category, "Errands");
        assert_eq!(fetched.priority, Priority::Low);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let store = InMemoryTaskStore::new();
        let result = store.get_by_id(42).await;
        assert!(matches!(result, Err(Error::TaskNotFound(42))));
    }

    #[tokio::test]
    async fn test_update_missing_leaves_store_unchanged() {
        let store = InMemoryTaskStore::new();
        store.create(TaskDraft::new("Buy milk", "Errands")).await.unwrap();

        let result = store.update(99, TaskPatch::completion(true)).await;
        assert!(matches!(result, Err(Error::TaskNotFound(99))));

        let tasks = store.get_all().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].completed);
    }

    #[tokio::test]
    async fn test_update_merges_patch() {
        let store = InMemoryTaskStore::new();
        let created = store.create(TaskDraft::new("Buy milk", "Errands")).await.unwrap();

        let patch = TaskPatch::default()
            .with_title("Buy oat milk")
            .with_priority(Priority::High);
        let updated = store.update(created.id, patch).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Buy oat milk");
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.category, "Errands");
    }

    #[tokio::test]
    async fn test_delete_does_not_reuse_ids() {
        let store = InMemoryTaskStore::new();
        let first = store.create(TaskDraft::new("a", "c")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.create(TaskDraft::new("b", "c")).await.unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[tokio::test]
    async fn test_get_all_returns_snapshot() {
        let store = InMemoryTaskStore::new();
        store.create(TaskDraft::new("a", "c")).await.unwrap();

        let mut snapshot = store.get_all().await.unwrap();
        snapshot[0].title = "mutated".to_string();
        snapshot.clear();

        let tasks = store.get_all().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "a");
    }

    #[tokio::test]
    async fn test_bulk_delete_partial_failure() {
        let store = InMemoryTaskStore::new();
        let task = store.create(TaskDraft::new("a", "c")).await.unwrap();

        let outcome = store.bulk_delete(&[task.id, 99]).await.unwrap();
        assert_eq!(outcome.succeeded, vec![task.id]);
        assert_eq!(outcome.failed_ids().collect::<Vec<_>>(), vec![99]);

        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bulk_complete() {
        let store = InMemoryTaskStore::new();
        let a = store.create(TaskDraft::new("a", "c")).await.unwrap();
        let b = store.create(TaskDraft::new("b", "c")).await.unwrap();

        let outcome = store.bulk_complete(&[a.id, b.id]).await.unwrap();
        assert!(outcome.is_full_success());

        for task in store.get_all().await.unwrap() {
            assert!(task.completed);
            assert!(task.completed_at.is_some());
        }
    }

    #[tokio::test]
    async fn test_with_seed_advances_id_watermark() {
        let now = Utc::now();
        let seed = vec![Task::from_draft(7, TaskDraft::new("seeded", "c"), now)];
        let store = InMemoryTaskStore::with_seed(seed);

        let created = store.create(TaskDraft::new("fresh", "c")).await.unwrap();
        assert_eq!(created.id, 8);
    }
}
