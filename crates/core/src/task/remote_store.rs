//! Remote-backend task storage implementation
//!
//! Talks to the backend's task table through [`RemoteClient`]. Identifier
//! issuance is authoritative on the backend side; this store trusts the
//! records it gets back.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::model::{Task, TaskDraft, TaskId};
use super::patch::TaskPatch;
use super::repository::{BulkOutcome, TaskRepository};
use crate::remote::{task_draft_body, task_patch_body, RecordOutcome, RecordsPage, RemoteClient, TaskRecord};
use crate::{Error, Result};

const TABLE: &str = "tables/tasks/records";

/// Task store backed by the remote service
pub struct RemoteTaskStore {
    client: Arc<RemoteClient>,
}

impl RemoteTaskStore {
    /// Create a store over a shared backend client
    pub fn new(client: Arc<RemoteClient>) -> Self {
        Self { client }
    }

    /// Fold a bulk response into an outcome, matched by identifier.
    ///
    /// The backend does not guarantee response order, and a record the
    /// backend never reported on counts as failed.
    fn collect_outcomes(ids: &[TaskId], results: Vec<RecordOutcome>) -> BulkOutcome {
        let mut by_id: HashMap<TaskId, RecordOutcome> =
            results.into_iter().map(|r| (r.id, r)).collect();

        let mut outcome = BulkOutcome::default();
        for &id in ids {
            match by_id.remove(&id) {
                Some(r) if r.success => outcome.record(id, Ok(())),
                Some(r) => outcome.record::<()>(
                    id,
                    Err(Error::Backend(
                        r.error.unwrap_or_else(|| "record operation failed".into()),
                    )),
                ),
                None => outcome.record::<()>(
                    id,
                    Err(Error::Backend("no outcome reported for record".into())),
                ),
            }
        }
        outcome
    }
}

#[async_trait]
impl TaskRepository for RemoteTaskStore {
    async fn get_all(&self) -> Result<Vec<Task>> {
        let resp = self.client.get(TABLE).await?;
        let resp = RemoteClient::expect_success(resp, "Failed to list tasks")?;
        let page: RecordsPage<TaskRecord> = RemoteClient::read_json(resp).await?;
        Ok(page.records.into_iter().map(TaskRecord::into_task).collect())
    }

    async fn get_by_id(&self, id: TaskId) -> Result<Task> {
        let resp = self.client.get(&format!("{TABLE}/{id}")).await?;
        if RemoteClient::is_not_found(&resp) {
            return Err(Error::TaskNotFound(id));
        }
        let resp = RemoteClient::expect_success(resp, "Failed to fetch task")?;
        let record: TaskRecord = RemoteClient::read_json(resp).await?;
        Ok(record.into_task())
    }

    async fn create(&self, draft: TaskDraft) -> Result<Task> {
        let resp = self.client.post(TABLE, &task_draft_body(&draft)).await?;
        let resp = RemoteClient::expect_success(resp, "Failed to create task")?;
        let record: TaskRecord = RemoteClient::read_json(resp).await?;
        debug!(id = record.id, "created remote task");
        Ok(record.into_task())
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<Task> {
        let resp = self
            .client
            .patch(&format!("{TABLE}/{id}"), &task_patch_body(&patch))
            .await?;
        if RemoteClient::is_not_found(&resp) {
            return Err(Error::TaskNotFound(id));
        }
        let resp = RemoteClient::expect_success(resp, "Failed to update task")?;
        let record: TaskRecord = RemoteClient::read_json(resp).await?;
        Ok(record.into_task())
    }

    async fn delete(&self, id: TaskId) -> Result<()> {
        let resp = self.client.delete(&format!("{TABLE}/{id}")).await?;
        if RemoteClient::is_not_found(&resp) {
            return Err(Error::TaskNotFound(id));
        }
        RemoteClient::expect_success(resp, "Failed to delete task")?;
        Ok(())
    }

    async fn bulk_update(&self, ids: &[TaskId], patch: TaskPatch) -> Result<BulkOutcome> {
        let body = json!({
            "recordIds": ids,
            "fields": task_patch_body(&patch),
        });
        let resp = self.client.post(&format!("{TABLE}/bulk-update"), &body).await?;
        let resp = RemoteClient::expect_success(resp, "Failed to bulk-update tasks")?;
        let results: Vec<RecordOutcome> = RemoteClient::read_json(resp).await?;

        let outcome = Self::collect_outcomes(ids, results);
        debug!(
            succeeded = outcome.succeeded.len(),
            failed = outcome.failed.len(),
            "remote bulk update settled"
        );
        Ok(outcome)
    }

    async fn bulk_delete(&self, ids: &[TaskId]) -> Result<BulkOutcome> {
        let body = json!({ "recordIds": ids });
        let resp = self.client.post(&format!("{TABLE}/bulk-delete"), &body).await?;
        let resp = RemoteClient::expect_success(resp, "Failed to bulk-delete tasks")?;
        let results: Vec<RecordOutcome> = RemoteClient::read_json(resp).await?;

        let outcome = Self::collect_outcomes(ids, results);
        debug!(
            succeeded = outcome.succeeded.len(),
            failed = outcome.failed.len(),
            "remote bulk delete settled"
        );
        Ok(outcome)
    }

    async fn bulk_complete(&self, ids: &[TaskId]) -> Result<BulkOutcome> {
        // The backend derives completedAt when the flag flips, same as the
        // in-memory patch application.
        self.bulk_update(ids, TaskPatch::completion(true)).await
    }
}
