//! Task view-state controller
//!
//! Owns the task snapshot a UI renders from, plus the bulk-selection
//! workflow. Every mutation goes through the injected repository first;
//! local state is reconciled only from what the repository confirmed, so a
//! failed call leaves the snapshot untouched.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use taskflow_core::task::{
    Task, TaskDraft, TaskId, TaskPatch, TaskRepository,
};

use crate::selection::{BulkReport, Confirmation, Selection};
use crate::Result;

/// Controller over the task collection and its selection
pub struct TaskController {
    repo: Arc<dyn TaskRepository>,
    tasks: Vec<Task>,
    selection: Selection,
}

impl TaskController {
    /// Create a controller over the given repository; call [`load`] before
    /// rendering.
    ///
    /// [`load`]: Self::load
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self {
            repo,
            tasks: Vec::new(),
            selection: Selection::new(),
        }
    }

    /// The current local snapshot
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the snapshot with the repository's current collection
    pub async fn load(&mut self) -> Result<()> {
        self.tasks = self.repo.get_all().await?;
        Ok(())
    }

    /// Create a task and append it to the snapshot
    pub async fn create(&mut self, draft: TaskDraft) -> Result<Task> {
        let task = self.repo.create(draft).await?;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Patch a task and replace it in the snapshot
    pub async fn update(&mut self, id: TaskId, patch: TaskPatch) -> Result<Task> {
        let updated = self.repo.update(id, patch).await?;
        self.replace(updated.clone());
        Ok(updated)
    }

    /// Delete a task and drop it from the snapshot
    pub async fn delete(&mut self, id: TaskId) -> Result<()> {
        self.repo.delete(id).await?;
        self.tasks.retain(|t| t.id != id);
        self.selection.settle_removed(id);
        Ok(())
    }

    /// Flip a task's completion state
    pub async fn toggle_completion(&mut self, id: TaskId) -> Result<Task> {
        let completed = match self.tasks.iter().find(|t| t.id == id) {
            Some(task) => task.completed,
            None => self.repo.get_by_id(id).await?.completed,
        };

        let updated = self
            .repo
            .update(id, TaskPatch::completion(!completed))
            .await?;
        self.replace(updated.clone());
        Ok(updated)
    }

    fn replace(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        } else {
            self.tasks.push(task);
        }
    }

    // --- selection ---

    /// Toggle a task's membership in the selection
    pub fn toggle_selected(&mut self, id: TaskId) -> Result<()> {
        self.selection.toggle(id)
    }

    /// Select every task currently in the snapshot
    pub fn select_all(&mut self) -> Result<()> {
        let ids: Vec<TaskId> = self.tasks.iter().map(|t| t.id).collect();
        self.selection.select_all(ids)
    }

    /// Dismiss the selection
    pub fn clear_selection(&mut self) -> Result<()> {
        self.selection.clear()
    }

    // --- bulk workflow ---

    /// Mark every selected task completed.
    ///
    /// Succeeded records are reconciled locally; after a partial failure the
    /// failed ids stay selected and the report carries the counts for the
    /// host's notification.
    pub async fn bulk_complete(&mut self) -> Result<BulkReport> {
        let ids = self.selection.begin()?;
        let outcome = match self.repo.bulk_complete(&ids).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.selection.release();
                return Err(e.into());
            }
        };

        let succeeded: BTreeSet<TaskId> = outcome.succeeded.iter().copied().collect();
        let now = Utc::now();
        for task in self.tasks.iter_mut().filter(|t| succeeded.contains(&t.id)) {
            task.set_completed(true, now);
        }

        self.selection.settle(&outcome);
        Ok(self.report(&outcome))
    }

    /// Delete every selected task. Destructive; the host must have taken the
    /// user through a yes/no gate to mint the [`Confirmation`].
    pub async fn bulk_delete(&mut self, _confirmed: Confirmation) -> Result<BulkReport> {
        let ids = self.selection.begin()?;
        let outcome = match self.repo.bulk_delete(&ids).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.selection.release();
                return Err(e.into());
            }
        };

        let succeeded: BTreeSet<TaskId> = outcome.succeeded.iter().copied().collect();
        self.tasks.retain(|t| !succeeded.contains(&t.id));

        self.selection.settle(&outcome);
        Ok(self.report(&outcome))
    }

    /// Move every selected task to another category, reconciling the
    /// snapshot in place rather than refetching the world.
    pub async fn bulk_recategorize(&mut self, category: impl Into<String>) -> Result<BulkReport> {
        let category = category.into();
        let ids = self.selection.begin()?;
        let outcome = match self
            .repo
            .bulk_update(&ids, TaskPatch::recategorize(category.clone()))
            .await
        {
            Ok(outcome) => outcome,
            Err(e) => {
                self.selection.release();
                return Err(e.into());
            }
        };

        let succeeded: BTreeSet<TaskId> = outcome.succeeded.iter().copied().collect();
        for task in self.tasks.iter_mut().filter(|t| succeeded.contains(&t.id)) {
            task.category = category.clone();
        }

        self.selection.settle(&outcome);
        Ok(self.report(&outcome))
    }

    fn report(&self, outcome: &taskflow_core::task::BulkOutcome) -> BulkReport {
        let report = BulkReport::from(outcome);
        if report.failed > 0 {
            warn!(
                succeeded = report.succeeded,
                failed = report.failed,
                "bulk operation partially failed"
            );
        }
        report
    }
}
