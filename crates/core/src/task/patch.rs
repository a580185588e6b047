//! Partial-update payloads for tasks
//!
//! Updates are expressed as an explicit patch listing only the fields to
//! change, instead of a full record with absent-field conventions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::{Priority, Task};
use crate::{Error, Result};

/// Patch for an optional date field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatePatch {
    /// Set the field to the provided instant
    Set(DateTime<Utc>),
    /// Clear the field entirely
    Clear,
}

impl DatePatch {
    /// The value the patched field ends up with
    pub fn resolve(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Set(at) => Some(at),
            Self::Clear => None,
        }
    }
}

/// Partial update for a task; unset fields are left untouched.
///
/// The identifier is not patchable and therefore has no field here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub due_date: Option<DatePatch>,
    pub completed: Option<bool>,
    /// Explicit override of the completion timestamp; must agree with the
    /// resulting completion flag
    pub completed_at: Option<DatePatch>,
}

impl TaskPatch {
    /// Patch setting only the completion flag
    pub fn completion(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    /// Patch moving a task to another category
    pub fn recategorize(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set or clear the due date
    pub fn with_due_date(mut self, patch: DatePatch) -> Self {
        self.due_date = Some(patch);
        self
    }

    /// True when applying the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.category.is_none()
            && self.due_date.is_none()
            && self.completed.is_none()
            && self.completed_at.is_none()
    }

    /// Merge the patch over an existing record.
    ///
    /// Toggling `completed` derives `completed_at` (set to `now` on
    /// completion, cleared on reopen); an explicit `completed_at` patch then
    /// overrides the derived timestamp, but is rejected when it would leave
    /// the timestamp inconsistent with the completion flag.
    pub fn apply(&self, task: &mut Task, now: DateTime<Utc>) -> Result<()> {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(category) = &self.category {
            task.category = category.clone();
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date.resolve();
        }
        if let Some(completed) = self.completed {
            task.set_completed(completed, now);
        }
        if let Some(completed_at) = self.completed_at {
            let resolved = completed_at.resolve();
            if resolved.is_some() != task.completed {
                return Err(Error::Validation(
                    "completedAt must be present exactly when the task is completed".into(),
                ));
            }
            task.completed_at = resolved;
        }
        Ok(())
    }
}
