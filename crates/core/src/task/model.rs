//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task identifier, assigned by the owning repository on creation
pub type TaskId = i64;

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Priority {
    /// Sort weight: high outranks medium outranks low
    pub fn weight(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Parse a user- or wire-facing priority string
    ///
    /// Unknown values yield `None`; callers decide the fallback.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Wire representation of the priority
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Display color token for a priority, "gray" when none is known
pub fn priority_color(priority: Option<Priority>) -> &'static str {
    match priority {
        Some(Priority::High) => "red",
        Some(Priority::Medium) => "yellow",
        Some(Priority::Low) => "green",
        None => "gray",
    }
}

/// Display label for a priority, "None" when none is known
pub fn priority_text(priority: Option<Priority>) -> &'static str {
    match priority {
        Some(Priority::High) => "High",
        Some(Priority::Medium) => "Medium",
        Some(Priority::Low) => "Low",
        None => "None",
    }
}

/// A task in the task list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Always present; tasks created without a description carry an empty string
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    /// Name of the owning category; a dangling reference to a deleted
    /// category is tolerated
    pub category: String,
    pub due_date: Option<DateTime<Utc>>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Materialize a task from a creation payload
    pub fn from_draft(id: TaskId, draft: TaskDraft, now: DateTime<Utc>) -> Self {
        let mut task = Self {
            id,
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            category: draft.category,
            due_date: draft.due_date,
            completed: false,
            created_at: now,
            completed_at: None,
        };
        if draft.completed {
            task.set_completed(true, draft.completed_at.unwrap_or(now));
        }
        task
    }

    /// Set the completion flag, keeping `completed_at` consistent with it:
    /// `completed_at` is `Some` exactly when the task is completed.
    pub fn set_completed(&mut self, completed: bool, at: DateTime<Utc>) {
        self.completed = completed;
        self.completed_at = completed.then_some(at);
    }
}

/// Creation payload for a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    pub category: String,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Rarely used: import paths may create a task already completed
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl TaskDraft {
    /// Create a draft with the required fields
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            category: category.into(),
            due_date: None,
            completed: false,
            completed_at: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}
