//! Wire-format record types for the remote backend
//!
//! These types are decoded leniently: the backend's tables are not under
//! this crate's control, so unknown priorities and absent optional fields
//! fall back to defaults instead of failing the whole decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::category::{Category, CategoryDraft, CategoryId, CategoryPatch};
use crate::task::{DatePatch, Priority, Task, TaskDraft, TaskId, TaskPatch};

/// Listing envelope returned by the record endpoints
#[derive(Debug, Deserialize)]
pub struct RecordsPage<T> {
    pub records: Vec<T>,
}

/// Per-record outcome inside a bulk response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordOutcome {
    pub id: TaskId,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// A task row as the backend serializes it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl TaskRecord {
    /// Convert into the domain model, normalizing lenient fields.
    ///
    /// `set_completed` re-derives the completion timestamp so a row with an
    /// inconsistent completed/completedAt pair cannot leak the inconsistency
    /// into the domain.
    pub fn into_task(self) -> Task {
        let priority = self
            .priority
            .as_deref()
            .and_then(Priority::parse)
            .unwrap_or_default();
        let mut task = Task {
            id: self.id,
            title: self.title,
            description: self.description.unwrap_or_default(),
            priority,
            category: self.category,
            due_date: self.due_date,
            completed: false,
            created_at: self.created_at,
            completed_at: None,
        };
        if self.completed {
            task.set_completed(true, self.completed_at.unwrap_or(self.created_at));
        }
        task
    }
}

/// A category row as the backend serializes it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub color: String,
}

impl CategoryRecord {
    /// Convert into the domain model
    pub fn into_category(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            color: self.color,
        }
    }
}

/// Creation body for a task record; the backend assigns the identifier
pub(crate) fn task_draft_body(draft: &TaskDraft) -> Value {
    json!({
        "title": draft.title,
        "description": draft.description,
        "priority": draft.priority.as_str(),
        "category": draft.category,
        "dueDate": draft.due_date,
        "completed": draft.completed,
        "completedAt": draft.completed_at,
    })
}

/// Update body carrying only the fields the patch names.
///
/// A `Clear` patch serializes as an explicit null so the backend can tell
/// "clear this field" apart from "leave it alone".
pub(crate) fn task_patch_body(patch: &TaskPatch) -> Value {
    let mut fields = Map::new();
    if let Some(title) = &patch.title {
        fields.insert("title".into(), json!(title));
    }
    if let Some(description) = &patch.description {
        fields.insert("description".into(), json!(description));
    }
    if let Some(priority) = patch.priority {
        fields.insert("priority".into(), json!(priority.as_str()));
    }
    if let Some(category) = &patch.category {
        fields.insert("category".into(), json!(category));
    }
    if let Some(due_date) = patch.due_date {
        fields.insert("dueDate".into(), date_patch_value(due_date));
    }
    if let Some(completed) = patch.completed {
        fields.insert("completed".into(), json!(completed));
    }
    if let Some(completed_at) = patch.completed_at {
        fields.insert("completedAt".into(), date_patch_value(completed_at));
    }
    Value::Object(fields)
}

fn date_patch_value(patch: DatePatch) -> Value {
    match patch {
        DatePatch::Set(at) => json!(at),
        DatePatch::Clear => Value::Null,
    }
}

/// Creation body for a category record
pub(crate) fn category_draft_body(draft: &CategoryDraft) -> Value {
    json!({
        "name": draft.name,
        "color": draft.color,
    })
}

/// Update body for a category record
pub(crate) fn category_patch_body(patch: &CategoryPatch) -> Value {
    let mut fields = Map::new();
    if let Some(name) = &patch.name {
        fields.insert("name".into(), json!(name));
    }
    if let Some(color) = &patch.color {
        fields.insert("color".into(), json!(color));
    }
    Value::Object(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_record_lenient_decode() {
        let record: TaskRecord = serde_json::from_value(json!({
            "id": 3,
            "title": "Buy milk",
            "priority": "urgent",
            "createdAt": "2026-08-01T10:00:00Z",
        }))
        .unwrap();

        let task = record.into_task();
        assert_eq!(task.id, 3);
        assert_eq!(task.description, "");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.category, "");
        assert!(!task.completed);
    }

    #[test]
    fn test_task_record_normalizes_completion() {
        let record: TaskRecord = serde_json::from_value(json!({
            "id": 1,
            "title": "t",
            "category": "c",
            "completed": true,
            "createdAt": "2026-08-01T10:00:00Z",
        }))
        .unwrap();

        let task = record.into_task();
        assert!(task.completed);
        // Missing completedAt falls back to createdAt rather than violating
        // the completed/completedAt pairing.
        assert_eq!(task.completed_at, Some(task.created_at));
    }

    #[test]
    fn test_task_patch_body_only_named_fields() {
        let patch = TaskPatch::recategorize("Work").with_due_date(DatePatch::Clear);
        let body = task_patch_body(&patch);

        assert_eq!(body["category"], json!("Work"));
        assert!(body["dueDate"].is_null());
        assert!(body.get("title").is_none());
        assert!(body.get("completed").is_none());
    }
}
