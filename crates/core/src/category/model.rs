//! Category model definitions

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Category identifier, assigned by the owning repository on creation
pub type CategoryId = i64;

/// A user-defined grouping label for tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Unique display name; tasks reference categories by this name
    pub name: String,
    /// Style token, e.g. "indigo"
    pub color: String,
}

impl Category {
    /// Number of open tasks in this category.
    ///
    /// The count is derived from the task collection on demand, never
    /// stored: completed tasks and tasks of other categories don't count.
    pub fn task_count(&self, tasks: &[Task]) -> usize {
        tasks
            .iter()
            .filter(|t| !t.completed && t.category == self.name)
            .count()
    }
}

/// Creation payload for a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub color: String,
}

impl CategoryDraft {
    /// Create a draft with the required fields
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Partial update for a category; unset fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl CategoryPatch {
    /// Merge the patch over an existing record
    pub fn apply(&self, category: &mut Category) {
        if let Some(name) = &self.name {
            category.name = name.clone();
        }
        if let Some(color) = &self.color {
            category.color = color.clone();
        }
    }
}
