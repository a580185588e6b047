//! Category view-state controller

use std::collections::HashMap;
use std::sync::Arc;

use taskflow_core::category::{
    Category, CategoryDraft, CategoryId, CategoryPatch, CategoryRepository,
};
use taskflow_core::task::Task;

use crate::Result;

/// Controller over the category collection
pub struct CategoryController {
    repo: Arc<dyn CategoryRepository>,
    categories: Vec<Category>,
}

impl CategoryController {
    /// Create a controller over the given repository; call [`load`] before
    /// rendering.
    ///
    /// [`load`]: Self::load
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self {
            repo,
            categories: Vec::new(),
        }
    }

    /// The current local snapshot
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Replace the snapshot with the repository's current collection
    pub async fn load(&mut self) -> Result<()> {
        self.categories = self.repo.get_all().await?;
        Ok(())
    }

    /// Create a category and append it to the snapshot
    pub async fn create(&mut self, draft: CategoryDraft) -> Result<Category> {
        let category = self.repo.create(draft).await?;
        self.categories.push(category.clone());
        Ok(category)
    }

    /// Patch a category and replace it in the snapshot
    pub async fn update(&mut self, id: CategoryId, patch: CategoryPatch) -> Result<Category> {
        let updated = self.repo.update(id, patch).await?;
        if let Some(slot) = self.categories.iter_mut().find(|c| c.id == updated.id) {
            *slot = updated.clone();
        } else {
            self.categories.push(updated.clone());
        }
        Ok(updated)
    }

    /// Delete a category and drop it from the snapshot.
    ///
    /// Tasks referencing the category are left alone; they simply render
    /// with a dangling name until edited.
    pub async fn delete(&mut self, id: CategoryId) -> Result<()> {
        self.repo.delete(id).await?;
        self.categories.retain(|c| c.id != id);
        Ok(())
    }

    /// Open-task count per category, derived from the given task collection
    pub fn counts(&self, tasks: &[Task]) -> HashMap<CategoryId, usize> {
        self.categories
            .iter()
            .map(|c| (c.id, c.task_count(tasks)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use taskflow_core::category::InMemoryCategoryStore;
    use taskflow_core::task::TaskDraft;

    async fn controller() -> CategoryController {
        let store = Arc::new(InMemoryCategoryStore::new());
        let mut controller = CategoryController::new(store as Arc<dyn CategoryRepository>);
        controller.load().await.unwrap();
        controller
    }

    #[tokio::test]
    async fn test_create_update_delete_reconcile() {
        let mut controller = controller().await;

        let errands = controller
            .create(CategoryDraft::new("Errands", "green"))
            .await
            .unwrap();
        assert_eq!(controller.categories().len(), 1);

        controller
            .update(
                errands.id,
                CategoryPatch {
                    color: Some("blue".into()),
                    ..CategoryPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(controller.categories()[0].color, "blue");

        controller.delete(errands.id).await.unwrap();
        assert!(controller.categories().is_empty());
    }

    #[tokio::test]
    async fn test_counts_skip_completed() {
        let mut controller = controller().await;
        let errands = controller
            .create(CategoryDraft::new("Errands", "green"))
            .await
            .unwrap();

        let now = Utc::now();
        let open = Task::from_draft(1, TaskDraft::new("open", "Errands"), now);
        let mut done = Task::from_draft(2, TaskDraft::new("done", "Errands"), now);
        done.set_completed(true, now);
        let other = Task::from_draft(3, TaskDraft::new("other", "Work"), now);

        let counts = controller.counts(&[open, done, other]);
        assert_eq!(counts.get(&errands.id), Some(&1));
    }
}
