//! Category repository trait

use async_trait::async_trait;

use super::model::{Category, CategoryDraft, CategoryId, CategoryPatch};
use crate::Result;

/// Repository interface for category CRUD operations.
///
/// Categories live independently of tasks: deleting a category leaves the
/// tasks that reference it untouched.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Get all categories as a snapshot copy
    async fn get_all(&self) -> Result<Vec<Category>>;

    /// Get a category by ID, failing with `CategoryNotFound` when absent
    async fn get_by_id(&self, id: CategoryId) -> Result<Category>;

    /// Create a new category; the repository assigns the identifier
    async fn create(&self, draft: CategoryDraft) -> Result<Category>;

    /// Merge a patch over an existing category and return the updated record
    async fn update(&self, id: CategoryId, patch: CategoryPatch) -> Result<Category>;

    /// Delete a category by ID, failing with `CategoryNotFound` when absent
    async fn delete(&self, id: CategoryId) -> Result<()>;
}
