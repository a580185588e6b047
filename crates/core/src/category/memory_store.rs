//! In-memory category storage implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::model::{Category, CategoryDraft, CategoryId, CategoryPatch};
use super::repository::CategoryRepository;
use crate::{Error, Result};

/// In-memory category store
pub struct InMemoryCategoryStore {
    inner: RwLock<Inner>,
}

struct Inner {
    categories: BTreeMap<CategoryId, Category>,
    next_id: CategoryId,
}

impl InMemoryCategoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    /// Create a store pre-populated with fixture categories
    pub fn with_seed(seed: Vec<Category>) -> Self {
        let next_id = seed.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let categories = seed.into_iter().map(|c| (c.id, c)).collect();
        Self {
            inner: RwLock::new(Inner {
                categories,
                next_id,
            }),
        }
    }
}

impl Default for InMemoryCategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryStore {
    async fn get_all(&self) -> Result<Vec<Category>> {
        let inner = self.inner.read().await;
        Ok(inner.categories.values().cloned().collect())
    }

    async fn get_by_id(&self, id: CategoryId) -> Result<Category> {
        let inner = self.inner.read().await;
        inner
            .categories
            .get(&id)
            .cloned()
            .ok_or(Error::CategoryNotFound(id))
    }

    async fn create(&self, draft: CategoryDraft) -> Result<Category> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let category = Category {
            id,
            name: draft.name,
            color: draft.color,
        };
        inner.categories.insert(id, category.clone());
        debug!(id, name = %category.name, "created category");
        Ok(category)
    }

    async fn update(&self, id: CategoryId, patch: CategoryPatch) -> Result<Category> {
        let mut inner = self.inner.write().await;
        let category = inner
            .categories
            .get_mut(&id)
            .ok_or(Error::CategoryNotFound(id))?;
        patch.apply(category);
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner
            .categories
            .remove(&id)
            .map(|_| ())
            .ok_or(Error::CategoryNotFound(id))
    }
}
