//! Remote-backend category storage implementation

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::model::{Category, CategoryDraft, CategoryId, CategoryPatch};
use super::repository::CategoryRepository;
use crate::remote::{category_draft_body, category_patch_body, CategoryRecord, RecordsPage, RemoteClient};
use crate::{Error, Result};

const TABLE: &str = "tables/categories/records";

/// Category store backed by the remote service
pub struct RemoteCategoryStore {
    client: Arc<RemoteClient>,
}

impl RemoteCategoryStore {
    /// Create a store over a shared backend client
    pub fn new(client: Arc<RemoteClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryRepository for RemoteCategoryStore {
    async fn get_all(&self) -> Result<Vec<Category>> {
        let resp = self.client.get(TABLE).await?;
        let resp = RemoteClient::expect_success(resp, "Failed to list categories")?;
        let page: RecordsPage<CategoryRecord> = RemoteClient::read_json(resp).await?;
        Ok(page
            .records
            .into_iter()
            .map(CategoryRecord::into_category)
            .collect())
    }

    async fn get_by_id(&self, id: CategoryId) -> Result<Category> {
        let resp = self.client.get(&format!("{TABLE}/{id}")).await?;
        if RemoteClient::is_not_found(&resp) {
            return Err(Error::CategoryNotFound(id));
        }
        let resp = RemoteClient::expect_success(resp, "Failed to fetch category")?;
        let record: CategoryRecord = RemoteClient::read_json(resp).await?;
        Ok(record.into_category())
    }

    async fn create(&self, draft: CategoryDraft) -> Result<Category> {
        let resp = self
            .client
            .post(TABLE, &category_draft_body(&draft))
            .await?;
        let resp = RemoteClient::expect_success(resp, "Failed to create category")?;
        let record: CategoryRecord = RemoteClient::read_json(resp).await?;
        debug!(id = record.id, "created remote category");
        Ok(record.into_category())
    }

    async fn update(&self, id: CategoryId, patch: CategoryPatch) -> Result<Category> {
        let resp = self
            .client
            .patch(&format!("{TABLE}/{id}"), &category_patch_body(&patch))
            .await?;
        if RemoteClient::is_not_found(&resp) {
            return Err(Error::CategoryNotFound(id));
        }
        let resp = RemoteClient::expect_success(resp, "Failed to update category")?;
        let record: CategoryRecord = RemoteClient::read_json(resp).await?;
        Ok(record.into_category())
    }

    async fn delete(&self, id: CategoryId) -> Result<()> {
        let resp = self.client.delete(&format!("{TABLE}/{id}")).await?;
        if RemoteClient::is_not_found(&resp) {
            return Err(Error::CategoryNotFound(id));
        }
        RemoteClient::expect_success(resp, "Failed to delete category")?;
        Ok(())
    }
}
