//! Backend selection and repository wiring
//!
//! The backend is chosen once, at construction time; consumers receive
//! trait-object handles and never branch on the variant themselves.

use std::sync::Arc;
use tracing::info;

use crate::category::{Category, CategoryRepository, InMemoryCategoryStore, RemoteCategoryStore};
use crate::remote::{RemoteClient, RemoteConfig};
use crate::task::{InMemoryTaskStore, RemoteTaskStore, Task, TaskRepository};

/// Which backend to build the repositories on
#[derive(Debug, Clone)]
pub enum BackendConfig {
    /// In-memory stores, optionally pre-populated with fixture data
    Memory {
        seed_tasks: Vec<Task>,
        seed_categories: Vec<Category>,
    },
    /// Remote-service-backed stores sharing one HTTP client
    Remote(RemoteConfig),
}

impl BackendConfig {
    /// Empty in-memory backend
    pub fn memory() -> Self {
        Self::Memory {
            seed_tasks: Vec::new(),
            seed_categories: Vec::new(),
        }
    }
}

/// The repository handles an application wires its consumers with
#[derive(Clone)]
pub struct Repositories {
    pub tasks: Arc<dyn TaskRepository>,
    pub categories: Arc<dyn CategoryRepository>,
}

impl Repositories {
    /// Build both repositories for the configured backend
    pub fn connect(config: BackendConfig) -> Self {
        match config {
            BackendConfig::Memory {
                seed_tasks,
                seed_categories,
            } => {
                info!(
                    tasks = seed_tasks.len(),
                    categories = seed_categories.len(),
                    "using in-memory backend"
                );
                Self {
                    tasks: Arc::new(InMemoryTaskStore::with_seed(seed_tasks)),
                    categories: Arc::new(InMemoryCategoryStore::with_seed(seed_categories)),
                }
            }
            BackendConfig::Remote(config) => {
                info!(base_url = %config.base_url, "using remote backend");
                let client = Arc::new(RemoteClient::new(config));
                Self {
                    tasks: Arc::new(RemoteTaskStore::new(Arc::clone(&client))),
                    categories: Arc::new(RemoteCategoryStore::new(client)),
                }
            }
        }
    }
}
