use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::CategoryId;

use super::model::{Category, CategoryDraft};

/// Local record store for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    fn watch_all(&self) -> watch::Receiver<Vec<Category>>;
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn get_by_id(&self, id: CategoryId) -> Result<Category, RepositoryError>;
    async fn insert(&self, draft: &CategoryDraft) -> Result<Category, RepositoryError>;
    async fn delete(&self, id: CategoryId) -> Result<(), RepositoryError>;
    /// Renames the category and retags every product carrying its old name, as
    /// one unit. Returns how many products were retagged.
    async fn rename(&self, id: CategoryId, new_name: &str) -> Result<u64, RepositoryError>;
}
