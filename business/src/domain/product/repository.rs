use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::{Product, ProductDraft};

/// Local record store for products.
///
/// Every committed write republishes the full list on the receiver handed out by
/// [`ProductRepository::watch_all`], ordered by name ascending.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    fn watch_all(&self) -> watch::Receiver<Vec<Product>>;
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
    /// Drops every stored product and stores `products` in their place.
    async fn replace_all(&self, products: &[Product]) -> Result<(), RepositoryError>;
}
