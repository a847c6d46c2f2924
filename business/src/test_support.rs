use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use tokio::sync::watch;

use crate::domain::category::model::{Category, CategoryDraft};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{Product, ProductDraft};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::ImageRef;
use crate::domain::shared::value_objects::{CategoryId, ProductId};
use crate::domain::sync::errors::SyncError;
use crate::domain::sync::model::{RemoteProduct, SyncAck};
use crate::domain::sync::services::{ImageEncoderService, RemoteCatalogService};

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        fn watch_all(&self) -> watch::Receiver<Vec<Product>>;
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
        async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
        async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
        async fn replace_all(&self, products: &[Product]) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        fn watch_all(&self) -> watch::Receiver<Vec<Category>>;
        async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
        async fn get_by_id(&self, id: CategoryId) -> Result<Category, RepositoryError>;
        async fn insert(&self, draft: &CategoryDraft) -> Result<Category, RepositoryError>;
        async fn delete(&self, id: CategoryId) -> Result<(), RepositoryError>;
        async fn rename(&self, id: CategoryId, new_name: &str) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub Remote {}

    #[async_trait]
    impl RemoteCatalogService for Remote {
        async fn fetch_all(&self) -> Result<Vec<RemoteProduct>, SyncError>;
        async fn push_insert(&self, product: &Product, image_base64: &str) -> Result<SyncAck, SyncError>;
        async fn push_update(&self, product: &Product, image_base64: &str) -> Result<SyncAck, SyncError>;
        async fn push_delete(&self, id: ProductId) -> Result<SyncAck, SyncError>;
        async fn push_category_rename(&self, old_name: &str, new_name: &str) -> Result<SyncAck, SyncError>;
    }
}

mock! {
    pub Encoder {}

    #[async_trait]
    impl ImageEncoderService for Encoder {
        async fn encode(&self, image: &ImageRef) -> String;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Encoder that must never be consulted.
pub fn unused_encoder() -> Arc<dyn ImageEncoderService> {
    let mut encoder = MockEncoder::new();
    encoder.expect_encode().never();
    Arc::new(encoder)
}

pub fn ack() -> Result<SyncAck, SyncError> {
    Ok(SyncAck {
        message: "ok".to_string(),
    })
}

pub fn make_product(id: i64, name: &str, category: &str, stock: u32) -> Product {
    Product::from_repository(
        ProductId::new(id),
        name.to_string(),
        category.to_string(),
        stock,
        10000.0,
        None,
    )
}
