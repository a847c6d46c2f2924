use async_trait::async_trait;

use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ImageRef;
use crate::domain::shared::value_objects::ProductId;

use super::errors::SyncError;
use super::model::{RemoteProduct, SyncAck};

/// Service port for the spreadsheet-backed remote catalog.
///
/// Each call is a single request/response exchange. Implementations turn a
/// non-success status into [`SyncError::Rejected`].
#[async_trait]
pub trait RemoteCatalogService: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<RemoteProduct>, SyncError>;

    async fn push_insert(
        &self,
        product: &Product,
        image_base64: &str,
    ) -> Result<SyncAck, SyncError>;

    async fn push_update(
        &self,
        product: &Product,
        image_base64: &str,
    ) -> Result<SyncAck, SyncError>;

    async fn push_delete(&self, id: ProductId) -> Result<SyncAck, SyncError>;

    async fn push_category_rename(
        &self,
        old_name: &str,
        new_name: &str,
    ) -> Result<SyncAck, SyncError>;
}

/// Service port producing the base64 text uploaded alongside a product.
///
/// Returns an empty string for anything it cannot or should not encode.
#[async_trait]
pub trait ImageEncoderService: Send + Sync {
    async fn encode(&self, image: &ImageRef) -> String;
}
