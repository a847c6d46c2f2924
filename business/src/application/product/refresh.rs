use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::refresh::RefreshProductsUseCase;
use crate::domain::sync::errors::SyncError;
use crate::domain::sync::mapper::remote_to_products;
use crate::domain::sync::services::RemoteCatalogService;

/// Pulls the whole remote catalog and mirrors it locally. No merge: whatever was
/// stored before is discarded.
pub struct RefreshProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub remote: Arc<dyn RemoteCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RefreshProductsUseCase for RefreshProductsUseCaseImpl {
    async fn execute(&self) -> Result<Option<usize>, ProductError> {
        self.logger.info("Refreshing products from remote catalog");

        let remote_products = match self.remote.fetch_all().await {
            Ok(rows) => rows,
            Err(SyncError::Disabled) => {
                self.logger.debug("Remote sync disabled, keeping local products");
                return Ok(None);
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Remote read failed, keeping local products: {}", e));
                return Ok(None);
            }
        };

        let products = remote_to_products(remote_products);
        self.repository.replace_all(&products).await?;

        self.logger
            .info(&format!("Mirrored {} products from remote", products.len()));
        Ok(Some(products.len()))
    }
}
