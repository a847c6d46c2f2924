use std::sync::Arc;

use async_trait::async_trait;

use crate::application::remote::{encode_image, log_push_outcome};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::sync::services::{ImageEncoderService, RemoteCatalogService};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub remote: Arc<dyn RemoteCatalogService>,
    pub image_encoder: Arc<dyn ImageEncoderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        if params.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        // Verify product exists
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let updated_product = Product::from_repository(
            existing.id,
            params.name,
            params.category,
            params.stock,
            params.price,
            params.image,
        );

        self.repository.update(&updated_product).await?;

        let image =
            encode_image(self.image_encoder.as_ref(), updated_product.image.as_ref()).await;
        let outcome = self.remote.push_update(&updated_product, &image).await;
        log_push_outcome(self.logger.as_ref(), "update", outcome);

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}
