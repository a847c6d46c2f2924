use std::sync::Arc;

use async_trait::async_trait;

use crate::application::remote::{encode_image, log_push_outcome};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product, ProductDraft};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::sync::services::{ImageEncoderService, RemoteCatalogService};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub remote: Arc<dyn RemoteCatalogService>,
    pub image_encoder: Arc<dyn ImageEncoderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let draft = ProductDraft::new(NewProductProps {
            name: params.name,
            category: params.category,
            stock: params.stock,
            price: params.price,
            image: params.image,
        })?;

        // Local write first; the remote push below cannot undo it.
        let product = self.repository.insert(&draft).await?;
        self.logger
            .info(&format!("Product created with id: {}", product.id));

        let image = encode_image(self.image_encoder.as_ref(), product.image.as_ref()).await;
        let outcome = self.remote.push_insert(&product, &image).await;
        log_push_outcome(self.logger.as_ref(), "insert", outcome);

        Ok(product)
    }
}
