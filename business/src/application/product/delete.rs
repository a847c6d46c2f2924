use std::sync::Arc;

use async_trait::async_trait;

use crate::application::remote::log_push_outcome;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::sync::services::RemoteCatalogService;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub remote: Arc<dyn RemoteCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let outcome = self.remote.push_delete(params.id).await;
        log_push_outcome(self.logger.as_ref(), "delete", outcome);

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
