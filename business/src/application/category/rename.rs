use std::sync::Arc;

use async_trait::async_trait;

use crate::application::remote::log_push_outcome;
use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::rename::{RenameCategoryParams, RenameCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::sync::services::RemoteCatalogService;

pub struct RenameCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub remote: Arc<dyn RemoteCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RenameCategoryUseCase for RenameCategoryUseCaseImpl {
    async fn execute(&self, params: RenameCategoryParams) -> Result<Category, CategoryError> {
        self.logger.info(&format!(
            "Renaming category {} to {}",
            params.id, params.new_name
        ));

        if params.new_name.trim().is_empty() {
            return Err(CategoryError::NameEmpty);
        }

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CategoryError::NotFound,
                other => CategoryError::Repository(other),
            })?;

        if existing.name == params.new_name {
            self.logger
                .debug(&format!("Category {} already named {}", existing.id, existing.name));
            return Ok(existing);
        }

        let retagged = self
            .repository
            .rename(existing.id, &params.new_name)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CategoryError::NotFound,
                other => CategoryError::Repository(other),
            })?;
        self.logger.info(&format!(
            "Category {} renamed, {} products retagged",
            existing.id, retagged
        ));

        let outcome = self
            .remote
            .push_category_rename(&existing.name, &params.new_name)
            .await;
        log_push_outcome(self.logger.as_ref(), "update_category_batch", outcome);

        Ok(Category::from_repository(existing.id, params.new_name))
    }
}
