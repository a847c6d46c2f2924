use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::shared::value_objects::CategoryId;

pub struct RenameCategoryParams {
    pub id: CategoryId,
    pub new_name: String,
}

#[async_trait]
pub trait RenameCategoryUseCase: Send + Sync {
    async fn execute(&self, params: RenameCategoryParams) -> Result<Category, CategoryError>;
}
