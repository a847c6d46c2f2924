use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::shared::value_objects::CategoryId;

pub struct DeleteCategoryParams {
    pub id: CategoryId,
}

#[async_trait]
pub trait DeleteCategoryUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError>;
}
