use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ImageRef;
use crate::domain::shared::value_objects::ProductId;

pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub price: f64,
    pub image: Option<ImageRef>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
