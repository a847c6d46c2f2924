use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ImageRef;

pub struct CreateProductParams {
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub price: f64,
    pub image: Option<ImageRef>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
