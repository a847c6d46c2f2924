use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ImageRef;
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub stock: i64,
    pub price: f64,
    pub image: Option<String>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.name,
            self.category,
            u32::try_from(self.stock).unwrap_or(0),
            self.price,
            self.image.as_deref().and_then(ImageRef::parse),
        )
    }
}
