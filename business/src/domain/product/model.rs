use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use super::value_objects::ImageRef;
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Denormalized category name. Not checked against the category list.
    pub category: String,
    pub stock: u32,
    pub price: f64,
    pub image: Option<ImageRef>,
}

/// A product that passed validation but has no identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub price: f64,
    pub image: Option<ImageRef>,
}

pub struct NewProductProps {
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub price: f64,
    pub image: Option<ImageRef>,
}

impl ProductDraft {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        Ok(Self {
            name: props.name,
            category: props.category,
            stock: props.stock,
            price: props.price,
            image: props.image,
        })
    }

    /// Attaches the identifier handed out by the store.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            stock: self.stock,
            price: self.price,
            image: self.image,
        }
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        category: String,
        stock: u32,
        price: f64,
        image: Option<ImageRef>,
    ) -> Self {
        Self {
            id,
            name,
            category,
            stock,
            price,
            image,
        }
    }

    pub fn asset_value(&self) -> f64 {
        self.price * f64::from(self.stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str) -> NewProductProps {
        NewProductProps {
            name: name.to_string(),
            category: "Snacks".to_string(),
            stock: 4,
            price: 2500.0,
            image: None,
        }
    }

    #[test]
    fn should_create_draft_when_name_valid() {
        let draft = ProductDraft::new(props("Keripik Singkong")).unwrap();

        assert_eq!(draft.name, "Keripik Singkong");
        assert_eq!(draft.stock, 4);
    }

    #[test]
    fn should_reject_draft_when_name_only_whitespace() {
        let result = ProductDraft::new(props("   "));

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[test]
    fn should_keep_every_field_when_identifier_attached() {
        let draft = ProductDraft::new(NewProductProps {
            image: ImageRef::parse("https://img.example.com/a.png"),
            ..props("Teh Botol")
        })
        .unwrap();

        let product = draft.clone().into_product(ProductId::new(9));

        assert_eq!(product.id, ProductId::new(9));
        assert_eq!(product.name, draft.name);
        assert_eq!(product.category, draft.category);
        assert_eq!(product.image, draft.image);
    }

    #[test]
    fn should_compute_asset_value_from_price_and_stock() {
        let product = Product::from_repository(
            ProductId::new(1),
            "Gula".to_string(),
            "Sembako".to_string(),
            3,
            12000.0,
            None,
        );

        assert_eq!(product.asset_value(), 36000.0);
    }
}
