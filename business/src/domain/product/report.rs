use std::collections::BTreeMap;

use serde::Serialize;

use super::model::Product;

/// Products below this stock count are flagged unless configured otherwise.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// Aggregates shown on the report screen, rebuilt from scratch on every change.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryReport {
    pub total_asset: f64,
    pub asset_by_category: BTreeMap<String, f64>,
    pub low_stock: Vec<Product>,
}

impl InventoryReport {
    pub fn from_products(products: &[Product], threshold: u32) -> Self {
        Self {
            total_asset: total_asset(products),
            asset_by_category: asset_by_category(products),
            low_stock: low_stock(products, threshold),
        }
    }
}

pub fn total_asset(products: &[Product]) -> f64 {
    products.iter().map(Product::asset_value).sum()
}

pub fn asset_by_category(products: &[Product]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for product in products {
        *totals.entry(product.category.clone()).or_insert(0.0) += product.asset_value();
    }
    totals
}

/// Products whose stock is strictly below `threshold`, in list order.
pub fn low_stock(products: &[Product], threshold: u32) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.stock < threshold)
        .cloned()
        .collect()
}

/// Case-insensitive name match combined with an optional exact category match.
/// An empty query matches every name.
pub fn search(products: &[Product], query: &str, category: Option<&str>) -> Vec<Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .filter(|p| category.is_none_or(|c| p.category == c))
        .cloned()
        .collect()
}
