use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::watch;

use business::domain::category::model::Category;
use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;

use crate::category::entity::CategoryEntity;
use crate::db::storage_error;
use crate::product::entity::ProductEntity;

const SELECT_PRODUCTS: &str =
    "SELECT id, name, category, stock, price, image FROM products ORDER BY name ASC, id ASC";
const SELECT_CATEGORIES: &str = "SELECT id, name FROM categories ORDER BY id ASC";

/// Latest product and category lists, republished after each committed write.
///
/// Each publish re-reads the table, so writes must run one at a time for the
/// last published snapshot to match the store.
pub struct LiveQueries {
    products: watch::Sender<Vec<Product>>,
    categories: watch::Sender<Vec<Category>>,
}

impl LiveQueries {
    /// Seeds both lists from the current contents of the store.
    pub async fn load(pool: &SqlitePool) -> Result<Arc<Self>, RepositoryError> {
        let products = fetch_products(pool).await?;
        let categories = fetch_categories(pool).await?;
        tracing::debug!(
            "Live queries seeded with {} products and {} categories",
            products.len(),
            categories.len()
        );

        Ok(Arc::new(Self {
            products: watch::Sender::new(products),
            categories: watch::Sender::new(categories),
        }))
    }

    pub fn products(&self) -> watch::Receiver<Vec<Product>> {
        self.products.subscribe()
    }

    pub fn categories(&self) -> watch::Receiver<Vec<Category>> {
        self.categories.subscribe()
    }

    /// A failed reload keeps the previous value; the write itself already committed.
    pub async fn publish_products(&self, pool: &SqlitePool) {
        match fetch_products(pool).await {
            Ok(products) => {
                self.products.send_replace(products);
            }
            Err(e) => tracing::warn!("Product list not republished: {}", e),
        }
    }

    pub async fn publish_categories(&self, pool: &SqlitePool) {
        match fetch_categories(pool).await {
            Ok(categories) => {
                self.categories.send_replace(categories);
            }
            Err(e) => tracing::warn!("Category list not republished: {}", e),
        }
    }
}

pub(crate) async fn fetch_products(pool: &SqlitePool) -> Result<Vec<Product>, RepositoryError> {
    let entities = sqlx::query_as::<_, ProductEntity>(SELECT_PRODUCTS)
        .fetch_all(pool)
        .await
        .map_err(storage_error)?;

    Ok(entities.into_iter().map(|e| e.into_domain()).collect())
}

pub(crate) async fn fetch_categories(
    pool: &SqlitePool,
) -> Result<Vec<Category>, RepositoryError> {
    let entities = sqlx::query_as::<_, CategoryEntity>(SELECT_CATEGORIES)
        .fetch_all(pool)
        .await
        .map_err(storage_error)?;

    Ok(entities.into_iter().map(|e| e.into_domain()).collect())
}
