use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::watch;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::ProductId;

use super::entity::ProductEntity;
use crate::db::storage_error;
use crate::live::{LiveQueries, fetch_products};

pub struct ProductRepositorySqlite {
    pool: SqlitePool,
    live: Arc<LiveQueries>,
}

impl ProductRepositorySqlite {
    pub fn new(pool: SqlitePool, live: Arc<LiveQueries>) -> Self {
        Self { pool, live }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositorySqlite {
    fn watch_all(&self) -> watch::Receiver<Vec<Product>> {
        self.live.products()
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        fetch_products(&self.pool).await
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, category, stock, price, image FROM products WHERE id = ?",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO products (name, category, stock, price, image) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(i64::from(draft.stock))
        .bind(draft.price)
        .bind(draft.image.as_ref().map(|i| i.as_str()))
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        self.live.publish_products(&self.pool).await;

        let id = ProductId::new(result.last_insert_rowid());
        Ok(draft.clone().into_product(id))
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE products SET name = ?, category = ?, stock = ?, price = ?, image = ? WHERE id = ?",
        )
        .bind(&product.name)
        .bind(&product.category)
        .bind(i64::from(product.stock))
        .bind(product.price)
        .bind(product.image.as_ref().map(|i| i.as_str()))
        .bind(product.id.value())
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found());
        }

        self.live.publish_products(&self.pool).await;
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found());
        }

        self.live.publish_products(&self.pool).await;
        Ok(())
    }

    async fn replace_all(&self, products: &[Product]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        sqlx::query("DELETE FROM products")
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?;

        for product in products {
            sqlx::query(
                "INSERT INTO products (id, name, category, stock, price, image) VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(product.id.value())
            .bind(&product.name)
            .bind(&product.category)
            .bind(i64::from(product.stock))
            .bind(product.price)
            .bind(product.image.as_ref().map(|i| i.as_str()))
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?;
        }

        tx.commit().await.map_err(storage_error)?;
        tracing::debug!("Replaced local products with {} rows", products.len());

        self.live.publish_products(&self.pool).await;
        Ok(())
    }
}
