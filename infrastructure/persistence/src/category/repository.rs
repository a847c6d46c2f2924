use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::watch;

use business::domain::category::model::{Category, CategoryDraft};
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::CategoryId;

use super::entity::CategoryEntity;
use crate::db::storage_error;
use crate::live::{LiveQueries, fetch_categories};

pub struct CategoryRepositorySqlite {
    pool: SqlitePool,
    live: Arc<LiveQueries>,
}

impl CategoryRepositorySqlite {
    pub fn new(pool: SqlitePool, live: Arc<LiveQueries>) -> Self {
        Self { pool, live }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositorySqlite {
    fn watch_all(&self) -> watch::Receiver<Vec<Category>> {
        self.live.categories()
    }

    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError> {
        fetch_categories(&self.pool).await
    }

    async fn get_by_id(&self, id: CategoryId) -> Result<Category, RepositoryError> {
        let entity =
            sqlx::query_as::<_, CategoryEntity>("SELECT id, name FROM categories WHERE id = ?")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(storage_error)?
                .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, draft: &CategoryDraft) -> Result<Category, RepositoryError> {
        let result = sqlx::query("INSERT INTO categories (name) VALUES (?)")
            .bind(&draft.name)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        self.live.publish_categories(&self.pool).await;

        Ok(draft
            .clone()
            .into_category(CategoryId::new(result.last_insert_rowid())))
    }

    async fn delete(&self, id: CategoryId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found());
        }

        self.live.publish_categories(&self.pool).await;
        Ok(())
    }

    async fn rename(&self, id: CategoryId, new_name: &str) -> Result<u64, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        let old_name: String = sqlx::query_scalar("SELECT name FROM categories WHERE id = ?")
            .bind(id.value())
            .fetch_optional(&mut *tx)
            .await
            .map_err(storage_error)?
            .ok_or(RepositoryError::NotFound)?;

        sqlx::query("UPDATE categories SET name = ? WHERE id = ?")
            .bind(new_name)
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?;

        let retagged = sqlx::query("UPDATE products SET category = ? WHERE category = ?")
            .bind(new_name)
            .bind(&old_name)
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?
            .rows_affected();

        tx.commit().await.map_err(storage_error)?;
        tracing::debug!(
            "Category {} renamed from {} to {}, {} products retagged",
            id,
            old_name,
            new_name,
            retagged
        );

        self.live.publish_categories(&self.pool).await;
        self.live.publish_products(&self.pool).await;
        Ok(retagged)
    }
}
