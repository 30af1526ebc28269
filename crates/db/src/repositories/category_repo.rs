//! Repository for the `categories` table.

use async_trait::async_trait;
use quill_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, NewCategory};
use crate::stores::CategoryStore;
use crate::StoreError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description";

/// PostgreSQL-backed [`CategoryStore`].
#[derive(Debug, Clone)]
pub struct CategoryRepo {
    pool: PgPool,
}

impl CategoryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for CategoryRepo {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(category)
    }

    async fn find_all(&self) -> Result<Vec<Category>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
        let categories = sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }

    async fn insert(&self, category: NewCategory) -> Result<Category, StoreError> {
        let query = format!(
            "INSERT INTO categories (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Category>(&query)
            .bind(&category.name)
            .bind(&category.description)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn update(&self, category: &Category) -> Result<Category, StoreError> {
        let query = format!(
            "UPDATE categories SET name = $2, description = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(category.id)
            .bind(&category.name)
            .bind(&category.description)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::RowMissing {
                entity: "Category",
                id: category.id,
            })
    }

    async fn delete(&self, category: &Category) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(category.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
