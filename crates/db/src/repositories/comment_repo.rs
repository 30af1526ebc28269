//! Repository for the `comments` table.

use async_trait::async_trait;
use quill_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, NewComment};
use crate::stores::CommentStore;
use crate::StoreError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, body, post_id";

/// PostgreSQL-backed [`CommentStore`].
#[derive(Debug, Clone)]
pub struct CommentRepo {
    pool: PgPool,
}

impl CommentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentStore for CommentRepo {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Comment>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        let comment = sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(comment)
    }

    async fn find_by_post_id(&self, post_id: DbId) -> Result<Vec<Comment>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE post_id = $1 ORDER BY id ASC");
        let comments = sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(comments)
    }

    async fn insert(&self, comment: NewComment) -> Result<Comment, StoreError> {
        let query = format!(
            "INSERT INTO comments (name, email, body, post_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Comment>(&query)
            .bind(&comment.name)
            .bind(&comment.email)
            .bind(&comment.body)
            .bind(comment.post_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn update(&self, comment: &Comment) -> Result<Comment, StoreError> {
        let query = format!(
            "UPDATE comments SET name = $2, email = $3, body = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(comment.id)
            .bind(&comment.name)
            .bind(&comment.email)
            .bind(&comment.body)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::RowMissing {
                entity: "Comment",
                id: comment.id,
            })
    }

    async fn delete(&self, comment: &Comment) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(comment.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
