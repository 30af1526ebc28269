//! Repository for the `posts` table.

use async_trait::async_trait;
use quill_core::pagination::PageRequest;
use quill_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::{NewPost, Post, PostSortField};
use crate::stores::PostStore;
use crate::StoreError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, content, created_at, category_id";

/// PostgreSQL-backed [`PostStore`].
#[derive(Debug, Clone)]
pub struct PostRepo {
    pool: PgPool,
}

impl PostRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PostRepo {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Post>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        let post = sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM posts ORDER BY id ASC");
        let posts = sqlx::query_as::<_, Post>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    /// The ORDER BY key comes from the closed [`PostSortField`] set, never
    /// from raw caller input. Text keys use the "C" collation to match the
    /// in-memory store. Ties fall back to ascending id.
    async fn find_page(
        &self,
        request: &PageRequest<PostSortField>,
    ) -> Result<(Vec<Post>, i64), StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts
             ORDER BY {key} {direction}, id ASC
             LIMIT $1 OFFSET $2",
            key = request.sort_by().order_key(),
            direction = request.direction().as_sql(),
        );
        let posts = sqlx::query_as::<_, Post>(&query)
            .bind(request.page_size())
            .bind(request.offset())
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;

        Ok((posts, total))
    }

    async fn find_by_category_id(&self, category_id: DbId) -> Result<Vec<Post>, StoreError> {
        let query =
            format!("SELECT {COLUMNS} FROM posts WHERE category_id = $1 ORDER BY id ASC");
        let posts = sqlx::query_as::<_, Post>(&query)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    async fn insert(&self, post: NewPost) -> Result<Post, StoreError> {
        let query = format!(
            "INSERT INTO posts (title, description, content, created_at, category_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Post>(&query)
            .bind(&post.title)
            .bind(&post.description)
            .bind(&post.content)
            .bind(post.created_at)
            .bind(post.category_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn update(&self, post: &Post) -> Result<Post, StoreError> {
        let query = format!(
            "UPDATE posts SET
                title = $2,
                description = $3,
                content = $4,
                category_id = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(post.id)
            .bind(&post.title)
            .bind(&post.description)
            .bind(&post.content)
            .bind(post.category_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::RowMissing {
                entity: "Post",
                id: post.id,
            })
    }

    async fn delete(&self, post: &Post) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
