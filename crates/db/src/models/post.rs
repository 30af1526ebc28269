//! Post entity model, DTOs and the sortable column set.

use std::cmp::Ordering;

use quill_core::error::CoreError;
use quill_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `posts` table.
///
/// The owning category is held by id only. Comments are looked up by
/// `post_id` and never stored on the post itself.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub created_at: Timestamp,
    pub category_id: DbId,
}

/// A post that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub content: String,
    pub created_at: Timestamp,
    pub category_id: DbId,
}

/// Request body for creating or replacing a post.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostInput {
    #[validate(length(min = 1, message = "Post title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Post description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "Post content must not be empty"))]
    pub content: String,
    pub category_id: DbId,
}

/// Transfer representation of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDto {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub created_at: Timestamp,
    pub category_id: DbId,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            description: post.description,
            content: post.content,
            created_at: post.created_at,
            category_id: post.category_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Columns a post listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSortField {
    Id,
    Title,
    Description,
    Content,
    CreatedAt,
    CategoryId,
}

impl PostSortField {
    /// Resolve a caller-supplied field name. Accepts snake_case column names
    /// and their camelCase spellings.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw.trim() {
            "id" => Ok(PostSortField::Id),
            "title" => Ok(PostSortField::Title),
            "description" => Ok(PostSortField::Description),
            "content" => Ok(PostSortField::Content),
            "created_at" | "createdAt" => Ok(PostSortField::CreatedAt),
            "category_id" | "categoryId" => Ok(PostSortField::CategoryId),
            other => Err(CoreError::Validation(format!(
                "Cannot sort posts by '{other}'"
            ))),
        }
    }

    /// SQL expression for `ORDER BY`. Text columns use the byte-wise "C"
    /// collation so PostgreSQL orders them exactly like [`compare`](Self::compare).
    pub fn order_key(self) -> &'static str {
        match self {
            PostSortField::Id => "id",
            PostSortField::Title => r#"title COLLATE "C""#,
            PostSortField::Description => r#"description COLLATE "C""#,
            PostSortField::Content => r#"content COLLATE "C""#,
            PostSortField::CreatedAt => "created_at",
            PostSortField::CategoryId => "category_id",
        }
    }

    /// Ascending comparison of two posts on this field. Strings compare by
    /// byte, so uppercase sorts before lowercase.
    pub fn compare(self, a: &Post, b: &Post) -> Ordering {
        match self {
            PostSortField::Id => a.id.cmp(&b.id),
            PostSortField::Title => a.title.cmp(&b.title),
            PostSortField::Description => a.description.cmp(&b.description),
            PostSortField::Content => a.content.cmp(&b.content),
            PostSortField::CreatedAt => a.created_at.cmp(&b.created_at),
            PostSortField::CategoryId => a.category_id.cmp(&b.category_id),
        }
    }
}
