//! Comment entity model and DTOs.
//!
//! A comment belongs to exactly one post. `post_id` is fixed when the
//! comment is created; updates only touch the text fields.

use quill_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `comments` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub body: String,
    pub post_id: DbId,
}

/// A comment that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub name: String,
    pub email: String,
    pub body: String,
    pub post_id: DbId,
}

/// Request body for creating or replacing a comment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentInput {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Email must not be empty"),
        email(message = "Email must be a valid address")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Comment body must not be empty"))]
    pub body: String,
}

/// Transfer representation of a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub body: String,
    pub post_id: DbId,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            name: comment.name,
            email: comment.email,
            body: comment.body,
            post_id: comment.post_id,
        }
    }
}

impl NewComment {
    /// Attach validated input to its parent post.
    pub fn from_input(post_id: DbId, input: &CommentInput) -> Self {
        Self {
            name: input.name.clone(),
            email: input.email.clone(),
            body: input.body.clone(),
            post_id,
        }
    }
}
