//! Comments nested under posts.
//!
//! Addressing a single comment takes the pair `(post_id, comment_id)`.
//! Resolution always runs in the same order: the post must exist, then the
//! comment must exist, then the comment's stored `post_id` must match. A
//! caller never sees a parentage conflict while either lookup would fail.

use std::sync::Arc;

use quill_core::error::CoreError;
use quill_core::types::DbId;
use quill_db::models::comment::{Comment, CommentDto, CommentInput, NewComment};
use quill_db::{CommentStore, PostStore};

use crate::ServiceResult;

#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentStore>,
    posts: Arc<dyn PostStore>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentStore>, posts: Arc<dyn PostStore>) -> Self {
        Self { comments, posts }
    }

    pub async fn create_comment(
        &self,
        post_id: DbId,
        input: &CommentInput,
    ) -> ServiceResult<CommentDto> {
        self.ensure_post(post_id).await?;
        let comment = self
            .comments
            .insert(NewComment::from_input(post_id, input))
            .await?;
        tracing::info!(post_id, comment_id = comment.id, "Comment created");
        Ok(comment.into())
    }

    /// Comments under `post_id` in store order. The post itself is not
    /// checked: an unknown post simply has no comments.
    pub async fn get_comments_by_post_id(&self, post_id: DbId) -> ServiceResult<Vec<CommentDto>> {
        let comments = self.comments.find_by_post_id(post_id).await?;
        tracing::debug!(post_id, count = comments.len(), "Listed comments");
        Ok(comments.into_iter().map(CommentDto::from).collect())
    }

    pub async fn get_comment_by_id(
        &self,
        post_id: DbId,
        comment_id: DbId,
    ) -> ServiceResult<CommentDto> {
        Ok(self.resolve(post_id, comment_id).await?.into())
    }

    pub async fn update_comment(
        &self,
        post_id: DbId,
        comment_id: DbId,
        input: &CommentInput,
    ) -> ServiceResult<CommentDto> {
        let existing = self.resolve(post_id, comment_id).await?;
        let updated = self
            .comments
            .update(&apply_update(existing, input))
            .await?;
        tracing::info!(post_id, comment_id, "Comment updated");
        Ok(updated.into())
    }

    pub async fn delete_comment(&self, post_id: DbId, comment_id: DbId) -> ServiceResult<()> {
        let existing = self.resolve(post_id, comment_id).await?;
        self.comments.delete(&existing).await?;
        tracing::info!(post_id, comment_id, "Comment deleted");
        Ok(())
    }

    async fn ensure_post(&self, post_id: DbId) -> ServiceResult<()> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Post", post_id))?;
        Ok(())
    }

    /// Post existence, then comment existence, then parentage.
    async fn resolve(&self, post_id: DbId, comment_id: DbId) -> ServiceResult<Comment> {
        self.ensure_post(post_id).await?;
        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Comment", comment_id))?;
        Ok(check_parentage(comment, post_id)?)
    }
}

/// A comment is only addressable through the post it was created under.
fn check_parentage(comment: Comment, post_id: DbId) -> Result<Comment, CoreError> {
    if comment.post_id == post_id {
        Ok(comment)
    } else {
        tracing::warn!(
            comment_id = comment.id,
            stored_post_id = comment.post_id,
            requested_post_id = post_id,
            "Comment addressed through the wrong post"
        );
        Err(CoreError::Conflict("Comment does not belong to post".into()))
    }
}

/// Overwrite the text fields of a stored comment. The parent is untouched.
fn apply_update(existing: Comment, input: &CommentInput) -> Comment {
    Comment {
        name: input.name.clone(),
        email: input.email.clone(),
        body: input.body.clone(),
        ..existing
    }
}
