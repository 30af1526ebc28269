//! Handlers for the comments nested under posts:
//! `/posts/{post_id}/comments[/{id}]`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quill_core::types::DbId;
use quill_db::models::comment::{CommentDto, CommentInput};

use super::validate_input;
use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/v1/posts/{post_id}/comments
pub async fn create(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
    Json(input): Json<CommentInput>,
) -> AppResult<(StatusCode, Json<CommentDto>)> {
    validate_input(&input)?;
    let comment = state.comments.create_comment(post_id, &input).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /api/v1/posts/{post_id}/comments
pub async fn list_by_post(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<Json<Vec<CommentDto>>> {
    let comments = state.comments.get_comments_by_post_id(post_id).await?;
    Ok(Json(comments))
}

/// GET /api/v1/posts/{post_id}/comments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((post_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<CommentDto>> {
    let comment = state.comments.get_comment_by_id(post_id, id).await?;
    Ok(Json(comment))
}

/// PUT /api/v1/posts/{post_id}/comments/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((post_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<CommentInput>,
) -> AppResult<Json<CommentDto>> {
    validate_input(&input)?;
    let comment = state.comments.update_comment(post_id, id, &input).await?;
    Ok(Json(comment))
}

/// DELETE /api/v1/posts/{post_id}/comments/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((post_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    state.comments.delete_comment(post_id, id).await?;
    Ok(Json(MessageResponse::new("Comment deleted successfully")))
}
