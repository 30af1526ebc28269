//! Handlers for the `/posts` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use quill_core::pagination::Page;
use quill_core::types::DbId;
use quill_db::models::post::{PostDto, PostInput};

use super::validate_input;
use crate::error::AppResult;
use crate::query::PostListParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/v1/posts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<PostInput>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    validate_input(&input)?;
    let post = state.posts.create_post(&input).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/v1/posts?page_no=&page_size=&sort_by=&sort_dir=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PostListParams>,
) -> AppResult<Json<Page<PostDto>>> {
    let page = state
        .posts
        .get_all_posts(
            params.page_no,
            params.page_size,
            &params.sort_by,
            &params.sort_dir,
        )
        .await?;
    Ok(Json(page))
}

/// GET /api/v1/posts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PostDto>> {
    let post = state.posts.get_post_by_id(id).await?;
    Ok(Json(post))
}

/// PUT /api/v1/posts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PostInput>,
) -> AppResult<Json<PostDto>> {
    validate_input(&input)?;
    let post = state.posts.update_post(&input, id).await?;
    Ok(Json(post))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    state.posts.delete_post_by_id(id).await?;
    Ok(Json(MessageResponse::new("Post entity deleted successfully.")))
}

/// GET /api/v1/posts/category/{category_id}
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
) -> AppResult<Json<Vec<PostDto>>> {
    let posts = state.posts.get_posts_by_category(category_id).await?;
    Ok(Json(posts))
}
