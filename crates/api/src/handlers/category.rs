//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quill_core::types::DbId;
use quill_db::models::category::{CategoryDto, CategoryInput};

use super::validate_input;
use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CategoryInput>,
) -> AppResult<(StatusCode, Json<CategoryDto>)> {
    validate_input(&input)?;
    let category = state.categories.add_category(&input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryDto>>> {
    let categories = state.categories.get_all_categories().await?;
    Ok(Json(categories))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CategoryDto>> {
    let category = state.categories.get_category(id).await?;
    Ok(Json(category))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CategoryInput>,
) -> AppResult<Json<CategoryDto>> {
    validate_input(&input)?;
    let category = state.categories.update_category(&input, id).await?;
    Ok(Json(category))
}

/// DELETE /api/v1/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    state.categories.delete_category(id).await?;
    Ok(Json(MessageResponse::new("Category deleted successfully!")))
}
