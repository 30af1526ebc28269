//! Category entity model and DTOs.

use quill_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: String,
}

/// A category that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

/// Request body for creating or replacing a category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryInput {
    #[validate(length(min = 1, message = "Category name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Transfer representation of a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: DbId,
    pub name: String,
    pub description: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}

impl From<&CategoryInput> for NewCategory {
    fn from(input: &CategoryInput) -> Self {
        Self {
            name: input.name.clone(),
            description: input.description.clone(),
        }
    }
}
