//! Blog services: categories, posts and the comments nested under posts.
//!
//! Services are stateless wrappers around shared store adapters. Each call
//! does at most one read-check-write sequence and either succeeds or fails
//! with a [`ServiceError`] before anything is persisted.

use quill_core::error::CoreError;
use quill_db::StoreError;

pub mod category;
pub mod comment;
pub mod post;

pub use category::CategoryService;
pub use comment::CommentService;
pub use post::PostService;

/// Failure of a service call: either a domain rule or the store underneath.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
