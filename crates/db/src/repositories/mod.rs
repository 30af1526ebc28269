//! Store adapter implementations.
//!
//! `*Repo` types are PostgreSQL adapters wrapping a [`PgPool`](sqlx::PgPool);
//! the [`memory`] module holds process-local adapters with the same contract.

pub mod category_repo;
pub mod comment_repo;
pub mod memory;
pub mod post_repo;

pub use category_repo::CategoryRepo;
pub use comment_repo::CommentRepo;
pub use memory::{MemoryCategoryStore, MemoryCommentStore, MemoryPostStore};
pub use post_repo::PostRepo;
