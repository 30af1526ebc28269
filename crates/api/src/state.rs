use std::sync::Arc;

use quill_db::repositories::{
    CategoryRepo, CommentRepo, MemoryCategoryStore, MemoryCommentStore, MemoryPostStore, PostRepo,
};
use quill_db::{CategoryStore, CommentStore, DbPool, PostStore};
use quill_service::{CategoryService, CommentService, PostService};

use crate::config::ServerConfig;

/// The three store adapters every service set is built from.
#[derive(Clone)]
pub struct Stores {
    pub categories: Arc<dyn CategoryStore>,
    pub posts: Arc<dyn PostStore>,
    pub comments: Arc<dyn CommentStore>,
    /// Present when the stores are PostgreSQL-backed.
    pub pool: Option<DbPool>,
}

impl Stores {
    /// Fresh, empty in-memory stores.
    pub fn memory() -> Self {
        Self {
            categories: Arc::new(MemoryCategoryStore::new()),
            posts: Arc::new(MemoryPostStore::new()),
            comments: Arc::new(MemoryCommentStore::new()),
            pool: None,
        }
    }

    /// PostgreSQL stores sharing one pool.
    pub fn postgres(pool: DbPool) -> Self {
        Self {
            categories: Arc::new(CategoryRepo::new(pool.clone())),
            posts: Arc::new(PostRepo::new(pool.clone())),
            comments: Arc::new(CommentRepo::new(pool.clone())),
            pool: Some(pool),
        }
    }
}

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub categories: CategoryService,
    pub posts: PostService,
    pub comments: CommentService,
    /// Database pool, when running against PostgreSQL. Used by `/health`.
    pub pool: Option<DbPool>,
}

impl AppState {
    /// Wire the services onto a set of stores.
    pub fn new(config: ServerConfig, stores: Stores) -> Self {
        Self {
            config: Arc::new(config),
            categories: CategoryService::new(Arc::clone(&stores.categories)),
            posts: PostService::new(Arc::clone(&stores.posts), Arc::clone(&stores.categories)),
            comments: CommentService::new(Arc::clone(&stores.comments), Arc::clone(&stores.posts)),
            pool: stores.pool,
        }
    }
}
