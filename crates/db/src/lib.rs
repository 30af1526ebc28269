//! Persistence layer: entities, transfer representations and the store
//! adapters the services read and write through.
//!
//! Every store is an `async_trait` object so the services run unchanged
//! against PostgreSQL ([`repositories`]) or the in-memory adapters
//! ([`repositories::memory`]).

use quill_core::types::DbId;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod stores;

pub use stores::{CategoryStore, CommentStore, PostStore};

pub type DbPool = sqlx::PgPool;

/// Error surfaced by any store adapter.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// An update addressed a row that no longer exists.
    #[error("{entity} row {id} missing during write")]
    RowMissing { entity: &'static str, id: DbId },
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to make sure the pool can reach the server.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
