//! Domain primitives shared by every Quill crate.
//!
//! Nothing in here touches the database or HTTP, so the store adapters,
//! services and API layer can all depend on it.

pub mod error;
pub mod pagination;
pub mod types;
