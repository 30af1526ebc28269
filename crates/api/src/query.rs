//! Shared query parameter types for API handlers.

use quill_core::pagination::{
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, DEFAULT_SORT_BY, DEFAULT_SORT_DIRECTION,
};
use serde::Deserialize;

/// Paging and sorting for post listings
/// (`?page_no=&page_size=&sort_by=&sort_dir=`, camelCase also accepted).
///
/// Missing values fall back to the defaults in
/// [`quill_core::pagination`]. Range checks happen in the service.
#[derive(Debug, Deserialize)]
pub struct PostListParams {
    #[serde(default = "default_page_no", alias = "pageNo")]
    pub page_no: i64,
    #[serde(default = "default_page_size", alias = "pageSize")]
    pub page_size: i64,
    #[serde(default = "default_sort_by", alias = "sortBy")]
    pub sort_by: String,
    #[serde(default = "default_sort_dir", alias = "sortDir")]
    pub sort_dir: String,
}

fn default_page_no() -> i64 {
    DEFAULT_PAGE_NUMBER
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

fn default_sort_by() -> String {
    DEFAULT_SORT_BY.to_string()
}

fn default_sort_dir() -> String {
    DEFAULT_SORT_DIRECTION.to_string()
}
