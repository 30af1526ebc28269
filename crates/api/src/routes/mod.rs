pub mod categories;
pub mod health;
pub mod posts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                                      list, create
/// /categories/{id}                                 get, update, delete
///
/// /posts                                           paged list, create
/// /posts/{id}                                      get, update, delete
/// /posts/category/{category_id}                    posts in a category
/// /posts/{post_id}/comments                        list, create
/// /posts/{post_id}/comments/{id}                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        // Post routes (also nests comments).
        .nest("/posts", posts::router())
}
