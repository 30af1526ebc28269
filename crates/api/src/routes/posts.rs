//! Route definitions for the `/posts` resource.
//!
//! Also nests comment routes under `/posts/{post_id}/comments`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{comment, post};
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// GET    /                                -> list (paged, sorted)
/// POST   /                                -> create
/// GET    /{post_id}                       -> get_by_id
/// PUT    /{post_id}                       -> update
/// DELETE /{post_id}                       -> delete
/// GET    /category/{category_id}          -> list_by_category
///
/// GET    /{post_id}/comments              -> list_by_post
/// POST   /{post_id}/comments              -> create
/// GET    /{post_id}/comments/{id}         -> get_by_id
/// PUT    /{post_id}/comments/{id}         -> update
/// DELETE /{post_id}/comments/{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    let comment_routes = Router::new()
        .route("/", get(comment::list_by_post).post(comment::create))
        .route(
            "/{id}",
            get(comment::get_by_id)
                .put(comment::update)
                .delete(comment::delete),
        );

    Router::new()
        .route("/", get(post::list).post(post::create))
        .route("/category/{category_id}", get(post::list_by_category))
        .route(
            "/{post_id}",
            get(post::get_by_id).put(post::update).delete(post::delete),
        )
        .nest("/{post_id}/comments", comment_routes)
}
