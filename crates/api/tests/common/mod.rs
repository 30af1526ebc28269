#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use quill_api::config::{ServerConfig, StoreBackend};
use quill_api::router::build_app_router;
use quill_api::state::{AppState, Stores};

/// Build a test `ServerConfig` with safe defaults and the in-memory store.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        store: StoreBackend::Memory,
    }
}

/// Build the full application router over fresh in-memory stores.
///
/// Each call starts from empty stores, so a test that needs several
/// requests to share data must clone the returned router.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config())
}

/// Same as [`build_test_app`] with a caller-supplied configuration.
pub fn build_test_app_with(config: ServerConfig) -> Router {
    build_app_router(AppState::new(config, Stores::memory()))
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Create a category and return its id.
pub async fn create_category(app: &Router, name: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/categories",
        serde_json::json!({"name": name, "description": format!("{name} posts")}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a post in `category_id` and return its id.
pub async fn create_post(app: &Router, title: &str, category_id: i64) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/posts",
        serde_json::json!({
            "title": title,
            "description": format!("{title} description"),
            "content": format!("{title} content"),
            "category_id": category_id,
        }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a comment on `post_id` and return its id.
pub async fn create_comment(app: &Router, post_id: i64, body: &str) -> i64 {
    let response = post_json(
        app.clone(),
        &format!("/api/v1/posts/{post_id}/comments"),
        serde_json::json!({"name": "Reader", "email": "reader@example.com", "body": body}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
