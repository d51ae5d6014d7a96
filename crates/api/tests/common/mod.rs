#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use todo_api::config::ServerConfig;
use todo_api::router::build_app_router;
use todo_api::state::AppState;
use todo_db::DbPool;

/// Build a test `ServerConfig` with safe defaults and the todo routes at `/todos`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        base_path: "/todos".to_string(),
        public_url: None,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
    }
}

/// Fresh in-memory database with the schema applied.
pub async fn test_pool() -> DbPool {
    let pool = todo_db::create_pool("sqlite::memory:").await.unwrap();
    todo_db::ensure_schema(&pool).await.unwrap();
    pool
}

/// Build the full application router over `pool` with the default test config.
pub fn build_test_app(pool: DbPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Build the full application router with a custom config.
///
/// Goes through [`build_app_router`] so tests exercise the same middleware
/// stack production uses.
pub fn build_test_app_with(pool: DbPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config),
    };
    build_app_router(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("host", "localhost:3000")
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header("host", "localhost:3000")
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body.to_string()).await
}

/// PATCH with a raw body so tests control exactly which keys are present.
pub async fn patch_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    send_json(app, Method::PATCH, uri, body.to_string()).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("host", "localhost:3000")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
