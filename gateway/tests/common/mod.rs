//! Shared helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{Request, Response};
use gateway::config::Config;
use gateway::{AppState, build_router};
use serde_json::Value;

/// Builds the full application router pointed at the given upstream base URL.
pub fn app(backend_url: &str) -> Router {
    let config = Config {
        backend_url: backend_url.trim_end_matches('/').to_string(),
        server_port: 0,
        upstream_timeout_seconds: 5,
        secure_cookies: false,
    };
    let state = AppState::new(config).expect("failed to build app state");
    build_router(state)
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}
