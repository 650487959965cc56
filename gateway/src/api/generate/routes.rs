//! Defines the HTTP route for newsletter generation.

use super::handlers::generate_newsletter;
use axum::{Router, routing::post};

pub fn generate_router() -> Router {
    Router::new().route("/", post(generate_newsletter))
}
