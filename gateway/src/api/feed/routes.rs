//! Defines the HTTP routes for the content feed and summaries.

use super::handlers::{get_feed, get_summaries};
use axum::{Router, routing::get};

pub fn feed_router() -> Router {
    Router::new().route("/", get(get_feed))
}

pub fn summaries_router() -> Router {
    Router::new().route("/", get(get_summaries))
}
