//! Defines the HTTP routes for article search and submission.

use super::handlers::{create_article, search_articles};
use axum::{Router, routing::get};

pub fn article_router() -> Router {
    Router::new().route("/", get(search_articles).post(create_article))
}
