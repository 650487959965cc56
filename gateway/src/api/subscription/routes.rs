//! Defines the HTTP routes for subscription management.

use super::handlers::{change_subscription, get_subscription};
use axum::{Router, routing::get};

pub fn subscription_router() -> Router {
    Router::new().route("/", get(get_subscription).post(change_subscription))
}
