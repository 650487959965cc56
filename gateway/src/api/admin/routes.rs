//! Defines the HTTP routes for admin data.

use super::handlers::{get_dashboard, get_users};
use axum::{Router, routing::get};

pub fn admin_router() -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/users", get(get_users))
}
