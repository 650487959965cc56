//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle user login, registration, session introspection, and
//! logout. They are designed to be nested into the main Axum router.

use crate::auth::handlers::*;
use axum::{
    Router,
    routing::{get, post},
};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/logout", post(logout))
        .route("/me", get(me))
}
