//! Newsletter dashboard gateway.
//!
//! A thin API layer between the browser dashboard and the upstream
//! newsletter backend. Every route relays the bearer credential stored in
//! an HTTP-only cookie, forwards the mapped request upstream, and wraps the
//! outcome in a normalized response envelope.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod proxy;
pub mod repositories;

use crate::api::common::ApiResponse;
use crate::config::Config;
use crate::proxy::UpstreamClient;
use crate::repositories::schedule_repository::{InMemoryScheduleStore, ScheduleStore};
use crate::repositories::subscription_repository::{
    InMemorySubscriptionStore, SubscriptionStore,
};
use anyhow::Result;
use axum::{Extension, Router, response::Json, routing::get};
use std::sync::Arc;

/// Shared per-process state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub upstream: UpstreamClient,
    pub schedule_store: Arc<dyn ScheduleStore>,
    pub subscription_store: Arc<dyn SubscriptionStore>,
}

impl AppState {
    /// Builds the state with the in-memory fixture stores.
    pub fn new(config: Config) -> Result<Self> {
        let upstream = UpstreamClient::new(&config)?;
        Ok(AppState {
            config,
            upstream,
            schedule_store: Arc::new(InMemoryScheduleStore::default()),
            subscription_store: Arc::new(InMemorySubscriptionStore::default()),
        })
    }
}

/// Assembles the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .nest("/api/auth", auth::routes::auth_router())
        .nest(
            "/api/newsletters",
            api::newsletters::routes::newsletter_router(),
        )
        .nest("/api/articles", api::articles::routes::article_router())
        .nest("/api/generate", api::generate::routes::generate_router())
        .nest("/api/templates", api::templates::routes::template_router())
        .nest("/api/schedule", api::schedule::routes::schedule_router())
        .nest(
            "/api/subscription",
            api::subscription::routes::subscription_router(),
        )
        .nest("/api/analytics", api::analytics::routes::analytics_router())
        .nest("/api/feed", api::feed::routes::feed_router())
        .nest("/api/summaries", api::feed::routes::summaries_router())
        .nest("/api/admin", api::admin::routes::admin_router())
        .route("/api/stats", get(api::analytics::handlers::get_stats))
        .layer(Extension(state.config))
        .layer(Extension(state.upstream))
        .layer(Extension(state.schedule_store))
        .layer(Extension(state.subscription_store))
}

async fn root_handler() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        serde_json::json!({
            "service": "Newsletter Gateway",
            "version": "0.1.0"
        }),
        "Welcome to the Newsletter Gateway API",
    ))
}
