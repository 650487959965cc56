//! Handler for triggering newsletter generation upstream.

use crate::api::common::ProxyResponse;
use crate::api::generate::models::GenerateRequest;
use crate::auth::cookies::bearer_token;
use crate::proxy::{self, RouteDescriptor, UpstreamClient};
use axum::extract::{Extension, Json};
use axum::http::{Method, StatusCode};
use axum_extra::extract::cookie::CookieJar;
use serde_json::Value;
use std::collections::HashMap;

static GENERATE_NEWSLETTER: RouteDescriptor = RouteDescriptor {
    name: "generate.newsletter",
    method: Method::POST,
    upstream_path: "/generate/newsletter",
    query: &[],
    expect_list: false,
    success_status: StatusCode::OK,
    success_message: Some("Newsletter generated successfully"),
    failure_message: "Failed to generate newsletter",
};

/// Kick off newsletter generation in the upstream backend
#[axum::debug_handler]
pub async fn generate_newsletter(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Json(payload): Json<GenerateRequest>,
) -> ProxyResponse {
    let body = serde_json::to_value(payload.into_upstream()).unwrap_or(Value::Null);
    proxy::forward(
        &upstream,
        &GENERATE_NEWSLETTER,
        bearer_token(&jar).as_deref(),
        None,
        &HashMap::new(),
        Some(&body),
    )
    .await
}
