//! Handler functions for newsletter endpoints.
//!
//! All five operations are straight proxies described by the route table
//! below; creation and update run their payloads through the field mappers
//! in `models` first.

use crate::api::common::ProxyResponse;
use crate::api::newsletters::models::{CreateNewsletterRequest, UpdateNewsletterRequest};
use crate::auth::cookies::bearer_token;
use crate::proxy::{self, QueryParam, RouteDescriptor, UpstreamClient};
use axum::http::{Method, StatusCode};
use axum::extract::{Extension, Json, Path, Query};
use axum_extra::extract::cookie::CookieJar;
use serde_json::Value;
use std::collections::HashMap;

static LIST_NEWSLETTERS: RouteDescriptor = RouteDescriptor {
    name: "newsletters.list",
    method: Method::GET,
    upstream_path: "/newsletters/",
    query: &[
        QueryParam::with_default("skip", "0"),
        QueryParam::with_default("limit", "20"),
        QueryParam::passthrough("status"),
    ],
    expect_list: true,
    success_status: StatusCode::OK,
    success_message: Some("Retrieved newsletter(s)"),
    failure_message: "Failed to fetch newsletters",
};

static CREATE_NEWSLETTER: RouteDescriptor = RouteDescriptor {
    name: "newsletters.create",
    method: Method::POST,
    upstream_path: "/newsletters/",
    query: &[],
    expect_list: false,
    success_status: StatusCode::CREATED,
    success_message: Some("Newsletter created successfully"),
    failure_message: "Failed to create newsletter",
};

static GET_NEWSLETTER: RouteDescriptor = RouteDescriptor {
    name: "newsletters.get",
    method: Method::GET,
    upstream_path: "/newsletters/{id}",
    query: &[],
    expect_list: false,
    success_status: StatusCode::OK,
    success_message: None,
    failure_message: "Failed to fetch newsletter",
};

static UPDATE_NEWSLETTER: RouteDescriptor = RouteDescriptor {
    name: "newsletters.update",
    method: Method::PUT,
    upstream_path: "/newsletters/{id}",
    query: &[],
    expect_list: false,
    success_status: StatusCode::OK,
    success_message: Some("Newsletter updated successfully"),
    failure_message: "Failed to update newsletter",
};

static DELETE_NEWSLETTER: RouteDescriptor = RouteDescriptor {
    name: "newsletters.delete",
    method: Method::DELETE,
    upstream_path: "/newsletters/{id}",
    query: &[],
    expect_list: false,
    success_status: StatusCode::OK,
    success_message: Some("Newsletter deleted successfully"),
    failure_message: "Failed to delete newsletter",
};

/// List newsletters for the current user
#[axum::debug_handler]
pub async fn get_newsletters(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Query(params): Query<HashMap<String, String>>,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &LIST_NEWSLETTERS,
        bearer_token(&jar).as_deref(),
        None,
        &params,
        None,
    )
    .await
}

/// Create a newsletter from the dashboard payload
#[axum::debug_handler]
pub async fn create_newsletter(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Json(payload): Json<CreateNewsletterRequest>,
) -> ProxyResponse {
    let body = serde_json::to_value(payload.into_upstream()).unwrap_or(Value::Null);
    proxy::forward(
        &upstream,
        &CREATE_NEWSLETTER,
        bearer_token(&jar).as_deref(),
        None,
        &HashMap::new(),
        Some(&body),
    )
    .await
}

/// Fetch a single newsletter by id
#[axum::debug_handler]
pub async fn get_newsletter_by_id(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &GET_NEWSLETTER,
        bearer_token(&jar).as_deref(),
        Some(&id),
        &HashMap::new(),
        None,
    )
    .await
}

/// Update a newsletter; only fields set by the dashboard are forwarded
#[axum::debug_handler]
pub async fn update_newsletter(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Path(id): Path<String>,
    Json(payload): Json<UpdateNewsletterRequest>,
) -> ProxyResponse {
    let body = serde_json::to_value(&payload).unwrap_or(Value::Null);
    proxy::forward(
        &upstream,
        &UPDATE_NEWSLETTER,
        bearer_token(&jar).as_deref(),
        Some(&id),
        &HashMap::new(),
        Some(&body),
    )
    .await
}

/// Delete a newsletter by id
#[axum::debug_handler]
pub async fn delete_newsletter(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &DELETE_NEWSLETTER,
        bearer_token(&jar).as_deref(),
        Some(&id),
        &HashMap::new(),
        None,
    )
    .await
}
