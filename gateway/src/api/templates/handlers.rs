//! Handler functions for template endpoints.

use crate::api::common::ProxyResponse;
use crate::api::templates::models::{CreateTemplateRequest, UpdateTemplateRequest};
use crate::auth::cookies::bearer_token;
use crate::proxy::{self, QueryParam, RouteDescriptor, UpstreamClient};
use axum::extract::{Extension, Json, Path, Query};
use axum::http::{Method, StatusCode};
use axum_extra::extract::cookie::CookieJar;
use serde_json::Value;
use std::collections::HashMap;

static LIST_TEMPLATES: RouteDescriptor = RouteDescriptor {
    name: "templates.list",
    method: Method::GET,
    upstream_path: "/templates/",
    query: &[
        QueryParam::with_default("skip", "0"),
        QueryParam::with_default("limit", "50"),
    ],
    expect_list: true,
    success_status: StatusCode::OK,
    success_message: None,
    failure_message: "Failed to fetch templates",
};

static CREATE_TEMPLATE: RouteDescriptor = RouteDescriptor {
    name: "templates.create",
    method: Method::POST,
    upstream_path: "/templates/",
    query: &[],
    expect_list: false,
    success_status: StatusCode::CREATED,
    success_message: Some("Template created successfully"),
    failure_message: "Failed to create template",
};

static GET_TEMPLATE: RouteDescriptor = RouteDescriptor {
    name: "templates.get",
    method: Method::GET,
    upstream_path: "/templates/{id}",
    query: &[],
    expect_list: false,
    success_status: StatusCode::OK,
    success_message: None,
    failure_message: "Failed to fetch template",
};

static UPDATE_TEMPLATE: RouteDescriptor = RouteDescriptor {
    name: "templates.update",
    method: Method::PUT,
    upstream_path: "/templates/{id}",
    query: &[],
    expect_list: false,
    success_status: StatusCode::OK,
    success_message: Some("Template updated successfully"),
    failure_message: "Failed to update template",
};

static DELETE_TEMPLATE: RouteDescriptor = RouteDescriptor {
    name: "templates.delete",
    method: Method::DELETE,
    upstream_path: "/templates/{id}",
    query: &[],
    expect_list: false,
    success_status: StatusCode::OK,
    success_message: Some("Template deleted successfully"),
    failure_message: "Failed to delete template",
};

/// List available templates
#[axum::debug_handler]
pub async fn get_templates(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Query(params): Query<HashMap<String, String>>,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &LIST_TEMPLATES,
        bearer_token(&jar).as_deref(),
        None,
        &params,
        None,
    )
    .await
}

/// Create a template
#[axum::debug_handler]
pub async fn create_template(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Json(payload): Json<CreateTemplateRequest>,
) -> ProxyResponse {
    let body = serde_json::to_value(&payload).unwrap_or(Value::Null);
    proxy::forward(
        &upstream,
        &CREATE_TEMPLATE,
        bearer_token(&jar).as_deref(),
        None,
        &HashMap::new(),
        Some(&body),
    )
    .await
}

/// Fetch a single template by id
#[axum::debug_handler]
pub async fn get_template_by_id(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &GET_TEMPLATE,
        bearer_token(&jar).as_deref(),
        Some(&id),
        &HashMap::new(),
        None,
    )
    .await
}

/// Update a template
#[axum::debug_handler]
pub async fn update_template(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTemplateRequest>,
) -> ProxyResponse {
    let body = serde_json::to_value(&payload).unwrap_or(Value::Null);
    proxy::forward(
        &upstream,
        &UPDATE_TEMPLATE,
        bearer_token(&jar).as_deref(),
        Some(&id),
        &HashMap::new(),
        Some(&body),
    )
    .await
}

/// Delete a template
#[axum::debug_handler]
pub async fn delete_template(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &DELETE_TEMPLATE,
        bearer_token(&jar).as_deref(),
        Some(&id),
        &HashMap::new(),
        None,
    )
    .await
}
