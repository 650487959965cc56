//! Handler functions for schedule endpoints.
//!
//! The config pair reads and merges the injected store; the entry handlers
//! proxy the upstream send queue.

use crate::api::common::{ApiResponse, ProxyResponse};
use crate::api::schedule::models::{CreateScheduleEntryRequest, UpdateScheduleEntryRequest};
use crate::auth::cookies::bearer_token;
use crate::proxy::{self, QueryParam, RouteDescriptor, UpstreamClient};
use crate::repositories::schedule_repository::{ScheduleConfigPatch, ScheduleStore};
use axum::extract::{Extension, Json, Path, Query};
use axum::http::{Method, StatusCode};
use axum::response::Json as ResponseJson;
use axum_extra::extract::cookie::CookieJar;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

static LIST_ENTRIES: RouteDescriptor = RouteDescriptor {
    name: "schedule.entries.list",
    method: Method::GET,
    upstream_path: "/schedule/",
    query: &[
        QueryParam::with_default("skip", "0"),
        QueryParam::with_default("limit", "50"),
    ],
    expect_list: true,
    success_status: StatusCode::OK,
    success_message: None,
    failure_message: "Failed to fetch schedules",
};

static CREATE_ENTRY: RouteDescriptor = RouteDescriptor {
    name: "schedule.entries.create",
    method: Method::POST,
    upstream_path: "/schedule/",
    query: &[],
    expect_list: false,
    success_status: StatusCode::CREATED,
    success_message: Some("Newsletter scheduled successfully"),
    failure_message: "Failed to schedule newsletter",
};

static UPDATE_ENTRY: RouteDescriptor = RouteDescriptor {
    name: "schedule.entries.update",
    method: Method::PUT,
    upstream_path: "/schedule/{id}",
    query: &[],
    expect_list: false,
    success_status: StatusCode::OK,
    success_message: Some("Schedule updated successfully"),
    failure_message: "Failed to update schedule",
};

static DELETE_ENTRY: RouteDescriptor = RouteDescriptor {
    name: "schedule.entries.delete",
    method: Method::DELETE,
    upstream_path: "/schedule/{id}",
    query: &[],
    expect_list: false,
    success_status: StatusCode::OK,
    success_message: Some("Schedule cancelled successfully"),
    failure_message: "Failed to cancel schedule",
};

/// Read the recurring delivery configuration
#[axum::debug_handler]
pub async fn get_schedule_config(
    Extension(store): Extension<Arc<dyn ScheduleStore>>,
) -> ProxyResponse {
    let config = store.get().await;
    (
        StatusCode::OK,
        ResponseJson(ApiResponse::ok(
            serde_json::to_value(config).unwrap_or(Value::Null),
        )),
    )
}

/// Merge a partial update into the delivery configuration
#[axum::debug_handler]
pub async fn update_schedule_config(
    Extension(store): Extension<Arc<dyn ScheduleStore>>,
    Json(patch): Json<ScheduleConfigPatch>,
) -> ProxyResponse {
    let config = store.update(patch).await;
    (
        StatusCode::OK,
        ResponseJson(ApiResponse::ok(
            serde_json::to_value(config).unwrap_or(Value::Null),
        )),
    )
}

/// List scheduled newsletter sends
#[axum::debug_handler]
pub async fn get_schedule_entries(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Query(params): Query<HashMap<String, String>>,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &LIST_ENTRIES,
        bearer_token(&jar).as_deref(),
        None,
        &params,
        None,
    )
    .await
}

/// Schedule a newsletter send
#[axum::debug_handler]
pub async fn create_schedule_entry(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Json(payload): Json<CreateScheduleEntryRequest>,
) -> ProxyResponse {
    let body = serde_json::to_value(payload.into_upstream()).unwrap_or(Value::Null);
    proxy::forward(
        &upstream,
        &CREATE_ENTRY,
        bearer_token(&jar).as_deref(),
        None,
        &HashMap::new(),
        Some(&body),
    )
    .await
}

/// Update a scheduled send
#[axum::debug_handler]
pub async fn update_schedule_entry(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Path(id): Path<String>,
    Json(payload): Json<UpdateScheduleEntryRequest>,
) -> ProxyResponse {
    let body = serde_json::to_value(&payload).unwrap_or(Value::Null);
    proxy::forward(
        &upstream,
        &UPDATE_ENTRY,
        bearer_token(&jar).as_deref(),
        Some(&id),
        &HashMap::new(),
        Some(&body),
    )
    .await
}

/// Cancel a scheduled send
#[axum::debug_handler]
pub async fn delete_schedule_entry(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &DELETE_ENTRY,
        bearer_token(&jar).as_deref(),
        Some(&id),
        &HashMap::new(),
        None,
    )
    .await
}
