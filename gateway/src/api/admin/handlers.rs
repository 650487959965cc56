//! Handler functions for admin endpoints.
//!
//! The gateway performs no role checks of its own; the upstream backend
//! enforces the admin role and its 403 is forwarded like any rejection.

use crate::api::common::ProxyResponse;
use crate::auth::cookies::bearer_token;
use crate::proxy::{self, QueryParam, RouteDescriptor, UpstreamClient};
use axum::extract::{Extension, Query};
use axum::http::{Method, StatusCode};
use axum_extra::extract::cookie::CookieJar;
use std::collections::HashMap;

static DASHBOARD: RouteDescriptor = RouteDescriptor {
    name: "admin.dashboard",
    method: Method::GET,
    upstream_path: "/admin/dashboard",
    query: &[],
    expect_list: false,
    success_status: StatusCode::OK,
    success_message: None,
    failure_message: "Failed to fetch admin dashboard",
};

static USERS: RouteDescriptor = RouteDescriptor {
    name: "admin.users",
    method: Method::GET,
    upstream_path: "/admin/users",
    query: &[
        QueryParam::with_default("skip", "0"),
        QueryParam::with_default("limit", "50"),
    ],
    expect_list: true,
    success_status: StatusCode::OK,
    success_message: None,
    failure_message: "Failed to fetch users",
};

/// Admin dashboard aggregates
#[axum::debug_handler]
pub async fn get_dashboard(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &DASHBOARD,
        bearer_token(&jar).as_deref(),
        None,
        &HashMap::new(),
        None,
    )
    .await
}

/// All registered users
#[axum::debug_handler]
pub async fn get_users(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Query(params): Query<HashMap<String, String>>,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &USERS,
        bearer_token(&jar).as_deref(),
        None,
        &params,
        None,
    )
    .await
}
