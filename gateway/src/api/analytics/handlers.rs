//! Handler functions for analytics endpoints.
//!
//! All analytics routes are read-only proxies. The legacy `/api/stats`
//! overview reshapes the upstream totals into the dashboard's tile names
//! and stamps the response time itself.

use crate::api::common::ProxyResponse;
use crate::auth::cookies::bearer_token;
use crate::proxy::{self, QueryParam, RouteDescriptor, UpstreamClient};
use axum::extract::{Extension, Query};
use axum::http::{Method, StatusCode};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;
use std::collections::HashMap;

static OVERVIEW: RouteDescriptor = RouteDescriptor {
    name: "analytics.overview",
    method: Method::GET,
    upstream_path: "/analytics/overview",
    query: &[],
    expect_list: false,
    success_status: StatusCode::OK,
    success_message: None,
    failure_message: "Failed to fetch overview stats",
};

static PERF: RouteDescriptor = RouteDescriptor {
    name: "analytics.perf",
    method: Method::GET,
    upstream_path: "/analytics/perf",
    query: &[QueryParam::passthrough("newsletter_id")],
    expect_list: false,
    success_status: StatusCode::OK,
    success_message: None,
    failure_message: "Failed to fetch performance data",
};

static SERIES: RouteDescriptor = RouteDescriptor {
    name: "analytics.series",
    method: Method::GET,
    upstream_path: "/analytics/series",
    query: &[
        QueryParam::passthrough("days"),
        QueryParam::passthrough("metric"),
    ],
    expect_list: true,
    success_status: StatusCode::OK,
    success_message: None,
    failure_message: "Failed to fetch series data",
};

static REACH: RouteDescriptor = RouteDescriptor {
    name: "analytics.reach",
    method: Method::GET,
    upstream_path: "/analytics/reach",
    query: &[],
    expect_list: true,
    success_status: StatusCode::OK,
    success_message: None,
    failure_message: "Failed to fetch reach data",
};

static CATEGORIES: RouteDescriptor = RouteDescriptor {
    name: "analytics.categories",
    method: Method::GET,
    upstream_path: "/analytics/categories",
    query: &[],
    expect_list: true,
    success_status: StatusCode::OK,
    success_message: None,
    failure_message: "Failed to fetch category breakdown",
};

static TIMELINE: RouteDescriptor = RouteDescriptor {
    name: "analytics.timeline",
    method: Method::GET,
    upstream_path: "/analytics/newsletters-timeline",
    query: &[],
    expect_list: true,
    success_status: StatusCode::OK,
    success_message: None,
    failure_message: "Failed to fetch newsletter timeline",
};

/// Aggregate totals for the overview tab
#[axum::debug_handler]
pub async fn get_overview(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &OVERVIEW,
        bearer_token(&jar).as_deref(),
        None,
        &HashMap::new(),
        None,
    )
    .await
}

/// Per-newsletter performance metrics
#[axum::debug_handler]
pub async fn get_perf(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Query(params): Query<HashMap<String, String>>,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &PERF,
        bearer_token(&jar).as_deref(),
        None,
        &params,
        None,
    )
    .await
}

/// Daily engagement series
#[axum::debug_handler]
pub async fn get_series(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Query(params): Query<HashMap<String, String>>,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &SERIES,
        bearer_token(&jar).as_deref(),
        None,
        &params,
        None,
    )
    .await
}

/// Weekly subscriber and reach numbers
#[axum::debug_handler]
pub async fn get_reach(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &REACH,
        bearer_token(&jar).as_deref(),
        None,
        &HashMap::new(),
        None,
    )
    .await
}

/// Content category breakdown
#[axum::debug_handler]
pub async fn get_categories(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &CATEGORIES,
        bearer_token(&jar).as_deref(),
        None,
        &HashMap::new(),
        None,
    )
    .await
}

/// Newsletters sent per month
#[axum::debug_handler]
pub async fn get_newsletters_timeline(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &TIMELINE,
        bearer_token(&jar).as_deref(),
        None,
        &HashMap::new(),
        None,
    )
    .await
}

/// Dashboard tile stats, reshaped from the upstream overview totals
#[axum::debug_handler]
pub async fn get_stats(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
) -> ProxyResponse {
    let result = proxy::fetch_json(
        &upstream,
        &OVERVIEW,
        bearer_token(&jar).as_deref(),
        None,
        &HashMap::new(),
        None,
    )
    .await;

    match result {
        Ok(overview) => {
            let stats = json!({
                "total": overview.get("total_newsletters").cloned().unwrap_or(json!(0)),
                "summaries": overview.get("total_subscribers").cloned().unwrap_or(json!(0)),
                "topics": overview.get("total_sent").cloned().unwrap_or(json!(0)),
                "updatedAt": chrono::Utc::now().to_rfc3339(),
            });
            proxy::success_response(&OVERVIEW, stats)
        }
        Err(error) => proxy::error_response(&OVERVIEW, error),
    }
}
