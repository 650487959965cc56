//! Handler functions for the content feed and article summaries.
//!
//! Both are read-only proxies over published articles; summaries default to
//! a smaller page size than the feed.

use crate::api::common::ProxyResponse;
use crate::auth::cookies::bearer_token;
use crate::proxy::{self, QueryParam, RouteDescriptor, UpstreamClient};
use axum::extract::{Extension, Query};
use axum::http::{Method, StatusCode};
use axum_extra::extract::cookie::CookieJar;
use std::collections::HashMap;

static FEED: RouteDescriptor = RouteDescriptor {
    name: "feed.list",
    method: Method::GET,
    upstream_path: "/feed/",
    query: &[
        QueryParam::with_default("skip", "0"),
        QueryParam::with_default("limit", "20"),
        QueryParam::passthrough("category"),
    ],
    expect_list: true,
    success_status: StatusCode::OK,
    success_message: None,
    failure_message: "Failed to fetch feed",
};

static SUMMARIES: RouteDescriptor = RouteDescriptor {
    name: "summaries.list",
    method: Method::GET,
    upstream_path: "/summaries/",
    query: &[
        QueryParam::with_default("skip", "0"),
        QueryParam::with_default("limit", "10"),
    ],
    expect_list: true,
    success_status: StatusCode::OK,
    success_message: None,
    failure_message: "Failed to fetch summaries",
};

/// Trending and recent published articles
#[axum::debug_handler]
pub async fn get_feed(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Query(params): Query<HashMap<String, String>>,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &FEED,
        bearer_token(&jar).as_deref(),
        None,
        &params,
        None,
    )
    .await
}

/// Article summaries for the summaries page
#[axum::debug_handler]
pub async fn get_summaries(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Query(params): Query<HashMap<String, String>>,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &SUMMARIES,
        bearer_token(&jar).as_deref(),
        None,
        &params,
        None,
    )
    .await
}
