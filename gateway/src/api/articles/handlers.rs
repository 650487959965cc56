//! Handler functions for article endpoints.
//!
//! Search proxies the upstream article index and reshapes each record into
//! the dashboard's summary card; submission is a plain mapped write.

use crate::api::common::ProxyResponse;
use crate::api::articles::models::{ArticleSummary, CreateArticleRequest};
use crate::auth::cookies::bearer_token;
use crate::proxy::{self, QueryParam, RouteDescriptor, UpstreamClient};
use axum::extract::{Extension, Json, Query};
use axum::http::{Method, StatusCode};
use axum_extra::extract::cookie::CookieJar;
use serde_json::Value;
use std::collections::HashMap;

static SEARCH_ARTICLES: RouteDescriptor = RouteDescriptor {
    name: "articles.search",
    method: Method::GET,
    upstream_path: "/articles/",
    query: &[
        QueryParam::renamed("q", "search"),
        QueryParam::with_default("skip", "0"),
        QueryParam::with_default("limit", "20"),
    ],
    expect_list: true,
    success_status: StatusCode::OK,
    success_message: None,
    failure_message: "Failed to fetch articles",
};

static CREATE_ARTICLE: RouteDescriptor = RouteDescriptor {
    name: "articles.create",
    method: Method::POST,
    upstream_path: "/articles/",
    query: &[],
    expect_list: false,
    success_status: StatusCode::CREATED,
    success_message: None,
    failure_message: "Failed to create article",
};

/// Search articles and reshape the results into summary cards
#[axum::debug_handler]
pub async fn search_articles(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Query(params): Query<HashMap<String, String>>,
) -> ProxyResponse {
    let result = proxy::fetch_json(
        &upstream,
        &SEARCH_ARTICLES,
        bearer_token(&jar).as_deref(),
        None,
        &params,
        None,
    )
    .await;

    match result {
        Ok(Value::Array(articles)) => {
            let summaries: Vec<Value> = articles
                .iter()
                .map(|article| {
                    serde_json::to_value(ArticleSummary::from_upstream(article))
                        .unwrap_or(Value::Null)
                })
                .collect();
            proxy::success_response(&SEARCH_ARTICLES, Value::Array(summaries))
        }
        Ok(other) => proxy::success_response(&SEARCH_ARTICLES, other),
        Err(error) => proxy::error_response(&SEARCH_ARTICLES, error),
    }
}

/// Submit an article to the upstream index
#[axum::debug_handler]
pub async fn create_article(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Json(payload): Json<CreateArticleRequest>,
) -> ProxyResponse {
    let body = serde_json::to_value(payload.into_upstream()).unwrap_or(Value::Null);
    proxy::forward(
        &upstream,
        &CREATE_ARTICLE,
        bearer_token(&jar).as_deref(),
        None,
        &HashMap::new(),
        Some(&body),
    )
    .await
}
