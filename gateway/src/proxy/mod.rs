//! The authenticated upstream proxy.
//!
//! Every API route funnels through this module: one shared HTTP client, one
//! `forward` function that performs the single upstream call described by a
//! `RouteDescriptor` and translates the result into the response envelope.
//! Failures never propagate; they are converted to envelopes here.

use crate::api::common::{ApiResponse, ProxyResponse};
use crate::config::Config;
use crate::errors::{ProxyError, ProxyResult};
use anyhow::{Context, Result};
use axum::http::{StatusCode, header::CONTENT_TYPE};
use axum::response::Json;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

pub mod descriptor;

pub use descriptor::{QueryParam, RouteDescriptor};

/// Shared client for calls to the upstream backend.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Builds the shared client with the configured request timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_seconds))
            .build()
            .context("failed to build upstream HTTP client")?;

        Ok(UpstreamClient {
            client,
            base_url: config.backend_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Starts a request against an upstream path, relative to the base URL.
    pub fn request(&self, method: axum::http::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
    }
}

/// Performs the upstream call for a route and returns the parsed JSON body.
///
/// The bearer token, when present, is attached as an `Authorization` header;
/// when absent the header is omitted entirely. An empty 2xx body (204 on
/// deletes) parses to JSON `null`. List coercion is applied for routes that
/// expect arrays.
pub async fn fetch_json(
    upstream: &UpstreamClient,
    route: &RouteDescriptor,
    token: Option<&str>,
    path_param: Option<&str>,
    params: &HashMap<String, String>,
    body: Option<&Value>,
) -> ProxyResult<Value> {
    let mut request = upstream
        .request(route.method.clone(), &route.upstream_path(path_param))
        .header(CONTENT_TYPE, "application/json")
        .query(&route.upstream_query(params));

    if let Some(token) = token {
        request = request.bearer_auth(token);
    }
    if let Some(body) = body {
        request = request.json(body);
    }

    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let detail = response
            .json::<Value>()
            .await
            .ok()
            .as_ref()
            .and_then(|body| body.get("detail"))
            .and_then(Value::as_str)
            .map(str::to_string);
        return Err(ProxyError::rejected(status, detail));
    }

    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Ok(route.coerce(Value::Null));
    }

    let parsed = serde_json::from_slice::<Value>(&bytes)
        .map_err(|e| ProxyError::unparsable(e.to_string()))?;
    Ok(route.coerce(parsed))
}

/// Forwards a request upstream and translates the outcome into an envelope.
pub async fn forward(
    upstream: &UpstreamClient,
    route: &RouteDescriptor,
    token: Option<&str>,
    path_param: Option<&str>,
    params: &HashMap<String, String>,
    body: Option<&Value>,
) -> ProxyResponse {
    match fetch_json(upstream, route, token, path_param, params, body).await {
        Ok(data) => success_response(route, data),
        Err(error) => error_response(route, error),
    }
}

/// Builds the success envelope for a route's upstream payload.
pub fn success_response(route: &RouteDescriptor, data: Value) -> ProxyResponse {
    let envelope = match route.success_message {
        Some(message) => ApiResponse::success(data, message),
        None => ApiResponse::ok(data),
    };
    (route.success_status, Json(envelope))
}

/// Translates a proxy failure into an envelope.
///
/// Upstream rejections forward the upstream status and prefer its `detail`
/// message; transport and parse failures collapse to a logged 500.
pub fn error_response(route: &RouteDescriptor, error: ProxyError) -> ProxyResponse {
    match error {
        ProxyError::Rejected { status, detail } => {
            let message = detail.unwrap_or_else(|| route.failure_message.to_string());
            tracing::info!("{} rejected upstream: {} {}", route.name, status, message);
            (status, Json(ApiResponse::error(message)))
        }
        other => {
            tracing::error!("{} upstream call failed: {}", route.name, other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Internal server error")),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;

    static ROUTE: RouteDescriptor = RouteDescriptor {
        name: "test.route",
        method: Method::GET,
        upstream_path: "/things/",
        query: &[],
        expect_list: false,
        success_status: StatusCode::OK,
        success_message: None,
        failure_message: "Operation failed",
    };

    #[test]
    fn test_rejection_prefers_upstream_detail() {
        let (status, Json(envelope)) = error_response(
            &ROUTE,
            ProxyError::rejected(StatusCode::CONFLICT, Some("Already exists".to_string())),
        );
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(envelope.error.as_deref(), Some("Already exists"));
        assert!(!envelope.success);
    }

    #[test]
    fn test_rejection_without_detail_uses_route_message() {
        let (status, Json(envelope)) =
            error_response(&ROUTE, ProxyError::rejected(StatusCode::NOT_FOUND, None));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(envelope.error.as_deref(), Some("Operation failed"));
    }

    #[test]
    fn test_unparsable_body_collapses_to_internal_error() {
        let (status, Json(envelope)) =
            error_response(&ROUTE, ProxyError::unparsable("expected value"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope.error.as_deref(), Some("Internal server error"));
    }
}
