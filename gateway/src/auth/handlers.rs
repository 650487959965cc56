//! Handler functions for authentication-related API endpoints.
//!
//! Login and register exchange browser credentials for an upstream token
//! pair and store it in HTTP-only cookies; `me` is a plain proxy read;
//! logout clears the cookies without an upstream call.

use crate::api::common::{ApiResponse, ProxyResponse, bad_request};
use crate::auth::cookies::{bearer_token, clear_session, store_session};
use crate::auth::models::*;
use crate::config::Config;
use crate::proxy::{self, RouteDescriptor, UpstreamClient};
use axum::http::{Method, StatusCode};
use axum::{
    extract::{Extension, Json},
    response::Json as ResponseJson,
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::{Value, json};
use std::collections::HashMap;
use validator::Validate;

static ME: RouteDescriptor = RouteDescriptor {
    name: "auth.me",
    method: Method::GET,
    upstream_path: "/auth/me",
    query: &[],
    expect_list: false,
    success_status: StatusCode::OK,
    success_message: None,
    failure_message: "Failed to fetch user",
};

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(config): Extension<Config>,
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> (CookieJar, ProxyResponse) {
    if payload.validate().is_err() {
        return (jar, bad_request("Missing credentials"));
    }

    // Upstream authentication expects an OAuth2-style form body.
    let response = upstream
        .request(Method::POST, "/auth/login")
        .form(&[
            ("username", payload.email.as_str()),
            ("password", payload.password.as_str()),
        ])
        .send()
        .await;

    let response = match response {
        Ok(response) => response,
        Err(error) => {
            tracing::error!("auth.login upstream call failed: {}", error);
            return (jar, internal_error());
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::info!("auth.login rejected upstream: {}", status);
        return (
            jar,
            (status, ResponseJson(ApiResponse::error("Invalid credentials"))),
        );
    }

    let tokens = match response.json::<UpstreamTokens>().await {
        Ok(tokens) => tokens,
        Err(error) => {
            tracing::error!("auth.login upstream response unparsable: {}", error);
            return (jar, internal_error());
        }
    };

    let jar = store_session(
        jar,
        tokens.access_token.clone(),
        tokens.refresh_token.clone(),
        config.secure_cookies,
    );
    let session = SessionData::from(tokens);

    (
        jar,
        (
            StatusCode::OK,
            ResponseJson(ApiResponse::ok(
                serde_json::to_value(&session).unwrap_or(Value::Null),
            )),
        ),
    )
}

/// Handle account registration request
#[axum::debug_handler]
pub async fn register(
    Extension(config): Extension<Config>,
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
    Json(payload): Json<RegisterRequest>,
) -> (CookieJar, ProxyResponse) {
    if payload.validate().is_err() {
        return (jar, bad_request("Missing fields"));
    }

    let body = json!({
        "email": payload.email,
        "full_name": payload.name,
        "password": payload.password,
    });

    let response = upstream
        .request(Method::POST, "/auth/register")
        .json(&body)
        .send()
        .await;

    let response = match response {
        Ok(response) => response,
        Err(error) => {
            tracing::error!("auth.register upstream call failed: {}", error);
            return (jar, internal_error());
        }
    };

    let status = response.status();
    if !status.is_success() {
        let detail = response
            .json::<Value>()
            .await
            .ok()
            .as_ref()
            .and_then(|body| body.get("detail"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| "Registration failed".to_string());
        tracing::info!("auth.register rejected upstream: {} {}", status, detail);
        return (jar, (status, ResponseJson(ApiResponse::error(detail))));
    }

    let tokens = match response.json::<UpstreamTokens>().await {
        Ok(tokens) => tokens,
        Err(error) => {
            tracing::error!("auth.register upstream response unparsable: {}", error);
            return (jar, internal_error());
        }
    };

    let jar = store_session(
        jar,
        tokens.access_token.clone(),
        tokens.refresh_token.clone(),
        config.secure_cookies,
    );
    let session = SessionData::from(tokens);

    (
        jar,
        (
            StatusCode::CREATED,
            ResponseJson(ApiResponse::success(
                serde_json::to_value(&session).unwrap_or(Value::Null),
                "Account created successfully",
            )),
        ),
    )
}

/// Get current user information via the upstream backend
#[axum::debug_handler]
pub async fn me(
    Extension(upstream): Extension<UpstreamClient>,
    jar: CookieJar,
) -> ProxyResponse {
    proxy::forward(
        &upstream,
        &ME,
        bearer_token(&jar).as_deref(),
        None,
        &HashMap::new(),
        None,
    )
    .await
}

/// Handle logout request by clearing the session cookies
#[axum::debug_handler]
pub async fn logout(
    Extension(config): Extension<Config>,
    jar: CookieJar,
) -> (CookieJar, ProxyResponse) {
    let jar = clear_session(jar, config.secure_cookies);
    (
        jar,
        (
            StatusCode::OK,
            ResponseJson(ApiResponse::message("Logged out successfully")),
        ),
    )
}

fn internal_error() -> ProxyResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ResponseJson(ApiResponse::error("Internal server error")),
    )
}
