//! Handler functions for subscription endpoints.
//!
//! Reads serve the last known snapshot from the injected store; writes
//! dispatch to the upstream subscribe/unsubscribe endpoints and record the
//! outcome in the snapshot.

use crate::api::common::{ApiResponse, ProxyResponse, bad_request};
use crate::api::subscription::models::{
    SubscriptionRequest, UpstreamSubscribe, UpstreamUnsubscribe,
};
use crate::auth::cookies::bearer_token;
use crate::proxy::{self, RouteDescriptor, UpstreamClient};
use crate::repositories::subscription_repository::SubscriptionStore;
use axum::extract::{Extension, Json};
use axum::http::{Method, StatusCode};
use axum::response::Json as ResponseJson;
use axum_extra::extract::cookie::CookieJar;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

static SUBSCRIBE: RouteDescriptor = RouteDescriptor {
    name: "subscription.subscribe",
    method: Method::POST,
    upstream_path: "/subscription/subscribe",
    query: &[],
    expect_list: false,
    success_status: StatusCode::CREATED,
    success_message: Some("Subscribed successfully"),
    failure_message: "Failed to subscribe",
};

static UNSUBSCRIBE: RouteDescriptor = RouteDescriptor {
    name: "subscription.unsubscribe",
    method: Method::POST,
    upstream_path: "/subscription/unsubscribe",
    query: &[],
    expect_list: false,
    success_status: StatusCode::OK,
    success_message: Some("Unsubscribed successfully"),
    failure_message: "Failed to unsubscribe",
};

/// Read the current subscription snapshot
#[axum::debug_handler]
pub async fn get_subscription(
    Extension(store): Extension<Arc<dyn SubscriptionStore>>,
) -> ProxyResponse {
    let snapshot = store.get().await;
    (
        StatusCode::OK,
        ResponseJson(ApiResponse::ok(
            serde_json::to_value(snapshot).unwrap_or(Value::Null),
        )),
    )
}

/// Subscribe or unsubscribe via the upstream backend
#[axum::debug_handler]
pub async fn change_subscription(
    Extension(upstream): Extension<UpstreamClient>,
    Extension(store): Extension<Arc<dyn SubscriptionStore>>,
    jar: CookieJar,
    Json(payload): Json<SubscriptionRequest>,
) -> ProxyResponse {
    let (route, body, subscribed) = match payload.action.as_str() {
        "subscribe" => {
            let body = serde_json::to_value(UpstreamSubscribe {
                email: payload.email,
            })
            .unwrap_or(Value::Null);
            (&SUBSCRIBE, body, true)
        }
        "unsubscribe" => {
            let body = serde_json::to_value(UpstreamUnsubscribe {
                email: payload.email,
                token: payload.token,
            })
            .unwrap_or(Value::Null);
            (&UNSUBSCRIBE, body, false)
        }
        _ => return bad_request("Unknown subscription action"),
    };

    let result = proxy::fetch_json(
        &upstream,
        route,
        bearer_token(&jar).as_deref(),
        None,
        &HashMap::new(),
        Some(&body),
    )
    .await;

    match result {
        Ok(data) => {
            store.set_subscribed(subscribed).await;
            proxy::success_response(route, data)
        }
        Err(error) => proxy::error_response(route, error),
    }
}
