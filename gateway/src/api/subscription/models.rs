//! Data structures for subscription payloads.

use serde::{Deserialize, Serialize};

/// Subscription change request as sent by the dashboard
#[derive(Debug, Deserialize)]
pub struct SubscriptionRequest {
    /// Either `subscribe` or `unsubscribe`; anything else is rejected.
    pub action: String,
    pub email: String,
    #[serde(default)]
    pub token: Option<String>,
}

/// Subscribe body in the upstream field vocabulary
#[derive(Debug, Serialize)]
pub struct UpstreamSubscribe {
    pub email: String,
}

/// Unsubscribe body in the upstream field vocabulary
#[derive(Debug, Serialize)]
pub struct UpstreamUnsubscribe {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
