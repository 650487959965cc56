//! Data structures for schedule entry payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schedule entry creation payload as sent by the dashboard
#[derive(Debug, Deserialize)]
pub struct CreateScheduleEntryRequest {
    pub newsletter_id: Value,
    pub scheduled_for: String,
    #[serde(default)]
    pub cron_expression: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Schedule entry body in the upstream field vocabulary
#[derive(Debug, Serialize)]
pub struct UpstreamScheduleEntry {
    pub newsletter_id: Value,
    pub scheduled_for: String,
    pub cron_expression: Option<String>,
    pub status: String,
}

impl CreateScheduleEntryRequest {
    /// Maps the entry for the upstream scheduler; new entries default to
    /// the `pending` status.
    pub fn into_upstream(self) -> UpstreamScheduleEntry {
        UpstreamScheduleEntry {
            newsletter_id: self.newsletter_id,
            scheduled_for: self.scheduled_for,
            cron_expression: self.cron_expression,
            status: self.status.unwrap_or_else(|| "pending".to_string()),
        }
    }
}

/// Partial schedule entry update; only fields the dashboard set are forwarded
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateScheduleEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
