//! Data structures for template payloads.
//!
//! Template fields share their names with the upstream backend; the DTOs
//! exist to allowlist the forwarded fields rather than to rename them.

use serde::{Deserialize, Serialize};

/// Template creation payload
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateTemplateRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_content: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// Partial template update; only fields the dashboard set are forwarded
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTemplateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}
