//! Data structures for newsletter payloads.
//!
//! The dashboard's event-style vocabulary (`eventName`, `description`) is
//! remapped here into the upstream backend's newsletter fields. Mapping is
//! the only transformation this layer performs; validation of the resulting
//! newsletter is upstream's responsibility.

use serde::{Deserialize, Serialize};

/// Newsletter creation payload as sent by the dashboard
#[derive(Debug, Deserialize)]
pub struct CreateNewsletterRequest {
    #[serde(default, rename = "eventName")]
    pub event_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub template_id: Option<i64>,
}

/// Newsletter creation body in the upstream field vocabulary
#[derive(Debug, Serialize)]
pub struct UpstreamNewsletter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub subject: String,
    pub content_html: String,
    pub content_text: String,
    /// Always serialized, as an explicit `null` when no template was picked.
    pub template_id: Option<i64>,
}

impl CreateNewsletterRequest {
    /// Remaps the dashboard payload into the upstream newsletter shape.
    ///
    /// `eventName` wins over `title`; the subject mirrors the title and
    /// falls back to "Untitled"; the single description field feeds both
    /// content variants.
    pub fn into_upstream(self) -> UpstreamNewsletter {
        let title = self
            .event_name
            .filter(|value| !value.is_empty())
            .or(self.title.filter(|value| !value.is_empty()));
        let subject = title.clone().unwrap_or_else(|| "Untitled".to_string());
        let content = self.description.unwrap_or_default();

        UpstreamNewsletter {
            title,
            subject,
            content_html: content.clone(),
            content_text: content,
            template_id: self.template_id,
        }
    }
}

/// Partial newsletter update; only fields the dashboard set are forwarded
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateNewsletterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<String>,
}
