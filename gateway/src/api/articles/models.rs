//! Data structures for article payloads.
//!
//! Upstream articles carry the full editorial record; the dashboard only
//! renders a compact summary card. The reshaping from one to the other
//! lives here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Article submission payload as sent by the dashboard
#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Article body in the upstream field vocabulary
#[derive(Debug, Serialize)]
pub struct UpstreamArticle {
    pub title: String,
    pub body: String,
    pub summary: String,
    pub source_url: Option<String>,
}

impl CreateArticleRequest {
    pub fn into_upstream(self) -> UpstreamArticle {
        UpstreamArticle {
            title: self.title,
            body: self.description.unwrap_or_default(),
            summary: self.snippet.unwrap_or_default(),
            source_url: self.link,
        }
    }
}

/// Compact article card rendered by the dashboard search results
#[derive(Debug, Serialize)]
pub struct ArticleSummary {
    pub id: Value,
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub source: &'static str,
}

impl ArticleSummary {
    /// Reshapes one upstream article record into a summary card.
    ///
    /// The snippet prefers the upstream summary and falls back to the first
    /// 100 characters of the body; the link falls back to `#` like the
    /// dashboard expects for articles without a source URL.
    pub fn from_upstream(article: &Value) -> Self {
        let snippet = article
            .get("summary")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| {
                article
                    .get("body")
                    .and_then(Value::as_str)
                    .map(|body| body.chars().take(100).collect())
            })
            .unwrap_or_default();

        ArticleSummary {
            id: article.get("id").cloned().unwrap_or(Value::Null),
            title: article
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            link: article
                .get("source_url")
                .and_then(Value::as_str)
                .unwrap_or("#")
                .to_string(),
            snippet,
            source: "Backend",
        }
    }
}
