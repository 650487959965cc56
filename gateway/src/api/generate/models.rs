//! Data structures for the generation trigger payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generation request as sent by the dashboard; every field is optional
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub template_id: Option<Value>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub num_articles: Option<u32>,
    #[serde(default)]
    pub include_summaries: Option<bool>,
}

/// Generation body in the upstream field vocabulary, defaults applied
#[derive(Debug, Serialize)]
pub struct UpstreamGenerate {
    pub template_id: Option<Value>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub num_articles: u32,
    pub include_summaries: bool,
}

impl GenerateRequest {
    pub fn into_upstream(self) -> UpstreamGenerate {
        UpstreamGenerate {
            template_id: self.template_id,
            categories: self.categories.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            num_articles: self.num_articles.unwrap_or(5),
            include_summaries: self.include_summaries.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_applied_when_fields_unset() {
        let request: GenerateRequest = serde_json::from_value(json!({})).unwrap();
        let body = serde_json::to_value(request.into_upstream()).unwrap();

        assert_eq!(
            body,
            json!({
                "template_id": null,
                "categories": [],
                "tags": [],
                "num_articles": 5,
                "include_summaries": false,
            })
        );
    }

    #[test]
    fn test_explicit_fields_forwarded() {
        let request: GenerateRequest = serde_json::from_value(json!({
            "template_id": "t1",
            "tags": ["AI"],
            "num_articles": 3,
        }))
        .unwrap();
        let body = serde_json::to_value(request.into_upstream()).unwrap();

        assert_eq!(body["template_id"], "t1");
        assert_eq!(body["tags"], json!(["AI"]));
        assert_eq!(body["num_articles"], 3);
    }
}
