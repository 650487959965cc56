//! Shared response envelope for API handlers.
//!
//! Every route returns the same normalized wrapper so the browser-side
//! data-fetching hook can treat success and failure uniformly. Includes:
//! - Standard `ApiResponse` envelope
//! - Constructors for success and error responses
//! - The common handler return type pairing an envelope with a status code
//!
//! # Response Format
//! All responses are JSON objects containing:
//! - `success`: whether the request succeeded
//! - `data`: the payload (present on success)
//! - `message`: optional human-readable note (present on some successes)
//! - `error`: human-readable failure description (present on failure)

use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard API response wrapper for all endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Indicates if the request was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message (present on some successes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Handler return type: an envelope paired with the HTTP status to send
pub type ProxyResponse = (StatusCode, Json<ApiResponse<Value>>);

impl<T> ApiResponse<T> {
    /// Create a successful response with a message
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
        }
    }

    /// Create a successful response without a message
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// Create a successful response carrying only a message
    pub fn message(message: impl Into<String>) -> ApiResponse<T> {
        ApiResponse {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> ApiResponse<T> {
        ApiResponse {
            success: false,
            data: None,
            message: None,
            error: Some(message.into()),
        }
    }
}

/// Helper for rejecting malformed inbound requests before any upstream call
pub fn bad_request(message: impl Into<String>) -> ProxyResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error(message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success(serde_json::json!({"id": 1}), "Created");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["id"], 1);
        assert_eq!(json["message"], "Created");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_ok_envelope_omits_message() {
        let response = ApiResponse::ok(serde_json::json!([1, 2, 3]));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert!(json.get("message").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_envelope_shape() {
        let response = ApiResponse::<Value>::error("Internal server error");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Internal server error");
        assert!(json.get("data").is_none());
    }
}
