//! Data structures for authentication-related entities.
//!
//! This module defines the inbound session payloads, the token pair shape
//! returned by the upstream backend, and the session data echoed back to the
//! browser after login or registration.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request payload
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token pair issued by the upstream backend on login/register
#[derive(Debug, Deserialize)]
pub struct UpstreamTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Upstream user record, relayed untouched.
    #[serde(default)]
    pub user: Value,
}

/// Session data returned to the browser alongside the cookies
#[derive(Debug, Serialize)]
pub struct SessionData {
    pub token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
    pub user: Value,
}

impl From<UpstreamTokens> for SessionData {
    fn from(tokens: UpstreamTokens) -> Self {
        SessionData {
            token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            user: tokens.user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_data_field_names() {
        let tokens = UpstreamTokens {
            access_token: "acc".to_string(),
            refresh_token: "ref".to_string(),
            user: json!({"email": "a@b.c"}),
        };
        let session = SessionData::from(tokens);
        let json = serde_json::to_value(&session).unwrap();

        assert_eq!(json["token"], "acc");
        assert_eq!(json["refreshToken"], "ref");
        assert_eq!(json["user"]["email"], "a@b.c");
    }
}
