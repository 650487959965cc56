//! Global application error types and handlers.
//!
//! This module defines the failure taxonomy for upstream proxy calls and
//! provides mechanisms for consistent error handling across route handlers.

use axum::http::StatusCode;
use thiserror::Error;

/// Represents errors that can occur while relaying a request upstream.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The upstream could not be reached at all (connect failure, timeout).
    #[error("Upstream unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),
    /// The upstream answered but its body was not valid JSON.
    #[error("Upstream response unparsable: {0}")]
    Unparsable(String),
    /// The upstream rejected the request with a non-2xx status.
    #[error("Upstream rejected request with status {status}")]
    Rejected {
        status: StatusCode,
        /// Message extracted from the upstream error body's `detail` field.
        detail: Option<String>,
    },
}

pub type ProxyResult<T> = Result<T, ProxyError>;

impl ProxyError {
    pub fn unparsable(message: impl Into<String>) -> Self {
        Self::Unparsable(message.into())
    }

    pub fn rejected(status: StatusCode, detail: Option<String>) -> Self {
        Self::Rejected { status, detail }
    }
}
