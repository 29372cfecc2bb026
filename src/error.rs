//! OneFootball Network error types

use std::time::Duration;

use thiserror::Error;

/// OneFootball Network API and transport errors
#[derive(Error, Debug)]
pub enum OnefootballError {
    /// Article payload rejected, locally or by the server (HTTP 400)
    #[error("validation failed: {0}")]
    Validation(String),

    /// Credentials missing or rejected (HTTP 401/403)
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Referenced article does not exist (HTTP 404)
    #[error("article not found: {0}")]
    NotFound(String),

    /// An article with the same external ID already exists (HTTP 409)
    #[error("duplicate article: {0}")]
    Conflict(String),

    /// Publishing quota exceeded (HTTP 429)
    #[error("rate limited: {message}")]
    RateLimit {
        /// Error message from server
        message: String,
        /// Server-supplied Retry-After hint, if present
        retry_after: Option<Duration>,
    },

    /// Remote API failure (HTTP 5xx)
    #[error("server error {status}: {message}")]
    Server {
        /// HTTP status code (500-599)
        status: u16,
        /// Error message from server
        message: String,
    },

    /// Status code outside the documented API contract
    #[error("unexpected response {status}: {message}")]
    Unexpected {
        /// HTTP status code
        status: u16,
        /// Error message from server
        message: String,
    },

    /// Response body could not be decoded
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Request timed out
    #[error("request timeout")]
    Timeout,

    /// Transport-level failure (DNS, TLS, connect, reset)
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
}

impl OnefootballError {
    /// Whether a bounded retry could help (transient transport or quota
    /// conditions). Server-reported rejections are never retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            OnefootballError::Network(_)
                | OnefootballError::Timeout
                | OnefootballError::RateLimit { .. }
        )
    }

    /// Server-supplied Retry-After hint, if this is a rate-limit error
    /// carrying one.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            OnefootballError::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OnefootballError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OnefootballError::Timeout
        } else if err.is_decode() {
            OnefootballError::InvalidResponse(err.to_string())
        } else {
            OnefootballError::Network(err)
        }
    }
}

/// Result type alias using OnefootballError
pub type Result<T> = std::result::Result<T, OnefootballError>;
