//! API response envelope and status-code mapping

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{OnefootballError, Result};

/// HTTP status codes in the API contract
#[allow(dead_code)]
pub mod codes {
    /// Request succeeded
    pub const OK: u16 = 200;
    /// Article created
    pub const CREATED: u16 = 201;
    /// Article deleted
    pub const NO_CONTENT: u16 = 204;
    /// Payload rejected by server-side validation
    pub const BAD_REQUEST: u16 = 400;
    /// Credentials missing or invalid
    pub const UNAUTHORIZED: u16 = 401;
    /// Credentials valid but operation not permitted
    pub const FORBIDDEN: u16 = 403;
    /// Referenced article does not exist
    pub const NOT_FOUND: u16 = 404;
    /// External ID already taken
    pub const CONFLICT: u16 = 409;
    /// Publishing quota exceeded
    pub const TOO_MANY_REQUESTS: u16 = 429;
}

/// An API response distilled to what the client needs: status, the
/// Retry-After hint when the server sent one, and the raw body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Parsed Retry-After header (seconds form), if present
    pub retry_after: Option<Duration>,
    /// Raw response body
    pub body: String,
}

impl ApiResponse {
    /// Check if the response indicates success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| OnefootballError::InvalidResponse(e.to_string()))
    }

    /// Map a non-success response to the matching domain error
    ///
    /// `subject` identifies what the request referred to (usually an
    /// external ID) and is used for the not-found and conflict variants.
    pub fn into_error(self, subject: &str) -> OnefootballError {
        let message = self.error_message();
        match self.status {
            codes::BAD_REQUEST => OnefootballError::Validation(message),
            codes::UNAUTHORIZED | codes::FORBIDDEN => OnefootballError::Auth(message),
            codes::NOT_FOUND => OnefootballError::NotFound(subject.to_string()),
            codes::CONFLICT => OnefootballError::Conflict(subject.to_string()),
            codes::TOO_MANY_REQUESTS => OnefootballError::RateLimit {
                message,
                retry_after: self.retry_after,
            },
            status if (500..600).contains(&status) => OnefootballError::Server { status, message },
            status => OnefootballError::Unexpected { status, message },
        }
    }

    /// Best-effort error detail: the JSON `message` field when the body
    /// carries one, the raw body otherwise.
    fn error_message(&self) -> String {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&self.body) {
            if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
                return message.to_string();
            }
        }
        let body = self.body.trim();
        if body.is_empty() {
            format!("HTTP {}", self.status)
        } else {
            body.to_string()
        }
    }
}
