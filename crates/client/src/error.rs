//! Remote-call error taxonomy.
//!
//! Deliberately coarse: the UI shows one short line per failure and the
//! user retried by re-triggering the action, so the client distinguishes
//! only what changes that line. There is no retry policy here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never reached the server (connect failure, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("API error ({0}): {1}")]
    Api(u16, String),

    /// The session token is missing, expired, or rejected.
    #[error("unauthorized")]
    Unauthorized,

    /// The response did not match the expected schema.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// One-line presentation string for inline banners and toasts.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Network error. Check your connection and try again.".to_string()
            }
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            ApiError::Api(_, detail) if !detail.is_empty() => {
                format!("The server rejected the request: {}", detail)
            }
            ApiError::Api(status, _) => {
                format!("The server rejected the request (status {}).", status)
            }
            ApiError::Parse(_) => "Unexpected response from the server.".to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_renders_a_user_message() {
        for err in [
            ApiError::Network("dns".to_string()),
            ApiError::Api(500, String::new()),
            ApiError::Api(422, "bad store".to_string()),
            ApiError::Unauthorized,
            ApiError::Parse("missing field".to_string()),
        ] {
            assert!(!err.user_message().is_empty());
        }
    }
}
