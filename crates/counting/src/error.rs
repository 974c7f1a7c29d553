//! Workflow error type: remote failures plus local guard violations.

use thiserror::Error;

use tillpoint_client::ApiError;
use tillpoint_core::DomainError;

#[derive(Debug, Error)]
pub enum CountError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl CountError {
    /// One-line presentation string, matching the UI's error banners.
    pub fn user_message(&self) -> String {
        match self {
            CountError::Api(err) => err.user_message(),
            CountError::Domain(err) => err.to_string(),
        }
    }
}
