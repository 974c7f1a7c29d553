//! Sales workflow errors.

use thiserror::Error;

use tillpoint_client::ApiError;
use tillpoint_core::DomainError;

#[derive(Debug, Error)]
pub enum SalesError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl SalesError {
    pub fn user_message(&self) -> String {
        match self {
            SalesError::Api(err) => err.user_message(),
            SalesError::Domain(err) => err.to_string(),
        }
    }

    /// True when the failure is a connectivity problem worth falling
    /// back to local storage for (drafts).
    pub fn is_network(&self) -> bool {
        matches!(self, SalesError::Api(ApiError::Network(_)))
    }
}
