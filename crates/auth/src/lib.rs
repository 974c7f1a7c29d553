//! `tillpoint-auth` — session tokens on the client side.
//!
//! The server issues and verifies tokens; this crate only carries them,
//! reads their claims (unverified payload decode), and resolves the
//! tenant id with an explicit, injectable cache.

pub mod claims;
pub mod tenant;
pub mod token;

pub use claims::{SessionClaims, TokenValidationError, validate_claims};
pub use tenant::TenantResolver;
pub use token::{AccessToken, AuthError, StaticTokenSource, TokenSource};
