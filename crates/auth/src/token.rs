//! Bearer tokens and per-call token resolution.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use thiserror::Error;

use crate::claims::SessionClaims;

/// An opaque bearer token as handed out by the auth server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the claims from the token payload segment.
    ///
    /// This is an *unverified* read: the client needs the tenant id and
    /// expiry, and trusts the server to have signed the token. Signature
    /// errors surface as 401s on the next remote call, not here.
    pub fn decode_claims(&self) -> Result<SessionClaims, AuthError> {
        let payload = self
            .0
            .split('.')
            .nth(1)
            .ok_or_else(|| AuthError::Malformed("token is not a three-part JWT".to_string()))?;

        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| AuthError::Malformed(format!("payload segment: {}", e)))?;

        serde_json::from_slice(&bytes).map_err(|e| AuthError::Malformed(format!("claims: {}", e)))
    }
}

/// Resolves the bearer token for an outgoing request.
///
/// The client resolves this per call rather than capturing a token at
/// construction time, so a session refresh elsewhere is picked up
/// without rebuilding the client.
pub trait TokenSource: Send + Sync {
    fn access_token(&self) -> Result<AccessToken, AuthError>;
}

/// A fixed token, useful for tests and short-lived tooling.
#[derive(Debug, Clone)]
pub struct StaticTokenSource {
    token: AccessToken,
}

impl StaticTokenSource {
    pub fn new(token: AccessToken) -> Self {
        Self { token }
    }
}

impl TokenSource for StaticTokenSource {
    fn access_token(&self) -> Result<AccessToken, AuthError> {
        Ok(self.token.clone())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("no session token available")]
    MissingToken,

    #[error("malformed token: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tillpoint_core::TenantId;

    /// Build an unsigned JWT-shaped token around the given claims JSON.
    pub(crate) fn fake_jwt(claims: &serde_json::Value) -> AccessToken {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
        AccessToken::new(format!("{}.{}.sig", header, payload))
    }

    #[test]
    fn decode_claims_reads_tenant_and_window() {
        let tenant = TenantId::new();
        let token = fake_jwt(&serde_json::json!({
            "sub": "user-9",
            "tenant_id": tenant,
            "iat": 1_700_000_000,
            "exp": 1_700_003_600,
        }));

        let claims = token.decode_claims().unwrap();
        assert_eq!(claims.tenant_id, tenant);
        assert_eq!(claims.sub, "user-9");
    }

    #[test]
    fn non_jwt_token_is_malformed() {
        let err = AccessToken::new("opaque").decode_claims().unwrap_err();
        assert!(matches!(err, AuthError::Malformed(_)));
    }
}
