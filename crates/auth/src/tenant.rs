//! Tenant resolution with an explicit, injectable cache.
//!
//! The tenant id is derived from the session token on every session, but
//! decoding the payload for each call is wasted work, so the resolver
//! memoizes it. Unlike a module-level singleton, this cache is owned by
//! whoever constructs the resolver, carries a TTL, and can be refreshed
//! explicitly when the session changes.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tillpoint_core::TenantId;

use crate::token::{AuthError, TokenSource};

/// Default cache lifetime. Shorter than any sane token lifetime, so a
/// re-login is picked up within a minute even without `force_refresh`.
pub const DEFAULT_TENANT_TTL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy)]
struct CachedTenant {
    tenant_id: TenantId,
    resolved_at: Instant,
}

/// Resolves and caches the tenant id for the current session.
pub struct TenantResolver {
    tokens: Arc<dyn TokenSource>,
    ttl: Duration,
    cached: Mutex<Option<CachedTenant>>,
}

impl TenantResolver {
    pub fn new(tokens: Arc<dyn TokenSource>) -> Self {
        Self::with_ttl(tokens, DEFAULT_TENANT_TTL)
    }

    pub fn with_ttl(tokens: Arc<dyn TokenSource>, ttl: Duration) -> Self {
        Self {
            tokens,
            ttl,
            cached: Mutex::new(None),
        }
    }

    /// Resolve the tenant id, reusing the cached value while it is fresh.
    ///
    /// `force_refresh` bypasses the cache, for callers that know the
    /// session just changed (login, tenant switch).
    pub fn tenant_id(&self, force_refresh: bool) -> Result<TenantId, AuthError> {
        let mut cached = self.cached.lock().unwrap_or_else(|p| p.into_inner());

        if !force_refresh {
            if let Some(entry) = *cached {
                if entry.resolved_at.elapsed() < self.ttl {
                    return Ok(entry.tenant_id);
                }
                tracing::debug!("tenant cache expired, re-decoding token");
            }
        }

        let token = self.tokens.access_token()?;
        let claims = token.decode_claims()?;

        *cached = Some(CachedTenant {
            tenant_id: claims.tenant_id,
            resolved_at: Instant::now(),
        });

        Ok(claims.tenant_id)
    }

    /// Drop the cached tenant, forcing the next call to decode again.
    pub fn invalidate(&self) {
        *self.cached.lock().unwrap_or_else(|p| p.into_inner()) = None;
    }
}
