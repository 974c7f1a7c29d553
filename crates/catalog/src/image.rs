//! Cache for signed variant image URLs.
//!
//! Signed URLs expire server-side, so the cache's TTL is the URL's own
//! `expires_at` minus a safety margin; an entry is never served so
//! close to expiry that the browser fetch would 403. The cache is an
//! explicit object owned by the caller, not module-level state, and
//! supports forced refresh when an image is replaced.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{Duration, Utc};

use tillpoint_client::dto::SignedImageUrl;
use tillpoint_client::{ApiClient, ApiError};
use tillpoint_core::VariantId;

/// Margin subtracted from the signed expiry when judging freshness.
const EXPIRY_MARGIN_SECS: i64 = 30;

#[derive(Debug, Default)]
pub struct ImageUrlCache {
    entries: Mutex<HashMap<VariantId, SignedImageUrl>>,
}

impl ImageUrlCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a usable signed URL, fetching a new one when the cached entry
    /// is missing, near expiry, or `force_refresh` is set.
    pub async fn get(
        &self,
        client: &ApiClient,
        variant_id: VariantId,
        force_refresh: bool,
    ) -> Result<SignedImageUrl, ApiError> {
        if !force_refresh {
            let entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
            if let Some(entry) = entries.get(&variant_id) {
                let fresh_until = entry.expires_at - Duration::seconds(EXPIRY_MARGIN_SECS);
                if Utc::now() < fresh_until {
                    return Ok(entry.clone());
                }
                tracing::debug!(%variant_id, "signed image URL near expiry, refetching");
            }
        }

        let signed = client.variant_image_url(variant_id).await?;
        self.entries
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .insert(variant_id, signed.clone());
        Ok(signed)
    }

    /// Drop one entry (e.g. after an image upload for that variant).
    pub fn invalidate(&self, variant_id: VariantId) {
        self.entries
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .remove(&variant_id);
    }

    /// Drop everything (e.g. on logout).
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clear();
    }
}
