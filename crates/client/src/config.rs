//! Client configuration from the environment.

use std::time::Duration;

/// Tunables for the remote API client and the workflows on top of it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the remote function host, without trailing slash.
    pub base_url: String,

    /// Per-request timeout.
    pub request_timeout: Duration,

    /// Server-side page size for all paged listings.
    pub page_size: u32,

    /// Inactivity window before a search query is actually issued.
    pub debounce: Duration,

    /// Pause between sequential adjustment calls, to bound load on the
    /// remote endpoint. Zero disables pacing.
    pub adjust_pacing: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            request_timeout: Duration::from_secs(15),
            page_size: 50,
            debounce: Duration::from_millis(500),
            adjust_pacing: Duration::from_millis(50),
        }
    }

    /// Read configuration from `TILLPOINT_*` environment variables,
    /// falling back to logged dev defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var("TILLPOINT_API_URL").unwrap_or_else(|_| {
            tracing::warn!("TILLPOINT_API_URL not set; using local dev default");
            "http://localhost:8080".to_string()
        });

        let mut config = Self::new(base_url);
        if let Some(ms) = env_u64("TILLPOINT_TIMEOUT_MS") {
            config.request_timeout = Duration::from_millis(ms);
        }
        if let Some(n) = env_u64("TILLPOINT_PAGE_SIZE") {
            config.page_size = n.min(u32::MAX as u64) as u32;
        }
        if let Some(ms) = env_u64("TILLPOINT_DEBOUNCE_MS") {
            config.debounce = Duration::from_millis(ms);
        }
        if let Some(ms) = env_u64("TILLPOINT_ADJUST_PACING_MS") {
            config.adjust_pacing = Duration::from_millis(ms);
        }
        config
    }
}

fn env_u64(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("{} is not a number ({:?}); ignoring", key, raw);
            None
        }
    }
}
