//! HTTP transport: auth, timeouts, and response decoding.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use tillpoint_auth::TokenSource;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Typed client for the remote function host.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    tokens: Arc<dyn TokenSource>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenSource>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            config,
            tokens,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn bearer(&self) -> Result<String, ApiError> {
        let token = self
            .tokens
            .access_token()
            .map_err(|_| ApiError::Unauthorized)?;
        Ok(token.as_str().to_string())
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let req = self
            .http
            .get(self.url(path))
            .query(query)
            .bearer_auth(self.bearer()?);
        Self::decode(req.send().await?).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = self
            .http
            .post(self.url(path))
            .json(body)
            .bearer_auth(self.bearer()?);
        Self::decode(req.send().await?).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(path))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        Self::check_status(resp).await.map(|_| ())
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let resp = Self::check_status(resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized);
        }

        let detail = resp.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %detail, "remote call failed");
        Err(ApiError::Api(status.as_u16(), detail))
    }
}
