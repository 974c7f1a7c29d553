//! `tillpoint-client` — the HTTP boundary of the Tillpoint client.
//!
//! Everything remote goes through [`ApiClient`]: one typed method per
//! serverless function, bearer auth resolved per call, a per-request
//! timeout from config, and a single deserialization schema per
//! endpoint. Call sites never see `serde_json::Value` or probe optional
//! fields; if the wire shape drifts, the call fails with
//! [`ApiError::Parse`] instead of silently picking a fallback field.

pub mod config;
pub mod dto;
pub mod endpoints;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::ApiError;
pub use http::ApiClient;
