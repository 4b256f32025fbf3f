#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! HTTP client for the criminal activity analysis API.
//!
//! Wraps a [`reqwest::Client`] with the headers and timeout the API
//! expects. Every request carries the `X-API-KEY` and `Accept` headers and
//! is attempted exactly once — retries are the caller's concern.
//!
//! # Environment Variables
//!
//! | Variable | Required | Description |
//! |---|---|---|
//! | `CRIMINAL_ANALYSIS_API_KEY` | Yes | API key for authentication |
//! | `CRIMINAL_ANALYSIS_API_URL` | No | Base URL (default `http://thomas:11004`) |

pub mod config;

use std::time::Duration;

use thiserror::Error;

pub use config::{ApiConfig, ConfigError, DEFAULT_BASE_URL, ENV_API_KEY, ENV_API_URL};

/// Per-request timeout applied to every API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from API requests.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (DNS, connection refused, timeout).
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text, as returned by the API.
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("Invalid JSON response: {message}")]
    Decode {
        /// Description of the decoding failure.
        message: String,
    },
}

/// Client for the criminal activity analysis API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    /// Returns the base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Issues a GET request and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API answers with a
    /// non-2xx status, or the body is not valid JSON.
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value, ClientError> {
        let url = format!("{}{path}", self.config.base_url);
        log::debug!("GET {url}");
        let request = self.http.get(&url);
        self.execute(request).await
    }

    /// Issues a POST request with a raw string body and decodes the JSON
    /// response.
    ///
    /// The API takes the body verbatim (an address string), so the
    /// `Content-Type` header is set explicitly rather than via a serialized
    /// payload.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API answers with a
    /// non-2xx status, or the body is not valid JSON.
    pub async fn post_json(
        &self,
        path: &str,
        body: String,
    ) -> Result<serde_json::Value, ClientError> {
        let url = format!("{}{path}", self.config.base_url);
        log::debug!("POST {url}");
        let request = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body);
        self.execute(request).await
    }

    /// Attaches the standard headers, sends the request, and maps the
    /// response into a JSON value or a [`ClientError`].
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<serde_json::Value, ClientError> {
        let resp = request
            .header("X-API-KEY", self.config.api_key.as_str())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Decode {
            message: e.to_string(),
        })
    }
}
