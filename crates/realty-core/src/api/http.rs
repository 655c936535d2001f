//! reqwest-backed [`Transport`].
//!
//! reqwest works on both native and WASM targets:
//! - Native: hyper with rustls for HTTPS
//! - WASM: the browser `fetch()` API
//!
//! No request timeout is configured; a hung request keeps its operation
//! pending until the connection gives up.

use super::{ApiRequest, Method, RawResponse, Transport};
use crate::error::ApiError;
use async_trait::async_trait;
use tracing::{debug, error};

/// Sends [`ApiRequest`]s to `base_url` over HTTP.
///
/// `reqwest::Client` pools connections internally and is cheap to clone, so
/// one transport is shared by every panel.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport rooted at `base_url` (e.g. `http://localhost:7070/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a request path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let url = self.url_for(&request.path);
        debug!("{} {}", request.method, url);

        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        // `.json()` also sets Content-Type: application/json
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| {
            error!("{} {} failed: {}", request.method, url, e);
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response body: {}", e)))?;

        debug!("{} {} -> {}", request.method, url, status);
        Ok(RawResponse { status, body })
    }
}
