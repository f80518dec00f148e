//! HTTP transport for prepared requests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::{CcexError, Result};
use crate::request::PreparedRequest;

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "CCEX_API_WRAPPER";

/// Raw HTTP answer, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Sends a prepared request and hands back the raw response.
///
/// Implementations must not retry and must report every network failure as
/// [`CcexError::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse>;
}

/// [`Transport`] backed by one reusable `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with its own connection pool.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CcexError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Create a transport around a custom reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse> {
        let response = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone())
            .send()
            .await
            .map_err(|e| CcexError::transport(request.url.path(), e.without_url()))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| CcexError::transport(request.url.path(), e.without_url()))?;

        debug!(status = %status, bytes = body.len(), "Received C-CEX response");

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
