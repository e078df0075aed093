//! HTTP transport
//!
//! Endpoints describe requests relative to a base URL; a transport resolves
//! them, performs the round-trip and hands back the raw response.

use super::ApiError;
use crate::config::ApiConfig;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode, Url};

/// A request relative to the transport's base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    /// Relative path, e.g. `api/BTC/ticker/`
    pub path: String,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }
}

/// Undecoded response as received from the wire
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Performs HTTP round-trips
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute one request; only transport faults are errors
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, ApiError>;
}

/// Transport backed by a pooled `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base_url: Url,
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport from API configuration
    pub fn with_config(config: &ApiConfig) -> Result<Self, ApiError> {
        if config.timeout_secs == 0 {
            return Err(ApiError::InvalidConfig(
                "timeout_secs must be non-zero".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Self::with_client(client, &config.base_url)
    }

    /// Create a transport around an existing client
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a relative path against the base URL
    pub fn resolve(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, ApiError> {
        let url = self.resolve(&request.path)?;

        tracing::debug!(method = %request.method, url = %url, "Sending request");

        let mut builder = self.client.request(request.method, url);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(status = %status, bytes = body.len(), "Received response");

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Parse a base URL, keeping its last path segment when joined
fn parse_base_url(base_url: &str) -> Result<Url, ApiError> {
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };

    let url = Url::parse(&normalized)
        .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl(format!(
            "{}: cannot be used as a base URL",
            base_url
        )));
    }

    Ok(url)
}
