//! Mercado Bitcoin HTTP API
//!
//! Endpoint calls return an [`ApiResponse`] envelope: non-2xx statuses are
//! data for the caller to inspect, while transport and decode faults are
//! [`ApiError`]s.

mod error;
mod mercado;
mod transport;

pub use error::ApiError;
pub use mercado::{MercadoBitcoinService, TICKER_PATH};
pub use transport::{HttpRequest, HttpTransport, RawResponse, ReqwestTransport};

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// HTTP status and headers plus the decoded body, if any
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    status: StatusCode,
    headers: HeaderMap,
    body: Option<T>,
    error_body: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Numeric HTTP status
    pub fn code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// True for 2xx statuses
    pub fn is_successful(&self) -> bool {
        self.status.is_success()
    }

    /// Decoded body of a successful response
    pub fn body(&self) -> Option<&T> {
        self.body.as_ref()
    }

    /// Raw body text of an unsuccessful response
    pub fn error_body(&self) -> Option<&str> {
        self.error_body.as_deref()
    }

    pub fn into_body(self) -> Option<T> {
        self.body
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Build an envelope from a raw response
    ///
    /// 2xx bodies are decoded, except 204/205 which carry no content.
    /// Other statuses keep the body as lossy UTF-8 text.
    pub fn from_raw(raw: RawResponse) -> Result<Self, ApiError> {
        let RawResponse {
            status,
            headers,
            body,
        } = raw;

        if !status.is_success() {
            return Ok(Self {
                status,
                headers,
                body: None,
                error_body: Some(String::from_utf8_lossy(&body).into_owned()),
            });
        }

        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return Ok(Self {
                status,
                headers,
                body: None,
                error_body: None,
            });
        }

        let parsed =
            serde_json::from_slice(&body).map_err(|source| ApiError::Decode { status, source })?;

        Ok(Self {
            status,
            headers,
            body: Some(parsed),
            error_body: None,
        })
    }
}
