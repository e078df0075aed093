//! Mercado Bitcoin public data endpoints

use super::{ApiError, ApiResponse, HttpRequest, HttpTransport, ReqwestTransport};
use crate::config::ApiConfig;
use crate::telemetry::{self, RequestOutcome};
use crate::ticker::TickerResponse;
use std::time::Instant;

/// Relative path of the BTC ticker endpoint
pub const TICKER_PATH: &str = "api/BTC/ticker/";

/// Client for the Mercado Bitcoin public API
///
/// Holds no mutable state; calls may run concurrently through a shared
/// reference.
#[derive(Debug, Clone)]
pub struct MercadoBitcoinService<T = ReqwestTransport> {
    transport: T,
}

impl MercadoBitcoinService<ReqwestTransport> {
    /// Create a service backed by `reqwest`
    pub fn with_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::new(ReqwestTransport::with_config(config)?))
    }
}

impl<T: HttpTransport> MercadoBitcoinService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET api/BTC/ticker/`
    pub async fn get_ticker(&self) -> Result<ApiResponse<TickerResponse>, ApiError> {
        let started = Instant::now();
        let result = self.transport.execute(HttpRequest::get(TICKER_PATH)).await;

        let outcome = match &result {
            Ok(raw) if raw.status.is_success() => RequestOutcome::Success,
            Ok(_) => RequestOutcome::HttpError,
            Err(_) => RequestOutcome::TransportError,
        };

        let response = result.and_then(ApiResponse::<TickerResponse>::from_raw);
        let outcome = match &response {
            Err(e) if e.is_decode() => RequestOutcome::DecodeError,
            _ => outcome,
        };
        telemetry::record_request(outcome, started.elapsed());

        match &response {
            Ok(envelope) if envelope.is_successful() => {
                if let Some(body) = envelope.body() {
                    telemetry::set_last_price(body.ticker.last);
                    tracing::debug!(last = %body.ticker.last, "Ticker received");
                }
            }
            Ok(envelope) => {
                tracing::warn!(status = %envelope.status(), "Ticker request rejected");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ticker request failed");
            }
        }

        response
    }
}
