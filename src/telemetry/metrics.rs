//! Request metrics

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::time::Duration;

const REQUESTS_TOTAL: &str = "crypto_monitor_ticker_requests_total";
const REQUEST_DURATION_MS: &str = "crypto_monitor_ticker_request_duration_ms";
const LAST_PRICE: &str = "crypto_monitor_btc_last_price";

/// How a ticker request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// 2xx with a decodable body
    Success,
    /// Non-2xx status returned in the envelope
    HttpError,
    /// 2xx whose body did not match the schema
    DecodeError,
    /// No response received
    TransportError,
}

impl RequestOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestOutcome::Success => "success",
            RequestOutcome::HttpError => "http_error",
            RequestOutcome::DecodeError => "decode_error",
            RequestOutcome::TransportError => "transport_error",
        }
    }
}

/// Count a finished request and record its latency
pub fn record_request(outcome: RequestOutcome, duration: Duration) {
    metrics::counter!(REQUESTS_TOTAL, "outcome" => outcome.as_str()).increment(1);
    metrics::histogram!(REQUEST_DURATION_MS).record(duration.as_secs_f64() * 1000.0);

    tracing::trace!(
        outcome = outcome.as_str(),
        value_ms = duration.as_millis() as u64,
        "Recorded request"
    );
}

/// Publish the last traded BTC price
pub fn set_last_price(price: Decimal) {
    if let Some(value) = price.to_f64() {
        metrics::gauge!(LAST_PRICE).set(value);
    }
}
