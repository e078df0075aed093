//! Ticker types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `GET api/BTC/ticker/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerResponse {
    pub ticker: Ticker,
}

/// Market snapshot for BTC quoted in BRL
///
/// Prices arrive as decimal strings; plain JSON numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    /// Highest trade price in the last 24h
    pub high: Decimal,
    /// Lowest trade price in the last 24h
    pub low: Decimal,
    /// Traded volume in the last 24h (BTC)
    pub vol: Decimal,
    /// Last trade price
    pub last: Decimal,
    /// Best bid
    pub buy: Decimal,
    /// Best ask
    pub sell: Decimal,
    /// First trade price of the 24h window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<Decimal>,
    /// Snapshot time (unix seconds on the wire)
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,
}

impl Ticker {
    /// Ask minus bid
    pub fn spread(&self) -> Decimal {
        self.sell - self.buy
    }

    /// Percentage change of `last` against `open`
    pub fn change_pct(&self) -> Option<Decimal> {
        let open = self.open?;
        if open.is_zero() {
            return None;
        }
        Some((self.last - open) / open * Decimal::ONE_HUNDRED)
    }
}

/// A ticker observed by the monitor
#[derive(Debug, Clone, Serialize)]
pub struct TickerSnapshot {
    pub ticker: Ticker,
    /// HTTP status of the response that carried it
    pub status: u16,
    /// Local time the response was received
    pub fetched_at: DateTime<Utc>,
}
