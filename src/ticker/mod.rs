//! Ticker data model
//!
//! Mirrors the Mercado Bitcoin public ticker payload for BTC/BRL

mod types;

pub use types::{Ticker, TickerResponse, TickerSnapshot};
