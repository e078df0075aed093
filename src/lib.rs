//! crypto-monitor: Mercado Bitcoin BTC ticker client
//!
//! This library provides:
//! - The `GET api/BTC/ticker/` endpoint returning an HTTP response envelope
//! - A pluggable HTTP transport with a `reqwest` implementation
//! - Ticker data model with decimal prices
//! - A polling monitor streaming ticker snapshots
//! - Logging and Prometheus metrics

pub mod api;
pub mod cli;
pub mod config;
pub mod monitor;
pub mod telemetry;
pub mod ticker;
