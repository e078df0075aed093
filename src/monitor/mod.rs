//! Ticker monitor
//!
//! Periodically polls the ticker endpoint and streams snapshots

mod poller;

pub use poller::PollingFeed;

use crate::ticker::TickerSnapshot;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Trait for ticker feed implementations
#[async_trait]
pub trait TickerFeed: Send + Sync {
    /// Subscribe to ticker snapshots
    async fn subscribe(&self) -> anyhow::Result<mpsc::Receiver<TickerSnapshot>>;

    /// Most recent snapshot, if any has been received
    async fn latest(&self) -> Option<TickerSnapshot>;
}
