//! Polling ticker feed

use super::TickerFeed;
use crate::api::{HttpTransport, MercadoBitcoinService};
use crate::ticker::TickerSnapshot;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, RwLock};
use tokio::time::MissedTickBehavior;

/// Channel capacity for snapshots not yet consumed
const CHANNEL_CAPACITY: usize = 64;

/// Polls `get_ticker` at a fixed interval
///
/// Rejected or failed polls are logged and skipped; the loop ends when the
/// subscriber drops its receiver.
pub struct PollingFeed<T> {
    service: Arc<MercadoBitcoinService<T>>,
    interval: Duration,
    latest: Arc<RwLock<Option<TickerSnapshot>>>,
}

impl<T: HttpTransport + 'static> PollingFeed<T> {
    /// Create a feed polling every `interval`
    pub fn new(service: MercadoBitcoinService<T>, interval: Duration) -> Self {
        Self {
            service: Arc::new(service),
            interval,
            latest: Arc::new(RwLock::new(None)),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Fetch once, returning a snapshot only for a successful response
    async fn poll_once(service: &MercadoBitcoinService<T>) -> Option<TickerSnapshot> {
        match service.get_ticker().await {
            Ok(response) if response.is_successful() => {
                let status = response.code();
                match response.into_body() {
                    Some(body) => Some(TickerSnapshot {
                        ticker: body.ticker,
                        status,
                        fetched_at: Utc::now(),
                    }),
                    None => {
                        tracing::warn!(status, "Ticker response had no body");
                        None
                    }
                }
            }
            Ok(response) => {
                tracing::warn!(
                    status = response.code(),
                    body = response.error_body().unwrap_or_default(),
                    "Ticker poll rejected"
                );
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ticker poll failed");
                None
            }
        }
    }

    /// Run the polling loop until the receiver is dropped
    async fn run_poll_loop(
        service: Arc<MercadoBitcoinService<T>>,
        interval: Duration,
        latest: Arc<RwLock<Option<TickerSnapshot>>>,
        snapshot_tx: mpsc::Sender<TickerSnapshot>,
    ) {
        let mut poll_timer = tokio::time::interval(interval);
        poll_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = snapshot_tx.closed() => {
                    tracing::debug!("Snapshot receiver dropped, stopping poller");
                    break;
                }
                _ = poll_timer.tick() => {}
            }

            let Some(snapshot) = Self::poll_once(&service).await else {
                continue;
            };

            *latest.write().await = Some(snapshot.clone());

            if snapshot_tx.send(snapshot).await.is_err() {
                tracing::debug!("Snapshot receiver dropped, stopping poller");
                break;
            }
        }
    }
}

#[async_trait]
impl<T: HttpTransport + 'static> TickerFeed for PollingFeed<T> {
    async fn subscribe(&self) -> anyhow::Result<mpsc::Receiver<TickerSnapshot>> {
        anyhow::ensure!(!self.interval.is_zero(), "Poll interval must be non-zero");

        let (snapshot_tx, snapshot_rx) = mpsc::channel(CHANNEL_CAPACITY);

        tracing::info!(
            interval_secs = self.interval.as_secs_f64(),
            "Starting ticker poller"
        );

        tokio::spawn(Self::run_poll_loop(
            Arc::clone(&self.service),
            self.interval,
            Arc::clone(&self.latest),
            snapshot_tx,
        ));

        Ok(snapshot_rx)
    }

    async fn latest(&self) -> Option<TickerSnapshot> {
        self.latest.read().await.clone()
    }
}
