//! Watch command implementation

use super::format_ticker;
use crate::api::MercadoBitcoinService;
use crate::config::Config;
use crate::monitor::{PollingFeed, TickerFeed};
use clap::Args;
use std::num::NonZeroUsize;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Poll interval in seconds (overrides config)
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Stop after this many snapshots
    #[arg(short = 'n', long)]
    pub count: Option<NonZeroUsize>,
}

impl WatchArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let interval = self
            .interval
            .map(Duration::from_secs)
            .unwrap_or_else(|| config.monitor.poll_interval());

        let service = MercadoBitcoinService::with_config(&config.api)?;
        let feed = PollingFeed::new(service, interval);
        let mut snapshots = feed.subscribe().await?;
        let mut received = 0usize;

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                snapshot = snapshots.recv() => {
                    let Some(snapshot) = snapshot else {
                        tracing::warn!("Ticker feed closed");
                        break;
                    };
                    println!("{}\n", format_ticker(&snapshot.ticker));

                    received += 1;
                    if self.count.is_some_and(|limit| received >= limit.get()) {
                        break;
                    }
                }
                _ = &mut ctrl_c => {
                    tracing::info!("Interrupted, stopping watch");
                    break;
                }
            }
        }

        tracing::info!(snapshots = received, "Watch finished");
        Ok(())
    }
}
