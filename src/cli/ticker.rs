//! Ticker command implementation

use crate::api::MercadoBitcoinService;
use crate::config::Config;
use crate::ticker::Ticker;
use clap::Args;

#[derive(Args, Debug)]
pub struct TickerArgs {
    /// Print the raw ticker as JSON
    #[arg(long)]
    pub json: bool,
}

impl TickerArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let service = MercadoBitcoinService::with_config(&config.api)?;
        let response = service.get_ticker().await?;

        if !response.is_successful() {
            anyhow::bail!(
                "Ticker request failed: {} - {}",
                response.status(),
                response.error_body().unwrap_or_default()
            );
        }

        let Some(body) = response.into_body() else {
            anyhow::bail!("Ticker response had no body");
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&body)?);
        } else {
            println!("{}", format_ticker(&body.ticker));
        }

        Ok(())
    }
}

/// Render a ticker for the terminal
pub fn format_ticker(ticker: &Ticker) -> String {
    let change = ticker
        .change_pct()
        .map(|pct| format!("  ({:+.2}%)", pct))
        .unwrap_or_default();

    format!(
        "BTC/BRL  last {}{}\n  buy {}  sell {}  spread {}\n  high {}  low {}  vol {}\n  as of {}",
        ticker.last.normalize(),
        change,
        ticker.buy.normalize(),
        ticker.sell.normalize(),
        ticker.spread().normalize(),
        ticker.high.normalize(),
        ticker.low.normalize(),
        ticker.vol.normalize(),
        ticker.date.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}
