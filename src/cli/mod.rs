//! CLI interface for crypto-monitor
//!
//! Provides subcommands for:
//! - `ticker`: Fetch the BTC ticker once
//! - `watch`: Poll the ticker and print every snapshot
//! - `config`: Show the effective configuration

mod ticker;
mod watch;

pub use ticker::{format_ticker, TickerArgs};
pub use watch::WatchArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "crypto-monitor")]
#[command(about = "Mercado Bitcoin BTC ticker client and price monitor")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the BTC ticker once
    Ticker(TickerArgs),
    /// Poll the BTC ticker until interrupted
    Watch(WatchArgs),
    /// Show configuration
    Config,
}
