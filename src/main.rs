use clap::Parser;
use crypto_monitor::cli::{Cli, Commands};
use crypto_monitor::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::embedded()?
        }
    };

    // Initialize telemetry
    let _telemetry = crypto_monitor::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Ticker(args) => {
            tracing::debug!("Fetching ticker");
            args.execute(&config).await?;
        }
        Commands::Watch(args) => {
            tracing::info!("Starting ticker watch");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  API: {}", config.api.base_url);
            println!("  Timeout: {}s", config.api.timeout_secs);
            println!("  User-Agent: {}", config.api.user_agent);
            println!("  Poll interval: {}s", config.monitor.poll_interval_secs);
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
            match config.telemetry.metrics_port {
                Some(port) => println!("  Metrics: port {}", port),
                None => println!("  Metrics: disabled"),
            }
        }
    }

    Ok(())
}
