//! Netscope - live network-traffic dashboard
//!
//! Terminal client for a packet-capture backend: polls the aggregation
//! endpoint on a fixed cadence and renders traffic charts and tables,
//! refetching immediately when the user changes the time window.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use netscope::config::Config;

#[derive(Parser)]
#[command(name = "netscope")]
#[command(about = "Live network-traffic dashboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<String>,

    /// Base URL of the capture backend (overrides config)
    #[arg(long)]
    url: Option<String>,

    /// Initial time window in minutes (overrides config)
    #[arg(long)]
    minutes: Option<u32>,

    /// Refresh cadence in seconds (overrides config)
    #[arg(long)]
    refresh: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    netscope::logging::init()?;

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = cli.url {
        config.api_url = url;
    }
    if let Some(minutes) = cli.minutes {
        config.default_minutes = minutes;
    }
    if let Some(refresh) = cli.refresh {
        config.refresh_interval_secs = refresh;
    }
    config.validate()?;

    info!(
        "netscope v{} starting against {}",
        env!("CARGO_PKG_VERSION"),
        config.api_url
    );

    netscope::tui::run(&config).await
}
