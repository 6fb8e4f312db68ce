//! WR CLI - Command line tool for the weather reports API.

use clap::Parser;
use std::time::Duration;
use wr_api::config::DEFAULT_BASE_URL;
use wr_api::{ApiConfig, HttpGateway};

#[derive(Parser)]
#[command(
    name = "wr-cli",
    version,
    about = "Weather report toolkit"
)]
struct Cli {
    /// Base URL of the reports API
    #[arg(long, env = "WEATHER_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: wr_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = ApiConfig::new(&cli.api_url);
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build()?;
    let gateway = HttpGateway::with_client(&config, client);
    log::info!("Using reports API at {}", gateway.base_url());

    let mut stdout = std::io::stdout().lock();
    wr_cmd::run(&gateway, cli.command, &mut stdout).await
}
