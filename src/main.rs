//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use mlb_statsapi::{
    cli::{Commands, MlbStats},
    commands::{
        endpoints::{handle_endpoints, handle_info},
        request::{handle_get, handle_url},
        self_test::handle_self_test,
    },
    Config, StatsApiClient,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = MlbStats::parse();

    let default_filter = if app.verbose { "mlb_statsapi=debug" } else { "mlb_statsapi=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("reading configuration from the environment")?;
    let client = StatsApiClient::new(config).context("initialising the Stats API client")?;

    match app.command {
        Commands::Endpoints { notes } => handle_endpoints(client.registry(), notes)?,

        Commands::Info { endpoint } => handle_info(client.registry(), &endpoint)?,

        Commands::Url { endpoint, options } => handle_url(&client, &endpoint, &options)?,

        Commands::Get {
            endpoint,
            options,
            pretty,
        } => handle_get(&client, &endpoint, &options, pretty).await?,

        Commands::SelfTest { delay_ms, only } => {
            let failed = handle_self_test(&client, &only, delay_ms).await?;
            if failed > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
