//! cmctl CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;

use cmctl::cli::{commands, Cli};
use cmctl::infrastructure::http::ContainerClient;
use cmctl::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        cmctl::cli::handle_error(err, json);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;

    let _logger = LoggerImpl::init(&config.logging)?;

    let client = ContainerClient::from_settings(&config.client)
        .context("Failed to create container-manager client")?;

    commands::container::execute(cli.command, &client, cli.json).await
}
