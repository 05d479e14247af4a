use anyhow::Result;
use clap::Parser;
use rephub_client::cli::{handle_command, HubCli};
use rephub_client::environment::EnvironmentConfig;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays clean rendered output.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = HubCli::parse();
    let config = EnvironmentConfig::load()?;

    handle_command(cli, config).await
}
