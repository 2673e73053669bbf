use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mcdash::aggregator::Aggregator;
use mcdash::config::Config;
use mcdash::registry::Registry;
use mcdash::sources::command::{CommandRunner, SystemCommandRunner};
use mcdash::web;

#[derive(Parser, Debug)]
#[command(name = "mcdash", about = "Telemetry backend for the Minecraft server dashboard")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "/etc/mcdash/config.toml")]
    config: PathBuf,
    /// Override the configured listen address.
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(&cli.config)?;
    if let Some(listen) = cli.listen {
        config.listen_address = listen;
    }

    let runner: Arc<dyn CommandRunner> = Arc::new(SystemCommandRunner::new(
        Duration::from_secs(config.command_timeout_secs),
    ));
    let registry = Registry::new(&config, runner);
    let app = web::router(Aggregator::new(registry));

    let listener = tokio::net::TcpListener::bind(&config.listen_address).await?;
    info!(address = %config.listen_address, "dashboard backend listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
