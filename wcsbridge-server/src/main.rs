//! WCS Bridge - Headless Daemon
//!
//! A pure Rust HTTP server that:
//! - Translates WMS GetMap requests under the service prefix into WCS GetCoverage
//! - Serves a static capabilities document for GetCapabilities
//! - Answers every other path with a short plain-text notice
//!
//! Access via: http://localhost:8046/services

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod commands;
mod router;
mod server_utils;

use cli::{Cli, Commands};
use wcsbridge_core::modules::config::load_config;
use wcsbridge_core::proxy::{AppState, Bridge};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let file_config = load_config(cli.config.as_deref()).context("loading configuration")?;
    let config = cli.overrides.apply(file_config).validated().context("invalid configuration")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::CheckConfig { json } => commands::check_config(&config, json),
        Commands::Serve => serve(config).await,
    }
}

async fn serve(config: wcsbridge_types::BridgeConfig) -> Result<()> {
    info!("🚀 WCS Bridge starting on {}...", config.get_socket_addr());

    let bridge = Bridge::from_config(&config).context("building bridge")?;
    let app = router::build_router(AppState::new(bridge));

    let listener = server_utils::create_listener(&config)?;
    let addr = listener.local_addr()?;

    info!("🌐 Server listening on http://{}", addr);
    info!("🔀 Service endpoint at http://{}{}", addr, config.service_prefix);
    info!("🛰️ Forwarding GetCoverage to {}", config.upstream_url);
    info!("📄 Capabilities from {}", config.capabilities_path.display());
    match config.request_timeout_secs {
        Some(secs) => info!("⏱️ Upstream timeout {}s", secs),
        None => info!("⏱️ Upstream timeout left to the HTTP client default"),
    }

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("👋 Server stopped");
    Ok(())
}
