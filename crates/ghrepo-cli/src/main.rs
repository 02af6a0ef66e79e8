//! ghrepo - Declarative GitHub repository reconciler
//!
//! This binary runs one lifecycle operation (create, read, update, delete,
//! import) for a single repository and prints the resulting record.

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;

mod args;
mod commands;
mod logging;

use args::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    logging::init(&args.log_level, args.log_json)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting ghrepo");

    // Load configuration
    let config = if let Some(config_path) = &args.config {
        ghrepo_core::ProviderConfig::load_from(config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))?
    } else {
        ghrepo_core::ProviderConfig::load().context("failed to load configuration")?
    };

    tracing::debug!(
        organization = %config.organization.name,
        base_url = %config.api.base_url,
        "configuration loaded"
    );

    let org = ghrepo_core::Organization::from_config(&config)
        .context("failed to build API client")?;

    // Ctrl-C cancels the in-flight remote call
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, cancelling");
            trigger.cancel();
        }
    });

    commands::run(&org, args.command, &cancel).await
}
