//! WePOS frontend server.
//!
//! Serves the site (a static directory, when configured) and takes over any
//! request for `?wcpos=true` or the `/pos` URL with the point-of-sale shell.
//!
//! Usage:
//!   wepos-frontend --port 4010 --config wepos.toml

use std::path::PathBuf;
use std::sync::Arc;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wepos_frontend::{AppState, FrontendConfig, build_router};

#[derive(Parser, Debug)]
#[command(name = "wepos-frontend")]
#[command(about = "WePOS point-of-sale frontend")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "4010")]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Path to the TOML config file
    #[arg(short, long, default_value = "wepos.toml")]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "info,tower_http=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_target(false)
        .compact()
        .init();

    info!("WePOS frontend starting...");
    let config = FrontendConfig::load_from(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;
    let state = AppState::from_config(config).context("preparing frontend state")?;
    info!(
        site = %state.config.site_name,
        pos_path = %state.config.pos_path,
        categories = state.catalog.terms(wepos_model::PRODUCT_CATEGORY_TAXONOMY).len(),
        "Frontend ready"
    );

    let app = build_router(Arc::new(state));
    let addr = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
