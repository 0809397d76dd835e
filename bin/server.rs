// Discover Andhra - Web Server
// Serves the single-page front-end and the read-only places API

use anyhow::{Context, Result};
use clap::Parser;
use discover_andhra::api::{router, AppState};
use discover_andhra::{logging, Catalog, Config};
use std::path::PathBuf;
use tracing::info;

/// Web front-end for the places catalog
#[derive(Parser, Debug)]
#[command(name = "discover-server", version, about)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON or CSV catalog to use instead of the builtin dataset
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Port to listen on, overriding the config file
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref());
    if let Some(port) = args.port {
        config.server.port = port;
    }

    logging::init_stderr(&config.logging);

    let catalog_path = args.catalog.or_else(|| config.catalog.path.clone());
    let catalog = Catalog::load_or_builtin(catalog_path.as_deref()).context("Failed to load catalog")?;
    info!(places = catalog.len(), districts = catalog.districts().len(), "catalog ready");

    let app = router(AppState::new(catalog));

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(addr = %addr, "server listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
