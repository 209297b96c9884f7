//! markcalc HTTP server binary.
//!
//! Loads the waypoint file once to fail fast on a malformed file, then
//! serves the lookup and course pages and the JSON endpoints.
//!
//! # Usage
//!
//! ```bash
//! MARKS_FILE=data/2025scra.gpx cargo run --bin markcalc-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`, `PORT`, `MARKS_FILE`, `MARKS_RELOAD`: see [`markcalc::config`]
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use markcalc::config::ServerConfig;
use markcalc::http::{create_router, AppState};
use markcalc::store::{GpxFileStore, MarkStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting markcalc HTTP server");

    let config = ServerConfig::load().context("Invalid configuration")?;
    let store = Arc::new(GpxFileStore::new(&config.marks.file, config.marks.reload));

    // A malformed waypoint file is fatal at startup
    let marks = store
        .load()
        .await
        .with_context(|| format!("Cannot load marks from {}", store.path().display()))?;
    info!(
        source = %store.describe(),
        reload = ?store.policy(),
        count = marks.len(),
        "Mark store ready"
    );

    let state = AppState::new(store);
    let app = create_router(state);

    let addr = config.bind_address()?;
    info!("Server listening on http://{}", addr);
    info!("Lookup page: http://{}/lookup", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
