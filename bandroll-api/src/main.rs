//! bandroll-api - Musician roster HTTP service
//!
//! Serves list/get/create over the `musicians` table of a local SQLite
//! database. The database and its schema are created on first start.

use std::sync::Arc;

use anyhow::{Context, Result};
use bandroll_api::cli::{build_info, init_tracing, shutdown_signal, Args};
use bandroll_api::{build_router, AppState, SqliteMusicianStore};
use bandroll_common::db::init::init_database;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.resolve().context("Failed to load configuration")?;

    init_tracing(&config.log_level);
    info!("Starting bandroll-api {}", build_info());

    info!("Database path: {}", config.database_path.display());
    let pool = init_database(&config.database_path, config.max_connections)
        .await
        .context("Failed to open database")?;
    info!("✓ Connected to database");

    let state = AppState::new(Arc::new(SqliteMusicianStore::new(pool.clone())));
    let app = build_router(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    info!("bandroll-api listening on http://{}", bind_addr);
    info!("Health check: http://{}/health", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}
