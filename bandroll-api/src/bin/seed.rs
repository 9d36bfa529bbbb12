//! bandroll-seed - reset and repopulate the roster database
//!
//! Drops the musicians and bands tables and inserts the built-in seed
//! records. Development and test bootstrap only: every existing row is lost.

use anyhow::{Context, Result};
use bandroll_api::cli::{build_info, init_tracing, Args};
use bandroll_common::db::init::init_database;
use bandroll_common::db::seed_database;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.resolve().context("Failed to load configuration")?;

    init_tracing(&config.log_level);
    info!("Starting bandroll-seed {}", build_info());
    info!("Database path: {}", config.database_path.display());

    let pool = init_database(&config.database_path, config.max_connections)
        .await
        .context("Failed to open database")?;

    let summary = seed_database(&pool)
        .await
        .context("Seeding failed, database left unchanged")?;

    info!(
        "✓ Seeded {} musicians and {} bands",
        summary.musicians, summary.bands
    );

    pool.close().await;
    Ok(())
}
