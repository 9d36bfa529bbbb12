//! Database initialization
//!
//! Opens (or creates) the SQLite database and makes sure the schema exists.
//! Table creation is idempotent; `reset_schema` is the destructive variant
//! used by the seed routine.

use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{SqliteConnection, SqlitePool};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Default pool size when the configuration does not override it
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path, max_connections: u32) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Open a private in-memory database with the schema applied
///
/// The pool is pinned to a single connection: every SQLite `:memory:`
/// connection is its own database.
pub async fn init_memory_database() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Create all tables that do not exist yet
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    create_tables(&mut conn).await
}

/// Drop and recreate every table, discarding all rows
pub async fn reset_schema(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query("DROP TABLE IF EXISTS musicians")
        .execute(&mut *conn)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS bands")
        .execute(&mut *conn)
        .await?;
    debug!("Dropped musicians and bands tables");

    create_tables(conn).await
}

async fn create_tables(conn: &mut SqliteConnection) -> Result<()> {
    create_musicians_table(conn).await?;
    create_bands_table(conn).await?;
    Ok(())
}

// The CHECK trim set must stay in sync with `models::STORAGE_TRIM_CHARS`.
async fn create_musicians_table(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS musicians (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK (length(trim(name, ' ' || char(9, 10, 11, 12, 13))) > 0),
            instrument TEXT NOT NULL CHECK (length(trim(instrument, ' ' || char(9, 10, 11, 12, 13))) > 0),
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}

async fn create_bands_table(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bands (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK (length(trim(name, ' ' || char(9, 10, 11, 12, 13))) > 0),
            genre TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}
