//! Seed routine for development and test databases
//!
//! Destroys the existing tables and repopulates them from a fixed list.
//! Everything runs in one transaction, so a failure leaves the previous
//! contents untouched. Never point this at a database you care about.

use crate::db::bands::insert_band;
use crate::db::init::reset_schema;
use crate::db::models::{NewBand, NewMusician};
use crate::Result;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::info;

/// Musicians inserted by `seed_database`: (name, instrument)
pub const SEED_MUSICIANS: &[(&str, &str)] = &[
    ("Mick Jagger", "Voice"),
    ("Drake", "Voice"),
    ("Jimi Hendrix", "Guitar"),
];

/// Bands inserted by `seed_database`: (name, genre)
pub const SEED_BANDS: &[(&str, &str)] = &[
    ("The Beatles", "Rock"),
    ("Black Pink", "Pop"),
    ("Coldplay", "Rock"),
];

/// Row counts written by a seed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub musicians: usize,
    pub bands: usize,
}

/// The built-in musician seed list
pub fn seed_musicians() -> Vec<NewMusician> {
    SEED_MUSICIANS
        .iter()
        .map(|(name, instrument)| NewMusician::new(*name, *instrument))
        .collect()
}

/// The built-in band seed list
pub fn seed_bands() -> Vec<NewBand> {
    SEED_BANDS
        .iter()
        .map(|(name, genre)| NewBand::new(*name, *genre))
        .collect()
}

/// Reset the schema and insert the built-in seed data
pub async fn seed_database(pool: &SqlitePool) -> Result<SeedSummary> {
    seed_with(pool, &seed_musicians(), &seed_bands()).await
}

/// Reset the schema and insert the given records, all or nothing
pub async fn seed_with(
    pool: &SqlitePool,
    musicians: &[NewMusician],
    bands: &[NewBand],
) -> Result<SeedSummary> {
    let mut tx = pool.begin().await?;

    reset_schema(&mut *tx).await?;

    for musician in musicians {
        crate::db::musicians::insert_musician(&mut *tx, musician).await?;
    }
    for band in bands {
        insert_band(&mut *tx, band).await?;
    }

    tx.commit().await?;

    let summary = SeedSummary {
        musicians: musicians.len(),
        bands: bands.len(),
    };
    info!(
        musicians = summary.musicians,
        bands = summary.bands,
        "Seeded database"
    );

    Ok(summary)
}
