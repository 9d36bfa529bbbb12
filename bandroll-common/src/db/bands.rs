//! Band database operations (seed data only)

use crate::db::models::{Band, NewBand};
use crate::Result;
use sqlx::{Executor, Sqlite};

pub async fn insert_band<'e, E>(executor: E, band: &NewBand) -> Result<Band>
where
    E: Executor<'e, Database = Sqlite>,
{
    let stored = sqlx::query_as::<_, Band>(
        r#"
        INSERT INTO bands (name, genre, created_at, updated_at)
        VALUES (?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        RETURNING id, name, genre
        "#,
    )
    .bind(&band.name)
    .bind(&band.genre)
    .fetch_one(executor)
    .await?;

    Ok(stored)
}

pub async fn load_all_bands<'e, E>(executor: E) -> Result<Vec<Band>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let bands = sqlx::query_as::<_, Band>("SELECT id, name, genre FROM bands ORDER BY id ASC")
        .fetch_all(executor)
        .await?;

    Ok(bands)
}
