//! Musician database operations

use crate::db::models::{Musician, NewMusician};
use crate::Result;
use sqlx::{Executor, Sqlite};

/// Insert a musician and return the stored row with its assigned id
pub async fn insert_musician<'e, E>(executor: E, musician: &NewMusician) -> Result<Musician>
where
    E: Executor<'e, Database = Sqlite>,
{
    let stored = sqlx::query_as::<_, Musician>(
        r#"
        INSERT INTO musicians (name, instrument, created_at, updated_at)
        VALUES (?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        RETURNING id, name, instrument
        "#,
    )
    .bind(&musician.name)
    .bind(&musician.instrument)
    .fetch_one(executor)
    .await?;

    Ok(stored)
}

/// Load a musician by id
pub async fn load_musician<'e, E>(executor: E, id: i64) -> Result<Option<Musician>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let musician = sqlx::query_as::<_, Musician>(
        "SELECT id, name, instrument FROM musicians WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(musician)
}

/// Load every musician, oldest id first
pub async fn load_all_musicians<'e, E>(executor: E) -> Result<Vec<Musician>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let musicians = sqlx::query_as::<_, Musician>(
        "SELECT id, name, instrument FROM musicians ORDER BY id ASC",
    )
    .fetch_all(executor)
    .await?;

    Ok(musicians)
}
