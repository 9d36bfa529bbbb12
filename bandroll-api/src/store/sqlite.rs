use async_trait::async_trait;
use bandroll_common::db::musicians::{insert_musician, load_all_musicians, load_musician};
use bandroll_common::{Musician, NewMusician};
use sqlx::SqlitePool;

use super::{MusicianStore, StoreResult};

/// SQLite-backed store sharing the process-wide pool
#[derive(Clone)]
pub struct SqliteMusicianStore {
    pool: SqlitePool,
}

impl SqliteMusicianStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl MusicianStore for SqliteMusicianStore {
    async fn list(&self) -> StoreResult<Vec<Musician>> {
        Ok(load_all_musicians(&self.pool).await?)
    }

    async fn find(&self, id: i64) -> StoreResult<Option<Musician>> {
        Ok(load_musician(&self.pool, id).await?)
    }

    async fn create(&self, musician: NewMusician) -> StoreResult<Musician> {
        Ok(insert_musician(&self.pool, &musician).await?)
    }
}
