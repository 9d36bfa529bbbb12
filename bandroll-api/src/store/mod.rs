//! Persistence collaborator for musician records
//!
//! Handlers only see [`MusicianStore`]. Production wires in
//! [`SqliteMusicianStore`]; tests can swap in [`InMemoryMusicianStore`].

use async_trait::async_trait;
use bandroll_common::{Musician, NewMusician};
use thiserror::Error;

mod memory;
mod sqlite;

pub use memory::InMemoryMusicianStore;
pub use sqlite::SqliteMusicianStore;

/// Why a store operation did not complete
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record violates a storage-level constraint
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// The store cannot be reached (closed pool, connection fault)
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Any other database failure
    #[error("Database error: {0}")]
    Database(String),
}

impl From<bandroll_common::Error> for StoreError {
    fn from(err: bandroll_common::Error) -> Self {
        if err.is_constraint_violation() {
            return StoreError::Constraint(err.to_string());
        }

        match err {
            bandroll_common::Error::Database(
                e @ (sqlx::Error::PoolClosed
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::Io(_)
                | sqlx::Error::WorkerCrashed),
            ) => StoreError::Unavailable(e.to_string()),
            other => StoreError::Database(other.to_string()),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Create/find/find-all over musician records
#[async_trait]
pub trait MusicianStore: Send + Sync {
    /// Every stored musician, in insertion order
    async fn list(&self) -> StoreResult<Vec<Musician>>;

    /// The musician with this id, if any
    async fn find(&self, id: i64) -> StoreResult<Option<Musician>>;

    /// Insert and return the stored record with its new id
    async fn create(&self, musician: NewMusician) -> StoreResult<Musician>;
}
