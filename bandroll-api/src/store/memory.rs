use async_trait::async_trait;
use bandroll_common::db::is_storable_text;
use bandroll_common::{Musician, NewMusician};
use tokio::sync::RwLock;

use super::{MusicianStore, StoreError, StoreResult};

/// In-process store for tests and demos
///
/// Ids start at 1 and increase by one per insert, like an
/// `AUTOINCREMENT` column. Inserts are checked with the same blank rule the
/// SQLite CHECK constraints use.
#[derive(Debug, Default)]
pub struct InMemoryMusicianStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    musicians: Vec<Musician>,
}

impl InMemoryMusicianStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given records
    pub fn with_musicians(musicians: impl IntoIterator<Item = NewMusician>) -> Self {
        let mut inner = Inner::default();
        for musician in musicians {
            inner.push(musician);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.musicians.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Inner {
    fn push(&mut self, musician: NewMusician) -> Musician {
        self.last_id += 1;
        let stored = Musician {
            id: self.last_id,
            name: musician.name,
            instrument: musician.instrument,
        };
        self.musicians.push(stored.clone());
        stored
    }
}

#[async_trait]
impl MusicianStore for InMemoryMusicianStore {
    async fn list(&self) -> StoreResult<Vec<Musician>> {
        Ok(self.inner.read().await.musicians.clone())
    }

    async fn find(&self, id: i64) -> StoreResult<Option<Musician>> {
        let inner = self.inner.read().await;
        Ok(inner.musicians.iter().find(|m| m.id == id).cloned())
    }

    async fn create(&self, musician: NewMusician) -> StoreResult<Musician> {
        if !is_storable_text(&musician.name) || !is_storable_text(&musician.instrument) {
            return Err(StoreError::Constraint(
                "name and instrument must not be blank".to_string(),
            ));
        }

        Ok(self.inner.write().await.push(musician))
    }
}
