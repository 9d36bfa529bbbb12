//! Database models

use serde::{Deserialize, Serialize};

/// Characters the table CHECK constraints strip before testing for an
/// empty value: space, tab, line feed, vertical tab, form feed, carriage return
pub const STORAGE_TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\u{0B}', '\u{0C}', '\r'];

/// Whether the musicians/bands tables will accept this text column value
pub fn is_storable_text(value: &str) -> bool {
    !value.trim_matches(STORAGE_TRIM_CHARS).is_empty()
}

/// A persisted musician row
///
/// `id` is assigned by SQLite on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Musician {
    pub id: i64,
    pub name: String,
    pub instrument: String,
}

/// Fields for a musician that has not been inserted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMusician {
    pub name: String,
    pub instrument: String,
}

impl NewMusician {
    pub fn new(name: impl Into<String>, instrument: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instrument: instrument.into(),
        }
    }
}

/// A persisted band row (only written by the seed routine)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Band {
    pub id: i64,
    pub name: String,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBand {
    pub name: String,
    pub genre: String,
}

impl NewBand {
    pub fn new(name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
        }
    }
}
