//! Database models and queries

pub mod bands;
pub mod init;
pub mod models;
pub mod musicians;
pub mod seed;

pub use init::*;
pub use models::*;
pub use seed::{seed_database, seed_with, SeedSummary};
