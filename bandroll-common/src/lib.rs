//! # Bandroll Common Library
//!
//! Shared code for the bandroll service and its tooling:
//! - Database models and queries
//! - Schema creation and the seed routine
//! - Configuration loading
//! - Common error types

pub mod config;
pub mod db;
pub mod error;

pub use db::models::{Band, Musician, NewBand, NewMusician};
pub use error::{Error, Result};
