//! HTTP API handlers for bandroll-api

pub mod health;
pub mod musicians;

pub use health::health_routes;
pub use musicians::musician_routes;
