//! bandroll-api library - musician roster HTTP service
//!
//! Exposes the router and its collaborators so the binaries and the
//! integration tests build the exact same service.

use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cli;
pub mod error;
pub mod store;
pub mod validation;

pub use crate::error::{ApiError, ApiResult};
pub use crate::store::{InMemoryMusicianStore, MusicianStore, SqliteMusicianStore, StoreError};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Persistence collaborator for musician records
    pub store: Arc<dyn MusicianStore>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: Arc<dyn MusicianStore>) -> Self {
        Self {
            store,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::musician_routes())
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
