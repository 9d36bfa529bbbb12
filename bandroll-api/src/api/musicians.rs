//! Musician resource handlers
//!
//! - `GET /musicians` lists every record
//! - `GET /musicians/:id` fetches one record
//! - `POST /musicians` validates and creates a record
//!
//! Store failures are logged here and replaced by a generic message; the
//! cause never reaches the client.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bandroll_common::Musician;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::error::{
    ApiError, ApiResult, CREATE_FAILED, FETCH_ALL_FAILED, FETCH_ONE_FAILED, MUSICIAN_NOT_FOUND,
};
use crate::store::StoreError;
use crate::validation::{validate_new_musician, CandidateMusician};
use crate::AppState;

/// GET /musicians
pub async fn list_musicians(State(state): State<AppState>) -> ApiResult<Json<Vec<Musician>>> {
    match state.store.list().await {
        Ok(musicians) => {
            debug!(count = musicians.len(), "Listed musicians");
            Ok(Json(musicians))
        }
        Err(e) => {
            error!(error = %e, "Error fetching musicians");
            Err(ApiError::Internal(FETCH_ALL_FAILED))
        }
    }
}

/// GET /musicians/:id
///
/// An id that does not parse as an integer cannot exist, so it is reported
/// as not found.
pub async fn get_musician(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Musician>> {
    let Ok(id) = raw_id.parse::<i64>() else {
        debug!(id = %raw_id, "Non-numeric musician id");
        return Err(ApiError::NotFound(MUSICIAN_NOT_FOUND));
    };

    match state.store.find(id).await {
        Ok(Some(musician)) => Ok(Json(musician)),
        Ok(None) => Err(ApiError::NotFound(MUSICIAN_NOT_FOUND)),
        Err(e) => {
            error!(id, error = %e, "Error fetching musician");
            Err(ApiError::Internal(FETCH_ONE_FAILED))
        }
    }
}

/// POST /musicians
///
/// A body that is not JSON is validated as if it were empty.
pub async fn create_musician(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Musician>)> {
    let candidate = match payload {
        Ok(Json(body)) => CandidateMusician::from_json(&body),
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Unreadable musician payload");
            CandidateMusician::default()
        }
    };

    let new_musician = validate_new_musician(&candidate).map_err(|failures| {
        debug!(failures = failures.len(), "Musician payload failed validation");
        ApiError::Validation(failures)
    })?;

    match state.store.create(new_musician).await {
        Ok(musician) => {
            info!(id = musician.id, name = %musician.name, "Created musician");
            Ok((StatusCode::CREATED, Json(musician)))
        }
        Err(e @ StoreError::Constraint(_)) => {
            warn!(error = %e, "Musician rejected by store");
            Err(ApiError::BadRequest(CREATE_FAILED))
        }
        Err(e) => {
            error!(error = %e, "Error creating musician");
            Err(ApiError::BadRequest(CREATE_FAILED))
        }
    }
}

/// Build musician resource routes
pub fn musician_routes() -> Router<AppState> {
    Router::new()
        .route("/musicians", get(list_musicians).post(create_musician))
        .route("/musicians/:id", get(get_musician))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryMusicianStore;
    use bandroll_common::NewMusician;
    use serde_json::json;
    use std::sync::Arc;

    fn state_with(musicians: Vec<NewMusician>) -> AppState {
        AppState::new(Arc::new(InMemoryMusicianStore::with_musicians(musicians)))
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_is_not_found() {
        let state = state_with(vec![NewMusician::new("Drake", "Voice")]);

        let result = get_musician(State(state), Path("abc".to_string())).await;

        assert!(matches!(result, Err(ApiError::NotFound(MUSICIAN_NOT_FOUND))));
    }

    #[tokio::test]
    async fn test_create_trims_fields() {
        let state = state_with(vec![]);

        let (status, Json(created)) = create_musician(
            State(state.clone()),
            Ok(Json(json!({ "name": "  Stevie Wonder ", "instrument": " Keys" }))),
        )
        .await
        .expect("Create should succeed");

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.name, "Stevie Wonder");
        assert_eq!(created.instrument, "Keys");
    }

    #[tokio::test]
    async fn test_create_invalid_skips_store() {
        let state = state_with(vec![]);

        let result = create_musician(
            State(state.clone()),
            Ok(Json(json!({ "name": "Jane Doe" }))),
        )
        .await;

        assert!(matches!(result, Err(ApiError::Validation(ref f)) if f.len() == 1));
        assert!(state.store.list().await.unwrap().is_empty());
    }
}
