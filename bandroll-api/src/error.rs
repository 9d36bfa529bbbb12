//! Error types for bandroll-api
//!
//! Every variant maps to a fixed status code and a JSON body of the form
//! `{"error": ...}`. Persistence causes are logged where they are caught and
//! never reach the response body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::validation::ValidationFailure;

pub const FETCH_ALL_FAILED: &str = "An error occurred while fetching musicians";
pub const FETCH_ONE_FAILED: &str = "Error while fetching musician";
pub const CREATE_FAILED: &str = "An error occurred while creating the musician";
pub const MUSICIAN_NOT_FOUND: &str = "Musician not found";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Submitted payload failed one or more field rules (400)
    #[error("Validation failed: {} field error(s)", .0.len())]
    Validation(Vec<ValidationFailure>),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(&'static str),

    /// Persistence failed while handling a write (400)
    #[error("Bad request: {0}")]
    BadRequest(&'static str),

    /// Persistence failed while handling a read (500)
    #[error("Internal server error: {0}")]
    Internal(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(failures) => {
                (StatusCode::BAD_REQUEST, json!({ "error": failures }))
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
