//! Shared helpers for bandroll-api integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
};
use bandroll_api::store::StoreResult;
use bandroll_api::{MusicianStore, StoreError};
use bandroll_common::{Musician, NewMusician};
use serde_json::Value;

/// Store whose every call fails with the given kind
pub struct FailingStore {
    pub kind: fn(String) -> StoreError,
}

impl FailingStore {
    pub fn unavailable() -> Self {
        Self {
            kind: StoreError::Unavailable,
        }
    }

    pub fn constraint() -> Self {
        Self {
            kind: StoreError::Constraint,
        }
    }

    fn fail<T>(&self) -> StoreResult<T> {
        Err((self.kind)("connection refused".to_string()))
    }
}

#[async_trait]
impl MusicianStore for FailingStore {
    async fn list(&self) -> StoreResult<Vec<Musician>> {
        self.fail()
    }

    async fn find(&self, _id: i64) -> StoreResult<Option<Musician>> {
        self.fail()
    }

    async fn create(&self, _musician: NewMusician) -> StoreResult<Musician> {
        self.fail()
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_raw(uri: &str, content_type: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}

/// Extract JSON body from response
pub async fn extract_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// The `msg` strings of a validation error body
pub fn validation_messages(body: &Value) -> Vec<String> {
    body["error"]
        .as_array()
        .expect("error should be an array of failures")
        .iter()
        .map(|failure| failure["msg"].as_str().unwrap_or_default().to_string())
        .collect()
}
