//! Error types for the gateway
//!
//! Provides unified error handling using thiserror. Backend faults are kept
//! for the logs; clients only ever see a short generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Backend Error Enum ==
/// Fault reported by one of the backend clients.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Relational store fault
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    /// Cache store fault
    #[error("cache: {0}")]
    Cache(#[from] redis::RedisError),

    /// Message broker fault
    #[error("queue: {0}")]
    Queue(#[from] lapin::Error),

    /// A queue payload could not be encoded or decoded
    #[error("payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// In-process backend refused the call
    #[error("unavailable: {0}")]
    Unavailable(String),
}

// == API Error Enum ==
/// Error returned by the HTTP handlers.
///
/// Each variant's display text is the message sent to the client.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Database error")]
    Database(#[source] BackendError),

    #[error("Failed to create user")]
    CreateUser(#[source] BackendError),

    #[error("Cache error")]
    Cache(#[source] BackendError),

    #[error("Queue error")]
    Queue(#[source] BackendError),

    #[error("Failed to get stats")]
    Stats(#[source] BackendError),
}

impl ApiError {
    /// The backend fault behind this error.
    pub fn backend(&self) -> &BackendError {
        match self {
            ApiError::Database(e)
            | ApiError::CreateUser(e)
            | ApiError::Cache(e)
            | ApiError::Queue(e)
            | ApiError::Stats(e) => e,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.backend(), "{}", self);

        let body = Json(ErrorResponse::new(self.to_string()));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
