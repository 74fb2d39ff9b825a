//! Error handling module for the news backend.
//!
//! Every failure a handler can produce is an [`AppError`]; a single
//! `IntoResponse` impl maps it to a status code and a `{ "msg": ... }` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned for constraint violations that escaped the pre-checks.
pub const CONSTRAINT_MESSAGE: &str = "bad request: the store rejected the write";

/// Message returned for anything the server did not anticipate.
pub const INTERNAL_MESSAGE: &str = "internal server error";

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing input, caught before any write (400).
    #[error("{0}")]
    BadRequest(String),
    /// Input present but unusable for the requested mutation (422).
    #[error("{0}")]
    Unprocessable(String),
    /// A referenced entity is absent (404).
    #[error("{0}")]
    NotFound(String),
    /// A store-level constraint violation that was not pre-checked (400).
    #[error("constraint violation: {0}")]
    Constraint(String),
    /// Catch-all server fault (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        AppError::Unprocessable(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Constraint(_) => StatusCode::BAD_REQUEST,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client. Store details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) | AppError::Unprocessable(msg) | AppError::NotFound(msg) => {
                msg.clone()
            }
            AppError::Constraint(_) => CONSTRAINT_MESSAGE.to_string(),
            AppError::Internal(_) => INTERNAL_MESSAGE.to_string(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                sqlx::error::ErrorKind::UniqueViolation
                | sqlx::error::ErrorKind::ForeignKeyViolation
                | sqlx::error::ErrorKind::NotNullViolation
                | sqlx::error::ErrorKind::CheckViolation => {
                    tracing::warn!("Constraint violation reached the store: {}", db_err);
                    return AppError::Constraint(db_err.message().to_string());
                }
                _ => {}
            }
        }
        tracing::error!("Database error: {:?}", err);
        AppError::Internal(format!("database error: {}", err))
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub msg: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "Request rejected: {}", self);
        }
        let body = ErrorResponse {
            msg: self.client_message(),
        };
        (status, Json(body)).into_response()
    }
}
