//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use crate::services::transfer::{StoreError, TransferError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Transfer unit of work could not be completed; everything rolled back.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// Bearer token is missing, unknown, or revoked.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid credentials")]
    Unauthorized,

    /// Requested resource does not exist. The payload names the resource
    /// kind ("account", "loan", ...).
    ///
    /// Returns HTTP 404 Not Found.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A unique column (account number, email, username) is already taken.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("{0} already exists")]
    Conflict(&'static str),

    /// Sender account balance is below the requested transfer amount.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid request")]
    InvalidRequest(String),
}

impl From<TransferError> for AppError {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::NotFound => AppError::NotFound("account"),
            TransferError::InsufficientFunds => AppError::InsufficientFunds,
            TransferError::InvalidRequest(msg) => AppError::InvalidRequest(msg),
            TransferError::Storage(e) => AppError::Storage(e),
        }
    }
}

/// Map a sqlx error to [`AppError::Conflict`] when it is a unique-constraint
/// violation, naming the conflicting resource; pass everything else through.
pub fn conflict_on_unique(err: sqlx::Error, resource: &'static str) -> AppError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::Conflict(resource);
        }
    }
    AppError::Database(err)
}

/// Convert AppError into an HTTP response.
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// Database and storage failures are logged server-side and returned as
/// opaque 500s so internals never leak to clients.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                self.to_string(),
            ),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "conflict", self.to_string()),
            AppError::InsufficientFunds => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "insufficient_funds",
                self.to_string(),
            ),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(ref err) => {
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Storage(ref err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_errors_map_to_expected_statuses() {
        let cases = [
            (TransferError::NotFound, StatusCode::NOT_FOUND),
            (
                TransferError::InsufficientFunds,
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                TransferError::InvalidRequest("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                TransferError::Storage(StoreError("down".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
