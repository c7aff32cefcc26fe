//! Error types for the HTTP API.
//!
//! # Design
//! `StoreError` is what the backends speak; `ApiError` is what handlers
//! return. The conversion between the two is the only place internal
//! failures become status codes: store detail is logged server-side and the
//! client gets a generic envelope with a machine-readable code and a human
//! message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Failure surfaced by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no entity with id {0}")]
    NotFound(u32),

    /// Connectivity or constraint failure. The detail stays server-side.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("no entity with id {0}")]
    NotFound(u32),

    #[error("the {0} store is currently unavailable")]
    StoreUnavailable(&'static str),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation",
            ApiError::NotFound(_) => "not_found",
            ApiError::StoreUnavailable(_) => "store_unavailable",
        }
    }
}

/// JSON error envelope sent to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            error: self.code(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Convert a store failure for the named resource, logging internal detail.
pub fn store_error(resource: &'static str, err: StoreError) -> ApiError {
    match err {
        StoreError::NotFound(id) => ApiError::NotFound(id),
        StoreError::Unavailable(detail) => {
            tracing::error!(resource, %detail, "store operation failed");
            ApiError::StoreUnavailable(resource)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::Validation("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::StoreUnavailable("task").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_unavailable_hides_detail() {
        let err = store_error(
            "task",
            StoreError::Unavailable("mysql: connection refused (10.0.0.1:3306)".to_string()),
        );
        let message = err.to_string();
        assert_eq!(message, "the task store is currently unavailable");
        assert!(!message.contains("10.0.0.1"));
    }

    #[test]
    fn not_found_passes_through() {
        let err = store_error("user", StoreError::NotFound(99));
        assert!(matches!(err, ApiError::NotFound(99)));
    }
}
