//! Axum-specific error types and mappings.
//!
//! This module maps `CoreError` and `RepositoryError` to HTTP status codes
//! and JSON response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::{CoreError, RepositoryError, ResourceNotFound};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A looked-up record does not exist.
    #[error("{0}")]
    NotFound(ResourceNotFound),

    /// Bad request (invalid input or constraint violation).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    /// Stable error type discriminant for client-side handling
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    error_type: Option<String>,
    /// Optional additional metadata for specific error types
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<serde_json::Value>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, error_type, metadata) = match &self {
            Self::NotFound(not_found) => {
                let metadata_json = serde_json::json!({
                    "resourceKind": not_found.resource_kind,
                    "fieldName": not_found.field_name,
                    "fieldValue": not_found.field_value,
                });
                (
                    StatusCode::NOT_FOUND,
                    not_found.to_string(),
                    Some("RESOURCE_NOT_FOUND".to_string()),
                    Some(metadata_json),
                )
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None, None),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone(), None, None)
            }
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
            error_type,
            metadata,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(not_found) => Self::NotFound(not_found),
            CoreError::Repository(repo_err) => repo_err.into(),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
            RepositoryError::Constraint(msg) => Self::BadRequest(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err: HttpError = CoreError::from(ResourceNotFound::new("Employee", "Id", 999)).into();
        assert!(matches!(err, HttpError::NotFound(_)));
        assert_eq!(err.to_string(), "Employee not found with Id: '999'");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_constraint_maps_to_400() {
        let err: HttpError =
            CoreError::from(RepositoryError::Constraint("NOT NULL".into())).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_maps_to_500() {
        let err: HttpError = RepositoryError::Storage("disk I/O error".into()).into();
        assert_eq!(err.to_string(), "Internal error: Storage: disk I/O error");
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
