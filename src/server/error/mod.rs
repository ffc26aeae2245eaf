//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Classified by kind: missing records become 404, unique constraint
    /// violations 409, everything else 500.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// SQLx database driver error, raised while migrating the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Filesystem error while storing uploads.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected internal failure, never shown to the client in detail.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// A submitted form field failed validation.
    ///
    /// Results in 400 Bad Request; `field` is returned as `error` in the body.
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// The request conflicts with existing data, such as a duplicate name.
    #[error("{0}")]
    Conflict(String),

    /// Request body exceeded the accepted size.
    #[error("{0}")]
    PayloadTooLarge(String),
}

impl AppError {
    /// Shorthand for building a `Validation` error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// HTTP status this error is answered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthErr(err) => err.status_code(),
            Self::Validation { .. } | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::DbErr(err) => db_err_status(err),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Turns a unique constraint violation into `Conflict` with a readable message,
/// passing every other database error through.
pub fn map_unique_violation(err: DbErr, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message.to_string()),
        _ => AppError::DbErr(err),
    }
}

/// Maps a database error to a status using SeaORM's typed error kinds.
fn db_err_status(err: &DbErr) -> StatusCode {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => return StatusCode::CONFLICT,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => return StatusCode::BAD_REQUEST,
        _ => {}
    }

    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the JSON error response shared by every error type.
pub fn error_response(status: StatusCode, message: impl Into<String>, error: Option<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            status: status.as_u16(),
            message: message.into(),
            error,
        }),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `BadRequest`
/// - 404 Not Found - For `NotFound` and missing database records
/// - 409 Conflict - For `Conflict` and unique constraint violations
/// - 413 Payload Too Large - For `PayloadTooLarge`
/// - 500 Internal Server Error - For all other error types (SessionErr, IoErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation { field, message } => error_response(status, message, Some(field)),
            Self::NotFound(msg)
            | Self::BadRequest(msg)
            | Self::Conflict(msg)
            | Self::PayloadTooLarge(msg) => error_response(status, msg, None),
            Self::DbErr(err) => match status {
                StatusCode::CONFLICT => {
                    tracing::debug!("Unique constraint violation: {}", err);
                    error_response(status, "Resource already exists", None)
                }
                StatusCode::NOT_FOUND => error_response(status, "Resource not found", None),
                StatusCode::BAD_REQUEST => {
                    error_response(status, "Referenced resource does not exist", None)
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = AppError::validation("name", "Name is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "name: Name is required");
    }

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err = AppError::from(DbErr::RecordNotFound("category 1".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn record_not_updated_maps_to_not_found() {
        let err = AppError::from(DbErr::RecordNotUpdated);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn other_db_errors_are_internal() {
        let err = AppError::from(DbErr::Custom("boom".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn auth_errors_keep_their_status() {
        let err = AppError::from(AuthError::AccessDenied(1, "test".to_string()));
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn payload_too_large_response() {
        let response = AppError::PayloadTooLarge("too big".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
