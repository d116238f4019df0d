//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Every error response carries an `ErrorCode`. Messages for 404 and 400 responses are
//! written by the service layer for clients; 500 responses always carry a fixed message
//! and the cause is only logged.

pub mod config;
pub mod persistence;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorCode, ErrorDto},
    server::error::{config::ConfigError, persistence::PersistenceError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Store errors are not converted with `#[from]`:
/// the manual `From<DbErr>` impl first separates save failures with a known reason
/// (`Persistence`) from store failures (`DbErr`).
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Save rejected or not applied by the store, with its reason.
    ///
    /// Delegates to `PersistenceError::into_response()`, which results in 400 Bad Request.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Database operation error from SeaORM that is not a save failure.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(sea_orm::DbErr),

    /// Socket or listener error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

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

    /// Request body failed binding validation (required field, length limit).
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    Validation(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        match PersistenceError::classify(err) {
            Ok(reason) => AppError::Persistence(reason),
            Err(err) => AppError::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `Validation` and `Persistence` variants
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, IoErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Persistence(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, ErrorCode::NotFound, msg),
            Self::BadRequest(msg) => {
                error_response(StatusCode::BAD_REQUEST, ErrorCode::BadRequest, msg)
            }
            Self::Validation(msg) => {
                error_response(StatusCode::BAD_REQUEST, ErrorCode::Validation, msg)
            }
            Self::InternalError(msg) => {
                InternalServerError(format!("Internal error: {}", msg)).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, code: ErrorCode, error: String) -> Response {
    (status, Json(ErrorDto { code, error })).into_response()
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
            ErrorCode::InternalError,
            "Internal server error".to_string(),
        )
    }
}
