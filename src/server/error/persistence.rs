use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::model::api::{ErrorCode, ErrorDto};

/// Typed reason for a save the store refused or did not apply.
///
/// The string payloads hold the store's own description and are only ever logged.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// A unique index rejected the write, e.g. two camps racing for one moniker.
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A foreign key rejected the write, e.g. deleting a speaker that still has talks.
    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    /// The store accepted the statement but no row was written.
    #[error("Nothing was saved: {0}")]
    NotSaved(String),
}

impl PersistenceError {
    /// Splits store errors into save failures with a known reason and everything else.
    ///
    /// # Returns
    /// - `Ok(PersistenceError)` - Constraint violation or a write that touched no rows
    /// - `Err(DbErr)` - Any other store error, handed back unchanged
    pub fn classify(err: DbErr) -> Result<Self, DbErr> {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => return Ok(Self::UniqueViolation(msg)),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return Ok(Self::ForeignKeyViolation(msg))
            }
            _ => {}
        }

        match err {
            DbErr::RecordNotUpdated => Ok(Self::NotSaved("no rows were updated".to_string())),
            DbErr::RecordNotInserted => Ok(Self::NotSaved("no rows were inserted".to_string())),
            DbErr::RecordNotFound(msg) => Ok(Self::NotSaved(msg)),
            other => Err(other),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UniqueViolation(_) | Self::ForeignKeyViolation(_) => {
                ErrorCode::ConstraintViolation
            }
            Self::NotSaved(_) => ErrorCode::NotSaved,
        }
    }

    fn client_message(&self) -> &'static str {
        match self {
            Self::UniqueViolation(_) => "A record with the same unique key already exists",
            Self::ForeignKeyViolation(_) => "The record is still referenced by other records",
            Self::NotSaved(_) => "The change could not be saved",
        }
    }
}

/// Converts save failures into 400 Bad Request responses.
///
/// The client receives the error code and a fixed message for the reason; the store's
/// description is logged at warn level and never returned.
impl IntoResponse for PersistenceError {
    fn into_response(self) -> Response {
        tracing::warn!("Save rejected: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                code: self.code(),
                error: self.client_message().to_string(),
            }),
        )
            .into_response()
    }
}
