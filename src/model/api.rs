use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable, machine-readable error category returned with every error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    BadRequest,
    Validation,
    ConstraintViolation,
    NotSaved,
    InternalError,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub code: ErrorCode,
    pub error: String,
}
