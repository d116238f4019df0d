//! HTTP handlers for camps, talks and speakers.
//!
//! Controllers convert DTOs to operation parameters, call the service layer with the
//! repository from `AppState`, and convert the resulting domain models back to DTOs.
//! Every handler is annotated with `#[utoipa::path]` and registered through
//! `utoipa_axum::routes!`, which collects the OpenAPI document served at
//! `/api/openapi.json`.

pub mod camp;
pub mod speaker;
pub mod talk;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

use crate::server::error::AppError;

/// Root of the OpenAPI document; paths are added by the router.
#[derive(OpenApi)]
#[openapi(
    info(title = "Code Camp API", description = "Camps, their talks and speakers"),
    tags(
        (name = "camp", description = "Conference events"),
        (name = "talk", description = "Talks of a camp"),
        (name = "speaker", description = "Speakers")
    )
)]
pub struct ApiDoc;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct IncludeTalksQuery {
    /// Load the talks of each camp with their speakers
    #[serde(default)]
    pub include_talks: bool,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct IncludeSpeakersQuery {
    /// Load the speaker of each talk
    #[serde(default)]
    pub include_speakers: bool,
}

/// Unwraps a JSON body, reporting malformed input as a bad request.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}

/// Unwraps path parameters, e.g. a speaker ID that is not a number.
fn path_param<T>(path: Result<Path<T>, PathRejection>) -> Result<T, AppError> {
    match path {
        Ok(Path(value)) => Ok(value),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}

fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    match query {
        Ok(Query(value)) => Ok(value),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}

#[cfg(test)]
mod test;
