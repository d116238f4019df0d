use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        speaker::{SpeakerDto, SpeakerTargetDto},
    },
    server::{
        controller::{json_body, path_param},
        error::AppError,
        model::speaker::{Speaker, SpeakerFields},
        service::speaker::SpeakerService,
        state::AppState,
    },
};

/// Tag for grouping speaker endpoints in OpenAPI documentation
pub static SPEAKER_TAG: &str = "speaker";

/// Get all speakers.
#[utoipa::path(
    get,
    path = "/api/speakers",
    tag = SPEAKER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved speakers", body = Vec<SpeakerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_speakers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = SpeakerService::new(state.repository.as_ref());

    let speakers = service.get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(speakers))))
}

/// Get the speakers giving talks at a camp.
///
/// Each speaker appears once, however many talks they give at the camp.
///
/// # Returns
/// - `200 OK` - Speakers of the camp
/// - `404 Not Found` - No camp uses the moniker
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/camps/{moniker}/speakers",
    tag = SPEAKER_TAG,
    params(("moniker" = String, Path, description = "Camp moniker")),
    responses(
        (status = 200, description = "Successfully retrieved speakers", body = Vec<SpeakerDto>),
        (status = 404, description = "Camp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_camp_speakers(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let moniker = path_param(path)?;

    let service = SpeakerService::new(state.repository.as_ref());

    let speakers = service.get_for_camp(&moniker).await?;

    Ok((StatusCode::OK, Json(into_dtos(speakers))))
}

/// Get a speaker by ID.
#[utoipa::path(
    get,
    path = "/api/speakers/{id}",
    tag = SPEAKER_TAG,
    params(("id" = i32, Path, description = "Speaker ID")),
    responses(
        (status = 200, description = "Successfully retrieved speaker", body = SpeakerDto),
        (status = 404, description = "Speaker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_speaker(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_param(path)?;

    let service = SpeakerService::new(state.repository.as_ref());

    let speaker = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(speaker.into_dto())))
}

/// Create a speaker.
///
/// Only the fields of the target shape are writable; the ID is assigned by the store.
///
/// # Returns
/// - `201 Created` - The created speaker, with its path in the `Location` header
/// - `400 Bad Request` - Name missing or too long, or invalid body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/speakers",
    tag = SPEAKER_TAG,
    request_body = SpeakerTargetDto,
    responses(
        (status = 201, description = "Successfully created speaker", body = SpeakerDto),
        (status = 400, description = "Invalid speaker data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_speaker(
    State(state): State<AppState>,
    payload: Result<Json<SpeakerTargetDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let fields = SpeakerFields::from_dto(json_body(payload)?)?;

    let service = SpeakerService::new(state.repository.as_ref());

    let (speaker, location) = service.create(fields, &state.links).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(speaker.into_dto()),
    ))
}

/// Update a speaker.
#[utoipa::path(
    put,
    path = "/api/speakers/{id}",
    tag = SPEAKER_TAG,
    params(("id" = i32, Path, description = "Speaker ID")),
    request_body = SpeakerTargetDto,
    responses(
        (status = 200, description = "Successfully updated speaker", body = SpeakerDto),
        (status = 400, description = "Invalid speaker data", body = ErrorDto),
        (status = 404, description = "Speaker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_speaker(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<SpeakerTargetDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_param(path)?;

    let fields = SpeakerFields::from_dto(json_body(payload)?)?;

    let service = SpeakerService::new(state.repository.as_ref());

    let speaker = service.update(id, fields).await?;

    Ok((StatusCode::OK, Json(speaker.into_dto())))
}

/// Delete a speaker.
///
/// # Returns
/// - `200 OK` - Speaker deleted
/// - `400 Bad Request` - Talks still reference the speaker
/// - `404 Not Found` - No speaker with the ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/speakers/{id}",
    tag = SPEAKER_TAG,
    params(("id" = i32, Path, description = "Speaker ID")),
    responses(
        (status = 200, description = "Successfully deleted speaker"),
        (status = 400, description = "Speaker still has talks", body = ErrorDto),
        (status = 404, description = "Speaker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_speaker(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_param(path)?;

    let service = SpeakerService::new(state.repository.as_ref());

    service.delete(id).await?;

    Ok(StatusCode::OK)
}

fn into_dtos(speakers: Vec<Speaker>) -> Vec<SpeakerDto> {
    speakers.into_iter().map(Speaker::into_dto).collect()
}
