use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        talk::{TalkDto, TalkTargetDto},
    },
    server::{
        controller::{json_body, path_param, query_params, IncludeSpeakersQuery},
        error::AppError,
        model::talk::{CreateTalkParam, Talk, UpdateTalkParam},
        service::talk::TalkService,
        state::AppState,
    },
};

/// Tag for grouping talk endpoints in OpenAPI documentation
pub static TALK_TAG: &str = "talk";

/// Get the talks of a camp.
///
/// # Returns
/// - `200 OK` - Talks of the camp
/// - `404 Not Found` - No camp uses the moniker
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/camps/{moniker}/talks",
    tag = TALK_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        IncludeSpeakersQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved talks", body = Vec<TalkDto>),
        (status = 404, description = "Camp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_talks(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<IncludeSpeakersQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let moniker = path_param(path)?;
    let query = query_params(query)?;

    let service = TalkService::new(state.repository.as_ref());

    let talks = service.get_all(&moniker, query.include_speakers).await?;

    let dtos: Vec<TalkDto> = talks.into_iter().map(Talk::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get one talk of a camp.
///
/// # Returns
/// - `200 OK` - The talk
/// - `404 Not Found` - The camp has no talk with the ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/camps/{moniker}/talks/{id}",
    tag = TALK_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        ("id" = i32, Path, description = "Talk ID"),
        IncludeSpeakersQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved talk", body = TalkDto),
        (status = 404, description = "Talk not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_talk(
    State(state): State<AppState>,
    path: Result<Path<(String, i32)>, PathRejection>,
    query: Result<Query<IncludeSpeakersQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (moniker, id) = path_param(path)?;
    let query = query_params(query)?;

    let service = TalkService::new(state.repository.as_ref());

    let talk = service
        .get_by_id(&moniker, id, query.include_speakers)
        .await?;

    Ok((StatusCode::OK, Json(talk.into_dto())))
}

/// Create a talk in a camp.
///
/// The body must reference an existing speaker through `speaker.speakerId`.
///
/// # Returns
/// - `201 Created` - The created talk with its speaker, path in the `Location` header
/// - `400 Bad Request` - Camp missing, speaker missing or unknown, or invalid body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/camps/{moniker}/talks",
    tag = TALK_TAG,
    params(("moniker" = String, Path, description = "Camp moniker")),
    request_body = TalkTargetDto,
    responses(
        (status = 201, description = "Successfully created talk", body = TalkDto),
        (status = 400, description = "Invalid talk data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_talk(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<TalkTargetDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let moniker = path_param(path)?;

    let param = CreateTalkParam::from_dto(moniker, json_body(payload)?)?;

    let service = TalkService::new(state.repository.as_ref());

    let (talk, location) = service.create(param, &state.links).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(talk.into_dto()),
    ))
}

/// Update a talk of a camp.
///
/// A speaker that cannot be found leaves the talk's current speaker in place.
///
/// # Returns
/// - `200 OK` - The updated talk with its speaker
/// - `400 Bad Request` - Invalid body or save rejected
/// - `404 Not Found` - The camp has no talk with the ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/camps/{moniker}/talks/{id}",
    tag = TALK_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        ("id" = i32, Path, description = "Talk ID")
    ),
    request_body = TalkTargetDto,
    responses(
        (status = 200, description = "Successfully updated talk", body = TalkDto),
        (status = 400, description = "Invalid talk data", body = ErrorDto),
        (status = 404, description = "Talk not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_talk(
    State(state): State<AppState>,
    path: Result<Path<(String, i32)>, PathRejection>,
    payload: Result<Json<TalkTargetDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (moniker, id) = path_param(path)?;

    let param = UpdateTalkParam::from_dto(moniker, id, json_body(payload)?)?;

    let service = TalkService::new(state.repository.as_ref());

    let talk = service.update(param).await?;

    Ok((StatusCode::OK, Json(talk.into_dto())))
}

/// Delete a talk of a camp.
///
/// # Returns
/// - `200 OK` - Talk deleted
/// - `400 Bad Request` - Save rejected
/// - `404 Not Found` - The camp has no talk with the ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/camps/{moniker}/talks/{id}",
    tag = TALK_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        ("id" = i32, Path, description = "Talk ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted talk"),
        (status = 400, description = "Delete rejected", body = ErrorDto),
        (status = 404, description = "Talk not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_talk(
    State(state): State<AppState>,
    path: Result<Path<(String, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (moniker, id) = path_param(path)?;

    let service = TalkService::new(state.repository.as_ref());

    service.delete(&moniker, id).await?;

    Ok(StatusCode::OK)
}
