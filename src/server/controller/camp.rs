use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, camp::CampDto},
    server::{
        controller::{json_body, path_param, query_params, IncludeTalksQuery},
        error::AppError,
        model::camp::{Camp, CreateCampParam, UpdateCampParam},
        service::camp::CampService,
        state::AppState,
        util::parse::parse_event_date,
    },
};

/// Tag for grouping camp endpoints in OpenAPI documentation
pub static CAMP_TAG: &str = "camp";

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct SearchQuery {
    /// Event date as `YYYY-MM-DD`; a date-time is accepted and its time ignored
    pub the_date: Option<String>,
    /// Load the talks of each camp with their speakers
    #[serde(default)]
    pub include_talks: bool,
}

/// Get all camps.
///
/// Returns every camp, newest event first, optionally with talks and their speakers.
///
/// # Returns
/// - `200 OK` - List of camps
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/camps",
    tag = CAMP_TAG,
    params(IncludeTalksQuery),
    responses(
        (status = 200, description = "Successfully retrieved camps", body = Vec<CampDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_camps(
    State(state): State<AppState>,
    query: Result<Query<IncludeTalksQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let query = query_params(query)?;

    let service = CampService::new(state.repository.as_ref());

    let camps = service.get_all(query.include_talks).await?;

    Ok((StatusCode::OK, Json(into_dtos(camps))))
}

/// Search camps by event date.
///
/// # Returns
/// - `200 OK` - Camps held on the date
/// - `400 Bad Request` - Date missing or not recognizable
/// - `404 Not Found` - No camp is held on the date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/camps/search",
    tag = CAMP_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Camps held on the date", body = Vec<CampDto>),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 404, description = "No camp on the date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_camps(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let query = query_params(query)?;

    let the_date = query
        .the_date
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("The theDate parameter is required".to_string()))?;
    let event_date = parse_event_date(the_date)?;

    let service = CampService::new(state.repository.as_ref());

    let camps = service
        .search_by_date(event_date, query.include_talks)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(camps))))
}

/// Get a camp by moniker.
///
/// # Returns
/// - `200 OK` - The camp
/// - `404 Not Found` - No camp uses the moniker
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/camps/{moniker}",
    tag = CAMP_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        IncludeTalksQuery
    ),
    responses(
        (status = 200, description = "Successfully retrieved camp", body = CampDto),
        (status = 404, description = "Camp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_camp(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<IncludeTalksQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let moniker = path_param(path)?;
    let query = query_params(query)?;

    let service = CampService::new(state.repository.as_ref());

    let camp = service.get_by_moniker(&moniker, query.include_talks).await?;

    Ok((StatusCode::OK, Json(camp.into_dto())))
}

/// Create a camp.
///
/// The moniker of the body becomes the camp's key. Talks in the body are ignored.
///
/// # Returns
/// - `201 Created` - The created camp, with its path in the `Location` header
/// - `400 Bad Request` - Moniker in use or unusable, or invalid body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/camps",
    tag = CAMP_TAG,
    request_body = CampDto,
    responses(
        (status = 201, description = "Successfully created camp", body = CampDto),
        (status = 400, description = "Invalid camp data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_camp(
    State(state): State<AppState>,
    payload: Result<Json<CampDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateCampParam::from_dto(json_body(payload)?)?;

    let service = CampService::new(state.repository.as_ref());

    let (camp, location) = service.create(param, &state.links).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(camp.into_dto()),
    ))
}

/// Update a camp.
///
/// Overwrites name, date, length and location. The moniker in the body is ignored.
///
/// # Returns
/// - `200 OK` - The updated camp
/// - `400 Bad Request` - Invalid body or save rejected
/// - `404 Not Found` - No camp uses the moniker
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/camps/{moniker}",
    tag = CAMP_TAG,
    params(("moniker" = String, Path, description = "Camp moniker")),
    request_body = CampDto,
    responses(
        (status = 200, description = "Successfully updated camp", body = CampDto),
        (status = 400, description = "Invalid camp data", body = ErrorDto),
        (status = 404, description = "Camp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_camp(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<CampDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let moniker = path_param(path)?;

    let param = UpdateCampParam::from_dto(moniker, json_body(payload)?)?;

    let service = CampService::new(state.repository.as_ref());

    let camp = service.update(param).await?;

    Ok((StatusCode::OK, Json(camp.into_dto())))
}

/// Delete a camp and its talks.
///
/// # Returns
/// - `200 OK` - Camp deleted
/// - `400 Bad Request` - Save rejected
/// - `404 Not Found` - No camp uses the moniker
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/camps/{moniker}",
    tag = CAMP_TAG,
    params(("moniker" = String, Path, description = "Camp moniker")),
    responses(
        (status = 200, description = "Successfully deleted camp"),
        (status = 400, description = "Delete rejected", body = ErrorDto),
        (status = 404, description = "Camp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_camp(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let moniker = path_param(path)?;

    let service = CampService::new(state.repository.as_ref());

    service.delete(&moniker).await?;

    Ok(StatusCode::OK)
}

fn into_dtos(camps: Vec<Camp>) -> Vec<CampDto> {
    camps.into_iter().map(Camp::into_dto).collect()
}
