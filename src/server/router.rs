use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{camp, speaker, talk, ApiDoc},
    state::AppState,
};

/// Builds the API routes and serves their OpenAPI document at `/api/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(camp::get_camps, camp::create_camp))
        .routes(routes!(camp::search_camps))
        .routes(routes!(camp::get_camp, camp::update_camp, camp::delete_camp))
        .routes(routes!(talk::get_talks, talk::create_talk))
        .routes(routes!(talk::get_talk, talk::update_talk, talk::delete_talk))
        .routes(routes!(speaker::get_camp_speakers))
        .routes(routes!(speaker::get_speakers, speaker::create_speaker))
        .routes(routes!(
            speaker::get_speaker,
            speaker::update_speaker,
            speaker::delete_speaker
        ))
        .split_for_parts();

    router.route(
        "/api/openapi.json",
        get(move || std::future::ready(Json(api.clone()))),
    )
}

/// Applies request tracing and CORS to the routes and binds the state.
pub fn app(state: AppState) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
