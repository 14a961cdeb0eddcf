use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        federation::{FederationLetterDto, NationalityCountDto, RequestLetterDto},
        status::LetterStatus,
    },
    server::{
        controller::util::role::{require_role, FEDERATION, LETTER_READERS, TEAM},
        error::Error,
        model::app::AppState,
        service::federation::FederationService,
    },
};

pub static FEDERATION_TAG: &str = "federation";

/// List federation letters, newest first
#[utoipa::path(
    get,
    path = "/api/federation/letters",
    tag = FEDERATION_TAG,
    responses(
        (status = 200, description = "Federation letters", body = Vec<FederationLetterDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Team or federation admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_letters(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, LETTER_READERS).await?;

    let letters = FederationService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(letters)))
}

/// Request a clearance letter for a player
#[utoipa::path(
    post,
    path = "/api/federation/letters",
    tag = FEDERATION_TAG,
    request_body = RequestLetterDto,
    responses(
        (status = 201, description = "Letter requested", body = FederationLetterDto),
        (status = 400, description = "Invalid letter request", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Team role required", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_letter(
    State(state): State<AppState>,
    session: Session,
    Json(letter): Json<RequestLetterDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, TEAM).await?;

    let letter = FederationService::new(&state.db)
        .request(actor.user_id, &letter)
        .await?;

    Ok((StatusCode::CREATED, Json(letter)))
}

/// Issue a requested letter
#[utoipa::path(
    post,
    path = "/api/federation/letters/{id}/issue",
    tag = FEDERATION_TAG,
    params(("id" = i32, Path, description = "Letter ID")),
    responses(
        (status = 200, description = "Letter issued", body = FederationLetterDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Federation admin role required", body = ErrorDto),
        (status = 404, description = "Letter not found", body = ErrorDto),
        (status = 409, description = "Letter already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn issue_letter(
    State(state): State<AppState>,
    session: Session,
    Path(letter_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, FEDERATION).await?;

    let letter = FederationService::new(&state.db)
        .decide(actor.user_id, letter_id, LetterStatus::Issued)
        .await?;

    Ok((StatusCode::OK, Json(letter)))
}

/// Decline a requested letter
#[utoipa::path(
    post,
    path = "/api/federation/letters/{id}/decline",
    tag = FEDERATION_TAG,
    params(("id" = i32, Path, description = "Letter ID")),
    responses(
        (status = 200, description = "Letter declined", body = FederationLetterDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Federation admin role required", body = ErrorDto),
        (status = 404, description = "Letter not found", body = ErrorDto),
        (status = 409, description = "Letter already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decline_letter(
    State(state): State<AppState>,
    session: Session,
    Path(letter_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, FEDERATION).await?;

    let letter = FederationService::new(&state.db)
        .decide(actor.user_id, letter_id, LetterStatus::Declined)
        .await?;

    Ok((StatusCode::OK, Json(letter)))
}

/// Registered players per nationality, plotted on the federation map
#[utoipa::path(
    get,
    path = "/api/federation/map",
    tag = FEDERATION_TAG,
    responses(
        (status = 200, description = "Player counts by nationality", body = Vec<NationalityCountDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Federation admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_nationality_map(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, FEDERATION).await?;

    let counts = FederationService::new(&state.db)
        .nationality_counts()
        .await?;

    Ok((StatusCode::OK, Json(counts)))
}
