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
        player::{PlayerDto, PlayerFormDto},
    },
    server::{
        controller::util::role::{require_role, PLAYER_EDITORS, PLAYER_READERS},
        error::Error,
        model::app::AppState,
        service::player::PlayerService,
    },
};

pub static PLAYER_TAG: &str = "player";

/// List all players with their eligibility scores
#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "Players ordered by name", body = Vec<PlayerDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Role may not read players", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_players(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, PLAYER_READERS).await?;

    let players = PlayerService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(players)))
}

/// Register a player; eligibility scores are computed from the form
#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    request_body = PlayerFormDto,
    responses(
        (status = 201, description = "Player created", body = PlayerDto),
        (status = 400, description = "Invalid player form", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Role may not edit players", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<PlayerFormDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, PLAYER_EDITORS).await?;

    let player = PlayerService::new(&state.db)
        .create(actor.user_id, &form)
        .await?;

    Ok((StatusCode::CREATED, Json(player)))
}

/// Get a player profile
///
/// Scouts and agents are charged the profile view cost.
#[utoipa::path(
    get,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    responses(
        (status = 200, description = "Player profile", body = PlayerDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 402, description = "Insufficient tokens", body = ErrorDto),
        (status = 403, description = "Role may not read players", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    session: Session,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, PLAYER_READERS).await?;

    let player = PlayerService::new(&state.db)
        .view(actor.user_id, actor.role, player_id)
        .await?;

    Ok((StatusCode::OK, Json(player)))
}

/// Update a player and recompute their scores
#[utoipa::path(
    put,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    request_body = PlayerFormDto,
    responses(
        (status = 200, description = "Player updated", body = PlayerDto),
        (status = 400, description = "Invalid player form", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Role may not edit players", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    session: Session,
    Path(player_id): Path<i32>,
    Json(form): Json<PlayerFormDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, PLAYER_EDITORS).await?;

    let player = PlayerService::new(&state.db)
        .update(actor.user_id, player_id, &form)
        .await?;

    Ok((StatusCode::OK, Json(player)))
}
