use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        video::{CreateVideoDto, VideoDto},
    },
    server::{
        controller::util::role::{require_role, TEAM},
        error::Error,
        model::app::AppState,
        service::video::VideoService,
    },
};

pub static VIDEO_TAG: &str = "video";

/// List match videos, newest first
#[utoipa::path(
    get,
    path = "/api/videos",
    tag = VIDEO_TAG,
    responses(
        (status = 200, description = "Videos", body = Vec<VideoDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Role may not view videos", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_videos(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, TEAM).await?;

    let videos = VideoService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(videos)))
}

/// Create a video from a completed upload
#[utoipa::path(
    post,
    path = "/api/videos",
    tag = VIDEO_TAG,
    request_body = CreateVideoDto,
    responses(
        (status = 201, description = "Video created", body = VideoDto),
        (status = 400, description = "Invalid video details", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Role may not create videos", body = ErrorDto),
        (status = 404, description = "Unknown upload or player", body = ErrorDto),
        (status = 409, description = "Upload missing or already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_video(
    State(state): State<AppState>,
    session: Session,
    Json(video): Json<CreateVideoDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, TEAM).await?;

    let video = VideoService::new(&state.db)
        .create(actor.user_id, &video)
        .await?;

    Ok((StatusCode::CREATED, Json(video)))
}
