use axum::{
    body::Body,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        video::{RequestUploadUrlDto, UploadUrlDto},
    },
    server::{
        controller::util::role::{require_role, TEAM},
        error::Error,
        model::app::AppState,
        service::upload::UploadService,
    },
};

pub static UPLOAD_TAG: &str = "upload";

/// Request a single-use upload destination for a video file
#[utoipa::path(
    post,
    path = "/api/uploads/request-url",
    tag = UPLOAD_TAG,
    request_body = RequestUploadUrlDto,
    responses(
        (status = 200, description = "Upload destination issued", body = UploadUrlDto),
        (status = 400, description = "Unsupported content type or size", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Role may not upload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_upload_url(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<RequestUploadUrlDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, TEAM).await?;

    let destination = UploadService::new(&state.db, &state.uploads)
        .request_url(actor.user_id, &request)
        .await?;

    Ok((StatusCode::OK, Json(destination)))
}

/// Upload the raw file body to a destination issued by `request-url`
///
/// The body is streamed to storage and may not exceed the size declared when the destination
/// was requested.
#[utoipa::path(
    put,
    path = "/api/uploads/{token}",
    tag = UPLOAD_TAG,
    params(("token" = String, Path, description = "Upload token from the issued URL")),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 204, description = "File stored"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Unknown upload destination", body = ErrorDto),
        (status = 409, description = "Destination already used", body = ErrorDto),
        (status = 410, description = "Destination expired", body = ErrorDto),
        (status = 413, description = "Body larger than declared", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_upload(
    State(state): State<AppState>,
    session: Session,
    Path(token): Path<String>,
    body: Body,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, TEAM).await?;

    UploadService::new(&state.db, &state.uploads)
        .receive(actor.user_id, &token, body.into_data_stream())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
