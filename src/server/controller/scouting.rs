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
        scouting::{
            AdvanceInquiryDto, CreateInquiryDto, CreateMessageDto, ScoutingInquiryDto,
            ScoutingMessageDto,
        },
    },
    server::{
        controller::util::role::{require_role, SCOUTING},
        error::Error,
        model::app::AppState,
        service::scouting::ScoutingService,
    },
};

pub static SCOUTING_TAG: &str = "scouting";

/// List transfer inquiries, most recently updated first
#[utoipa::path(
    get,
    path = "/api/scouting/inquiries",
    tag = SCOUTING_TAG,
    responses(
        (status = 200, description = "Inquiries", body = Vec<ScoutingInquiryDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Scout or agent role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_inquiries(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, SCOUTING).await?;

    let inquiries = ScoutingService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(inquiries)))
}

/// Open a transfer inquiry for a player
#[utoipa::path(
    post,
    path = "/api/scouting/inquiries",
    tag = SCOUTING_TAG,
    request_body = CreateInquiryDto,
    responses(
        (status = 201, description = "Inquiry opened", body = ScoutingInquiryDto),
        (status = 400, description = "Invalid inquiry", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 402, description = "Insufficient tokens", body = ErrorDto),
        (status = 403, description = "Scout or agent role required", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_inquiry(
    State(state): State<AppState>,
    session: Session,
    Json(inquiry): Json<CreateInquiryDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, SCOUTING).await?;

    let inquiry = ScoutingService::new(&state.db)
        .create(actor.user_id, &inquiry)
        .await?;

    Ok((StatusCode::CREATED, Json(inquiry)))
}

/// Advance an inquiry one step or close it
#[utoipa::path(
    post,
    path = "/api/scouting/inquiries/{id}/advance",
    tag = SCOUTING_TAG,
    params(("id" = i32, Path, description = "Inquiry ID")),
    request_body = AdvanceInquiryDto,
    responses(
        (status = 200, description = "Inquiry updated", body = ScoutingInquiryDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Scout or agent role required", body = ErrorDto),
        (status = 404, description = "Inquiry not found", body = ErrorDto),
        (status = 409, description = "Not a legal next status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn advance_inquiry(
    State(state): State<AppState>,
    session: Session,
    Path(inquiry_id): Path<i32>,
    Json(advance): Json<AdvanceInquiryDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, SCOUTING).await?;

    let inquiry = ScoutingService::new(&state.db)
        .advance(actor.user_id, inquiry_id, advance.status)
        .await?;

    Ok((StatusCode::OK, Json(inquiry)))
}

/// Message thread of an inquiry, in posting order
#[utoipa::path(
    get,
    path = "/api/scouting/inquiries/{id}/messages",
    tag = SCOUTING_TAG,
    params(("id" = i32, Path, description = "Inquiry ID")),
    responses(
        (status = 200, description = "Messages", body = Vec<ScoutingMessageDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Scout or agent role required", body = ErrorDto),
        (status = 404, description = "Inquiry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_messages(
    State(state): State<AppState>,
    session: Session,
    Path(inquiry_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, SCOUTING).await?;

    let messages = ScoutingService::new(&state.db)
        .list_messages(inquiry_id)
        .await?;

    Ok((StatusCode::OK, Json(messages)))
}

/// Post a message to an open inquiry
#[utoipa::path(
    post,
    path = "/api/scouting/inquiries/{id}/messages",
    tag = SCOUTING_TAG,
    params(("id" = i32, Path, description = "Inquiry ID")),
    request_body = CreateMessageDto,
    responses(
        (status = 201, description = "Message posted", body = ScoutingMessageDto),
        (status = 400, description = "Empty or oversized message", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 402, description = "Insufficient tokens", body = ErrorDto),
        (status = 403, description = "Scout or agent role required", body = ErrorDto),
        (status = 404, description = "Inquiry not found", body = ErrorDto),
        (status = 409, description = "Inquiry is closed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_message(
    State(state): State<AppState>,
    session: Session,
    Path(inquiry_id): Path<i32>,
    Json(message): Json<CreateMessageDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, SCOUTING).await?;

    let message = ScoutingService::new(&state.db)
        .post_message(actor.user_id, inquiry_id, &message.body)
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}
