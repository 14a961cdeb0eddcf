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
        embassy::{EmbassyVerificationDto, ReviewDecisionDto},
        status::VerificationStatus,
    },
    server::{
        controller::util::role::{require_role, EMBASSY},
        error::Error,
        model::app::AppState,
        service::embassy::EmbassyService,
    },
};

pub static EMBASSY_TAG: &str = "embassy";

/// Verification review queue, oldest first
#[utoipa::path(
    get,
    path = "/api/embassy/verifications",
    tag = EMBASSY_TAG,
    responses(
        (status = 200, description = "Verifications", body = Vec<EmbassyVerificationDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Embassy role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_verifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, EMBASSY).await?;

    let verifications = EmbassyService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(verifications)))
}

/// Start reviewing a pending verification
#[utoipa::path(
    post,
    path = "/api/embassy/verifications/{id}/review",
    tag = EMBASSY_TAG,
    params(("id" = i32, Path, description = "Verification ID")),
    request_body = ReviewDecisionDto,
    responses(
        (status = 200, description = "Verification under review", body = EmbassyVerificationDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Embassy role required", body = ErrorDto),
        (status = 404, description = "Verification not found", body = ErrorDto),
        (status = 409, description = "Verification is not pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_review(
    State(state): State<AppState>,
    session: Session,
    Path(verification_id): Path<i32>,
    body: Option<Json<ReviewDecisionDto>>,
) -> Result<impl IntoResponse, Error> {
    decide(
        &state,
        &session,
        verification_id,
        VerificationStatus::UnderReview,
        body,
    )
    .await
}

/// Approve a verification under review, marking its document verified
#[utoipa::path(
    post,
    path = "/api/embassy/verifications/{id}/approve",
    tag = EMBASSY_TAG,
    params(("id" = i32, Path, description = "Verification ID")),
    request_body = ReviewDecisionDto,
    responses(
        (status = 200, description = "Verification approved", body = EmbassyVerificationDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Embassy role required", body = ErrorDto),
        (status = 404, description = "Verification not found", body = ErrorDto),
        (status = 409, description = "Verification is not under review", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_verification(
    State(state): State<AppState>,
    session: Session,
    Path(verification_id): Path<i32>,
    body: Option<Json<ReviewDecisionDto>>,
) -> Result<impl IntoResponse, Error> {
    decide(
        &state,
        &session,
        verification_id,
        VerificationStatus::Approved,
        body,
    )
    .await
}

/// Reject a verification under review, marking its document rejected
#[utoipa::path(
    post,
    path = "/api/embassy/verifications/{id}/reject",
    tag = EMBASSY_TAG,
    params(("id" = i32, Path, description = "Verification ID")),
    request_body = ReviewDecisionDto,
    responses(
        (status = 200, description = "Verification rejected", body = EmbassyVerificationDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Embassy role required", body = ErrorDto),
        (status = 404, description = "Verification not found", body = ErrorDto),
        (status = 409, description = "Verification is not under review", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_verification(
    State(state): State<AppState>,
    session: Session,
    Path(verification_id): Path<i32>,
    body: Option<Json<ReviewDecisionDto>>,
) -> Result<impl IntoResponse, Error> {
    decide(
        &state,
        &session,
        verification_id,
        VerificationStatus::Rejected,
        body,
    )
    .await
}

/// Look up a verification by the code printed on a submitted document
///
/// Public so that third parties can confirm a document's status.
#[utoipa::path(
    get,
    path = "/api/embassy/verify/{code}",
    tag = EMBASSY_TAG,
    params(("code" = String, Path, description = "Verification code")),
    responses(
        (status = 200, description = "Verification found", body = EmbassyVerificationDto),
        (status = 404, description = "Unknown verification code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let verification = EmbassyService::new(&state.db).lookup(&code).await?;

    Ok((StatusCode::OK, Json(verification)))
}

async fn decide(
    state: &AppState,
    session: &Session,
    verification_id: i32,
    to: VerificationStatus,
    body: Option<Json<ReviewDecisionDto>>,
) -> Result<(StatusCode, Json<EmbassyVerificationDto>), Error> {
    let actor = require_role(session, EMBASSY).await?;
    let notes = body.and_then(|Json(decision)| decision.notes);

    let verification = EmbassyService::new(&state.db)
        .transition(actor.user_id, verification_id, to, notes)
        .await?;

    Ok((StatusCode::OK, Json(verification)))
}
