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
        compliance::{ComplianceDocumentDto, GenerateDocumentDto},
    },
    server::{
        controller::util::role::{require_role, TEAM},
        error::Error,
        model::app::AppState,
        service::compliance::ComplianceService,
    },
};

pub static COMPLIANCE_TAG: &str = "compliance";

/// List compliance documents, newest first
#[utoipa::path(
    get,
    path = "/api/compliance/documents",
    tag = COMPLIANCE_TAG,
    responses(
        (status = 200, description = "Compliance documents", body = Vec<ComplianceDocumentDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Role may not view compliance documents", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_documents(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, TEAM).await?;

    let documents = ComplianceService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(documents)))
}

/// Generate a draft document from the player's current eligibility scores
#[utoipa::path(
    post,
    path = "/api/compliance/documents",
    tag = COMPLIANCE_TAG,
    request_body = GenerateDocumentDto,
    responses(
        (status = 201, description = "Draft created", body = ComplianceDocumentDto),
        (status = 400, description = "Invalid reporting period", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 402, description = "Insufficient tokens", body = ErrorDto),
        (status = 403, description = "Role may not generate documents", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_document(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<GenerateDocumentDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, TEAM).await?;

    let document = ComplianceService::new(&state.db)
        .generate(actor.user_id, &request)
        .await?;

    Ok((StatusCode::CREATED, Json(document)))
}

/// Submit a draft for embassy verification
#[utoipa::path(
    post,
    path = "/api/compliance/documents/{id}/submit",
    tag = COMPLIANCE_TAG,
    params(("id" = i32, Path, description = "Compliance document ID")),
    responses(
        (status = 200, description = "Document submitted", body = ComplianceDocumentDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Role may not submit documents", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 409, description = "Document is not a draft", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_document(
    State(state): State<AppState>,
    session: Session,
    Path(document_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, TEAM).await?;

    let document = ComplianceService::new(&state.db)
        .submit(actor.user_id, document_id)
        .await?;

    Ok((StatusCode::OK, Json(document)))
}
