use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        admin::{AuditLogDto, FederationPaymentDto, FeeScheduleDto},
        api::ErrorDto,
    },
    server::{
        controller::util::role::{require_role, ADMIN},
        error::Error,
        model::app::AppState,
        service::admin::AdminService,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// Most recent audit log entries
#[utoipa::path(
    get,
    path = "/api/admin/audit-logs",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Audit log entries, newest first", body = Vec<AuditLogDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_audit_logs(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, ADMIN).await?;

    let logs = AdminService::new(&state.db).audit_logs().await?;

    Ok((StatusCode::OK, Json(logs)))
}

#[utoipa::path(
    get,
    path = "/api/admin/federation-payments",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Federation payments", body = Vec<FederationPaymentDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_federation_payments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, ADMIN).await?;

    let payments = AdminService::new(&state.db).payments().await?;

    Ok((StatusCode::OK, Json(payments)))
}

#[utoipa::path(
    get,
    path = "/api/admin/fee-schedules",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Fee schedule", body = Vec<FeeScheduleDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_fee_schedules(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_role(&session, ADMIN).await?;

    let fees = AdminService::new(&state.db).fees().await?;

    Ok((StatusCode::OK, Json(fees)))
}
