use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::DashboardStatsDto},
    server::{
        controller::util::role::{require_role, SIGNED_IN},
        error::Error,
        model::app::AppState,
        service::dashboard::DashboardService,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Headline counters and the caller's token balance
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard counters", body = DashboardStatsDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, SIGNED_IN).await?;

    let stats = DashboardService::new(&state.db).stats(actor.user_id).await?;

    Ok((StatusCode::OK, Json(stats)))
}
