//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here with its OpenAPI specification, and Swagger UI is served
//! at `/api/docs` with the generated document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be given state and merged
/// into the main application router.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db, uploads: config.upload_settings() });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "PitchPass", description = "PitchPass API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Dashboard counters"),
        (name = controller::player::PLAYER_TAG, description = "Player records and eligibility scores"),
        (name = controller::upload::UPLOAD_TAG, description = "Two-phase video uploads"),
        (name = controller::video::VIDEO_TAG, description = "Match videos"),
        (name = controller::compliance::COMPLIANCE_TAG, description = "Compliance documents"),
        (name = controller::embassy::EMBASSY_TAG, description = "Embassy verification"),
        (name = controller::scouting::SCOUTING_TAG, description = "Transfer inquiries and messages"),
        (name = controller::token::TOKEN_TAG, description = "Token balance and spending"),
        (name = controller::federation::FEDERATION_TAG, description = "Federation letters and map"),
        (name = controller::admin::ADMIN_TAG, description = "Read-only admin records"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::dashboard::get_stats))
        .routes(routes!(
            controller::player::list_players,
            controller::player::create_player
        ))
        .routes(routes!(
            controller::player::get_player,
            controller::player::update_player
        ))
        .routes(routes!(controller::upload::request_upload_url))
        .routes(routes!(controller::upload::put_upload))
        .routes(routes!(
            controller::video::list_videos,
            controller::video::create_video
        ))
        .routes(routes!(
            controller::compliance::list_documents,
            controller::compliance::generate_document
        ))
        .routes(routes!(controller::compliance::submit_document))
        .routes(routes!(controller::embassy::list_verifications))
        .routes(routes!(controller::embassy::start_review))
        .routes(routes!(controller::embassy::approve_verification))
        .routes(routes!(controller::embassy::reject_verification))
        .routes(routes!(controller::embassy::verify_code))
        .routes(routes!(
            controller::scouting::list_inquiries,
            controller::scouting::create_inquiry
        ))
        .routes(routes!(controller::scouting::advance_inquiry))
        .routes(routes!(
            controller::scouting::list_messages,
            controller::scouting::post_message
        ))
        .routes(routes!(controller::token::get_balance))
        .routes(routes!(controller::token::list_transactions))
        .routes(routes!(controller::token::spend_tokens))
        .routes(routes!(controller::token::purchase_tokens))
        .routes(routes!(
            controller::federation::list_letters,
            controller::federation::request_letter
        ))
        .routes(routes!(controller::federation::issue_letter))
        .routes(routes!(controller::federation::decline_letter))
        .routes(routes!(controller::federation::get_nationality_map))
        .routes(routes!(controller::admin::list_audit_logs))
        .routes(routes!(controller::admin::list_federation_payments))
        .routes(routes!(controller::admin::list_fee_schedules))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
