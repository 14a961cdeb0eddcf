use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        token::{PurchaseTokensDto, SpendTokensDto, TokenBalanceDto, TokenTransactionDto},
    },
    server::{
        controller::util::role::{require_role, SIGNED_IN},
        error::Error,
        model::app::AppState,
        service::token::TokenService,
    },
};

pub static TOKEN_TAG: &str = "token";

/// Current token balance of the signed-in user
#[utoipa::path(
    get,
    path = "/api/tokens/balance",
    tag = TOKEN_TAG,
    responses(
        (status = 200, description = "Token balance", body = TokenBalanceDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_balance(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, SIGNED_IN).await?;

    let balance = TokenService::new(&state.db).balance(actor.user_id).await?;

    Ok((StatusCode::OK, Json(balance)))
}

/// Token ledger of the signed-in user, newest first
#[utoipa::path(
    get,
    path = "/api/tokens/transactions",
    tag = TOKEN_TAG,
    responses(
        (status = 200, description = "Token transactions", body = Vec<TokenTransactionDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_transactions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, SIGNED_IN).await?;

    let transactions = TokenService::new(&state.db)
        .transactions(actor.user_id)
        .await?;

    Ok((StatusCode::OK, Json(transactions)))
}

/// Spend tokens on a gated action
#[utoipa::path(
    post,
    path = "/api/tokens/spend",
    tag = TOKEN_TAG,
    request_body = SpendTokensDto,
    responses(
        (status = 200, description = "Tokens spent", body = TokenBalanceDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 402, description = "Insufficient tokens", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn spend_tokens(
    State(state): State<AppState>,
    session: Session,
    Json(spend): Json<SpendTokensDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, SIGNED_IN).await?;

    let balance = TokenService::new(&state.db)
        .spend(actor.user_id, spend.action, spend.reference.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(balance)))
}

/// Buy a token package
#[utoipa::path(
    post,
    path = "/api/tokens/purchase",
    tag = TOKEN_TAG,
    request_body = PurchaseTokensDto,
    responses(
        (status = 200, description = "Tokens credited", body = TokenBalanceDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn purchase_tokens(
    State(state): State<AppState>,
    session: Session,
    Json(purchase): Json<PurchaseTokensDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_role(&session, SIGNED_IN).await?;

    let balance = TokenService::new(&state.db)
        .purchase(actor.user_id, purchase.package)
        .await?;

    Ok((StatusCode::OK, Json(balance)))
}
