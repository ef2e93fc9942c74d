//! API handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::api::AppState;
use crate::error::Error;
use crate::types::{Account, AccountBalance};

/// List all accounts in insertion order
pub async fn list_accounts(State(state): State<AppState>) -> Json<Vec<Account>> {
    Json(state.store.list_accounts().await)
}

/// Create an account from the request body and echo it back
///
/// A malformed body is a client error, not a fatal one: the rejection is
/// mapped to a 400 response and the service keeps serving.
pub async fn create_account(
    State(state): State<AppState>,
    payload: Result<Json<Account>, JsonRejection>,
) -> Result<(StatusCode, Json<Account>), Error> {
    let Json(account) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected create-account body");
        Error::invalid_request(rejection.body_text())
    })?;

    state.store.add_account(account.clone()).await;

    Ok((StatusCode::CREATED, Json(account)))
}

/// Look up an account's balance by the path-embedded id
///
/// An unknown id and a stored empty-string balance are the same observable
/// condition on the wire: 404 with an empty body.
pub async fn get_balance(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountBalance>, Error> {
    match state.store.balance_of(&account_id).await {
        Some(balance) if !balance.is_empty() => Ok(Json(AccountBalance { balance })),
        _ => Err(Error::AccountNotFound(account_id)),
    }
}

/// Explicit handler for unmatched method/path pairs
pub async fn fallback() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "no such endpoint" })),
    )
        .into_response()
}
