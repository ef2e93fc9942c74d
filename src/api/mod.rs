//! HTTP API server

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::store::AccountStore;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/accounts",
            get(handlers::list_accounts).post(handlers::create_account),
        )
        .route("/accounts/:account_id/balance", get(handlers::get_balance))
        .fallback(handlers::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper wiring a router around a single store
pub fn create_router_with_store(store: Arc<dyn AccountStore>) -> Router {
    create_router(AppState::new(store))
}
