//! Error types for transferer

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Error::InvalidRequest(msg.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            // Balance misses answer with an empty body on the wire.
            Error::AccountNotFound(_) => (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "application/json")],
            )
                .into_response(),
            Error::InvalidRequest(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
        }
    }
}
