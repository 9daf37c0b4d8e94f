use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use podium_protocol::{ErrorResponse, ProtocolError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("bad request: {0}")]
    BadRequest(#[from] ProtocolError),

    #[error("store error: {0}")]
    Store(#[from] podium_store::StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(e) => {
                tracing::debug!(error = %e, "rejected submission");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(e.client_message())),
                )
                    .into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("server error")),
                )
                    .into_response()
            }
        }
    }
}
