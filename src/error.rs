//! API error taxonomy and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbLockError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body could not be decoded
    #[error("invalid request body: {0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error(transparent)]
    Unavailable(#[from] DbLockError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Storage(_) | Self::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Validation(detail) => {
                tracing::debug!(%detail, "Rejected request body");
                "Invalid request body"
            }
            Self::NotFound(message) => *message,
            Self::MethodNotAllowed => "Method not allowed",
            Self::Storage(_) | Self::Unavailable(_) => {
                tracing::error!(error = %self, "Request failed");
                "Internal server error"
            }
        };

        (self.status(), message).into_response()
    }
}
