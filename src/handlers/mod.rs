pub mod answers;
pub mod extract;
pub mod health;
pub mod sentences;

use axum::http::StatusCode;

use crate::error::AppError;

pub use answers::check_answer;
pub use health::{liveness, readiness};
pub use sentences::{random_sentence, report_sentence};

/// CORS preflight: headers come from the router layers, nothing else to do.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
