use axum::{extract::State, http::StatusCode};

use crate::db::{self, try_lock};
use crate::state::AppState;

/// GET /api/liveness
pub async fn liveness() -> &'static str {
    "OK"
}

/// GET /api/readiness - succeeds once the database answers
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, &'static str) {
    let ready = try_lock(&state.db)
        .map_err(|e| e.to_string())
        .and_then(|conn| db::ping(&conn).map_err(|e| e.to_string()));

    match ready {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Database not ready")
        }
    }
}
