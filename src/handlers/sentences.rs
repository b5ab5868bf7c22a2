//! Sentence endpoints: random draw and reporting.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use super::extract::JsonBody;
use crate::db::try_lock;
use crate::domain::PracticeSentence;
use crate::error::AppError;
use crate::services;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReportSentenceRequest {
    pub sentence_id: i64,
}

/// GET /api/sentence/random
pub async fn random_sentence(
    State(state): State<AppState>,
) -> Result<Json<PracticeSentence>, AppError> {
    let conn = try_lock(&state.db)?;
    let sentence = state.selector.pick(&conn)?;
    Ok(Json(sentence))
}

/// POST /api/sentence/report
pub async fn report_sentence(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ReportSentenceRequest>,
) -> Result<StatusCode, AppError> {
    let conn = try_lock(&state.db)?;
    services::report_sentence(&conn, request.sentence_id)?;
    Ok(StatusCode::NO_CONTENT)
}
