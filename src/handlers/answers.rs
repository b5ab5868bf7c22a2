use axum::{extract::State, Json};
use serde::Deserialize;

use super::extract::JsonBody;
use crate::db::try_lock;
use crate::error::AppError;
use crate::services::{self, AnswerVerdict};
use crate::state::AppState;

/// Missing fields decode as `0` / `""`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CheckAnswerRequest {
    pub sentence_id: i64,
    pub user_answer: String,
}

/// POST /api/answer/check
pub async fn check_answer(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CheckAnswerRequest>,
) -> Result<Json<AnswerVerdict>, AppError> {
    let conn = try_lock(&state.db)?;
    let verdict = services::check_answer(&conn, request.sentence_id, &request.user_answer)?;
    Ok(Json(verdict))
}
