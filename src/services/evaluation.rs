//! Translation checking against a sentence's canonical English answer.
//!
//! Matching is exact after normalization (trim + lowercase). Every check
//! appends one history row; the history returned to the caller is read
//! before that insert, so it only holds earlier wrong answers.

use chrono::Utc;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::db::{self, LogOnError};
use crate::domain::{AnswerRecord, WrongAnswer};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerVerdict {
    pub is_correct: bool,
    pub correct_answer: String,
    /// Prior wrong answers, newest first
    pub histories: Vec<WrongAnswer>,
}

pub fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}

pub fn answers_match(user_answer: &str, correct_answer: &str) -> bool {
    normalize_answer(user_answer) == normalize_answer(correct_answer)
}

pub fn check_answer(
    conn: &Connection,
    sentence_id: i64,
    user_answer: &str,
) -> Result<AnswerVerdict, AppError> {
    let correct_answer = db::get_sentence_english(conn, sentence_id)?
        .ok_or(AppError::NotFound("Sentence not found"))?;
    let histories = db::get_wrong_answers(conn, sentence_id)?;

    let is_correct = answers_match(user_answer, &correct_answer);

    // A failed audit write must not cost the user their verdict
    db::insert_answer_history(
        conn,
        &AnswerRecord::new(sentence_id, user_answer, is_correct),
        Utc::now(),
    )
    .log_warn("Failed to insert answer history");

    tracing::debug!(sentence_id, is_correct, prior_wrong = histories.len(), "Answer checked");

    Ok(AnswerVerdict {
        is_correct,
        correct_answer,
        histories,
    })
}
