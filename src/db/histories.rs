//! Answer history persistence

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result};

use super::{format_timestamp, parse_timestamp};
use crate::domain::{AnswerHistory, AnswerRecord, WrongAnswer};

pub fn insert_answer_history(conn: &Connection, record: &AnswerRecord, now: DateTime<Utc>) -> Result<i64> {
    let ts = format_timestamp(now);
    conn.execute(
        r#"
    INSERT INTO answer_histories (sentence_id, is_correct, incorrect_answer, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?4)
    "#,
        params![record.sentence_id, record.is_correct, record.incorrect_answer, ts],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Wrong answers for a sentence, newest first. Rows sharing a timestamp fall
/// back to insertion order.
pub fn get_wrong_answers(conn: &Connection, sentence_id: i64) -> Result<Vec<WrongAnswer>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, incorrect_answer, created_at
    FROM answer_histories
    WHERE sentence_id = ?1 AND is_correct = 0
    ORDER BY created_at DESC, id DESC
    "#,
    )?;

    let rows = stmt
        .query_map(params![sentence_id], |row| {
            Ok(WrongAnswer {
                id: row.get(0)?,
                incorrect_answer: row.get(1)?,
                created_at: parse_timestamp(row, 2)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;

    Ok(rows)
}

/// Full history for a sentence in insertion order. Test-support lookup
/// used to count inserted rows.
pub fn get_answer_histories(conn: &Connection, sentence_id: i64) -> Result<Vec<AnswerHistory>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, sentence_id, is_correct, incorrect_answer, created_at, updated_at
    FROM answer_histories
    WHERE sentence_id = ?1
    ORDER BY id
    "#,
    )?;

    let rows = stmt
        .query_map(params![sentence_id], |row| {
            Ok(AnswerHistory {
                id: row.get(0)?,
                sentence_id: row.get(1)?,
                is_correct: row.get(2)?,
                incorrect_answer: row.get(3)?,
                created_at: parse_timestamp(row, 4)?,
                updated_at: parse_timestamp(row, 5)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;

    Ok(rows)
}
