use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result};

use super::{format_timestamp, parse_timestamp};
use crate::domain::{NewSentence, PracticeSentence, Sentence, MASTERY_THRESHOLD};

pub fn insert_sentence(conn: &Connection, sentence: &NewSentence, now: DateTime<Utc>) -> Result<i64> {
  let ts = format_timestamp(now);
  conn.execute(
    r#"
    INSERT INTO sentences (japanese, english, page, is_reported, created_at, updated_at)
    VALUES (?1, ?2, ?3, 0, ?4, ?4)
    "#,
    params![sentence.japanese, sentence.english, sentence.page, ts],
  )?;
  Ok(conn.last_insert_rowid())
}

pub fn count_sentences(conn: &Connection) -> Result<i64> {
  conn.query_row("SELECT COUNT(*) FROM sentences", [], |row| row.get(0))
}

/// Full stored row, reported flag included. Test-support lookup.
pub fn get_sentence_by_id(conn: &Connection, id: i64) -> Result<Option<Sentence>> {
  conn
    .query_row(
      r#"
      SELECT id, japanese, english, page, is_reported, created_at, updated_at
      FROM sentences WHERE id = ?1
      "#,
      params![id],
      |row| {
        Ok(Sentence {
          id: row.get(0)?,
          japanese: row.get(1)?,
          english: row.get(2)?,
          page: row.get(3)?,
          is_reported: row.get(4)?,
          created_at: parse_timestamp(row, 5)?,
          updated_at: parse_timestamp(row, 6)?,
        })
      },
    )
    .optional()
}

/// Canonical English answer for a sentence, `None` if the id is unknown.
/// Reported sentences are still answerable.
pub fn get_sentence_english(conn: &Connection, id: i64) -> Result<Option<String>> {
  conn
    .query_row(
      "SELECT english FROM sentences WHERE id = ?1",
      params![id],
      |row| row.get(0),
    )
    .optional()
}

/// All sentences currently in the practice pool, with their answer counters.
///
/// A sentence is in the pool when it is not reported and its mastery score
/// (`correct_count - incorrect_count`) is below [`MASTERY_THRESHOLD`].
/// Sentences without history count as 0/0.
pub fn get_eligible_sentences(conn: &Connection) -> Result<Vec<PracticeSentence>> {
  let mut stmt = conn.prepare(
    r#"
    SELECT s.id, s.japanese, s.english, s.page, s.created_at, s.updated_at,
           COALESCE(SUM(CASE WHEN ah.is_correct = 1 THEN 1 ELSE 0 END), 0) AS correct_count,
           COALESCE(SUM(CASE WHEN ah.is_correct = 0 THEN 1 ELSE 0 END), 0) AS incorrect_count
    FROM sentences s
    LEFT JOIN answer_histories ah ON s.id = ah.sentence_id
    WHERE s.is_reported = 0
    GROUP BY s.id
    HAVING correct_count - incorrect_count < ?1
    ORDER BY s.id
    "#,
  )?;

  let sentences = stmt
    .query_map(params![MASTERY_THRESHOLD], |row| {
      Ok(PracticeSentence {
        id: row.get(0)?,
        japanese: row.get(1)?,
        english: row.get(2)?,
        page: row.get(3)?,
        created_at: parse_timestamp(row, 4)?,
        updated_at: parse_timestamp(row, 5)?,
        correct_count: row.get(6)?,
        incorrect_count: row.get(7)?,
      })
    })?
    .collect::<Result<Vec<_>>>()?;
  Ok(sentences)
}

/// Flag a sentence as reported. Returns the number of rows that changed,
/// which is 0 for unknown or already reported ids.
pub fn mark_sentence_reported(conn: &Connection, id: i64, now: DateTime<Utc>) -> Result<usize> {
  conn.execute(
    "UPDATE sentences SET is_reported = 1, updated_at = ?1 WHERE id = ?2 AND is_reported = 0",
    params![format_timestamp(now), id],
  )
}
