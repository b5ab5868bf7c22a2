//! Flagging sentences for curation. Reporting is one-way.

use chrono::Utc;
use rusqlite::Connection;

use crate::db;
use crate::error::AppError;

/// Remove a sentence from the practice pool. Unknown or already reported
/// ids succeed without changes.
pub fn report_sentence(conn: &Connection, sentence_id: i64) -> Result<(), AppError> {
    let changed = db::mark_sentence_reported(conn, sentence_id, Utc::now())?;
    if changed == 0 {
        tracing::debug!(sentence_id, "Report had no effect (unknown or already reported)");
    } else {
        tracing::info!(sentence_id, "Sentence reported");
    }
    Ok(())
}
