//! Test utilities for database setup.
//!
//! Reuses the authoritative schema initialization so tests never carry their
//! own copy of the tables.

use chrono::Utc;
use rusqlite::Connection;
use std::path::Path;
use tempfile::TempDir;

use crate::db;
use crate::domain::{AnswerRecord, NewSentence};

/// Migrated, empty database in a temporary directory.
pub struct TestDb {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    pub conn: Connection,
}

impl TestDb {
    pub fn new() -> rusqlite::Result<Self> {
        let temp =
            TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        let conn = db::open_connection(&temp.path().join("sentences.db"))?;
        db::run_migrations(&conn)?;
        Ok(Self { temp, conn })
    }

    /// Get the temporary directory path for creating test files.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn add_sentence(&self, japanese: &str, english: &str, page: &str) -> i64 {
        db::insert_sentence(&self.conn, &NewSentence::new(japanese, english, page), Utc::now())
            .expect("insert sentence")
    }

    /// Record `correct` correct and `incorrect` wrong attempts for a sentence.
    pub fn add_answers(&self, sentence_id: i64, correct: usize, incorrect: usize) {
        for _ in 0..correct {
            db::insert_answer_history(&self.conn, &AnswerRecord::new(sentence_id, "", true), Utc::now())
                .expect("insert correct answer");
        }
        for i in 0..incorrect {
            let answer = format!("wrong answer {}", i + 1);
            db::insert_answer_history(
                &self.conn,
                &AnswerRecord::new(sentence_id, &answer, false),
                Utc::now(),
            )
            .expect("insert wrong answer");
        }
    }
}
