use rusqlite::{Connection, Result};

pub fn run_migrations(conn: &Connection) -> Result<()> {
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS sentences (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      japanese TEXT NOT NULL,
      english TEXT NOT NULL,
      page TEXT NOT NULL,
      is_reported INTEGER NOT NULL DEFAULT 0,
      created_at TEXT NOT NULL,
      updated_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS answer_histories (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      sentence_id INTEGER NOT NULL,
      is_correct INTEGER NOT NULL,
      -- empty string for correct answers, never NULL
      incorrect_answer TEXT NOT NULL DEFAULT '',
      created_at TEXT NOT NULL,
      updated_at TEXT NOT NULL,
      FOREIGN KEY (sentence_id) REFERENCES sentences(id)
    );

    CREATE INDEX IF NOT EXISTS idx_sentences_is_reported ON sentences(is_reported);
    CREATE INDEX IF NOT EXISTS idx_answer_histories_sentence_id ON answer_histories(sentence_id);
    CREATE INDEX IF NOT EXISTS idx_answer_histories_created_at ON answer_histories(created_at);
    "#,
  )?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::TestDb;

  #[test]
  fn test_migrations_are_idempotent() {
    let db = TestDb::new().unwrap();
    run_migrations(&db.conn).unwrap();
    run_migrations(&db.conn).unwrap();
  }

  #[test]
  fn test_history_requires_existing_sentence() {
    let db = TestDb::new().unwrap();
    let result = db.conn.execute(
      r#"
      INSERT INTO answer_histories (sentence_id, is_correct, incorrect_answer, created_at, updated_at)
      VALUES (42, 0, 'nope', '2024-06-28T10:00:00.000000Z', '2024-06-28T10:00:00.000000Z')
      "#,
      [],
    );
    assert!(result.is_err());
  }
}
