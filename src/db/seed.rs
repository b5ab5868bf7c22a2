//! Out-of-band sentence seeding.
//!
//! Sentences are never created through the API. On startup an empty database is
//! filled from a TOML sentence bank when one is configured, otherwise from the
//! built-in sample set:
//!
//! ```toml
//! [[sentences]]
//! japanese = "時間がありません。"
//! english = "I don't have time."
//! page = "12"
//! ```

use chrono::Utc;
use rusqlite::{Connection, Result};
use serde::Deserialize;
use std::path::Path;

use super::{count_sentences, insert_sentence};
use crate::domain::NewSentence;

#[derive(Debug, Deserialize)]
struct SeedBank {
  #[serde(default)]
  sentences: Vec<NewSentence>,
}

pub fn builtin_sentences() -> Vec<NewSentence> {
  vec![
    NewSentence::new("時間がありません。", "I don't have time.", "12"),
    NewSentence::new("今日は暑いです。", "It's hot today.", "15"),
    NewSentence::new("明日は雨が降るでしょう。", "It will rain tomorrow.", "23"),
  ]
}

/// Read a sentence bank from TOML. On any IO/parse error, logs and returns None.
pub fn load_seed_bank(path: &Path) -> Option<Vec<NewSentence>> {
  let contents = match std::fs::read_to_string(path) {
    Ok(s) => s,
    Err(e) => {
      tracing::error!(path = %path.display(), error = %e, "Failed to read seed bank");
      return None;
    }
  };
  match toml::from_str::<SeedBank>(&contents) {
    Ok(bank) => {
      tracing::info!(path = %path.display(), count = bank.sentences.len(), "Loaded seed bank");
      Some(bank.sentences)
    }
    Err(e) => {
      tracing::error!(path = %path.display(), error = %e, "Failed to parse seed bank");
      None
    }
  }
}

/// Insert `sentences` if the table is empty. Returns how many rows were added.
pub fn seed_sentences(conn: &Connection, sentences: &[NewSentence]) -> Result<usize> {
  if count_sentences(conn)? > 0 {
    return Ok(0);
  }

  let now = Utc::now();
  let tx = conn.unchecked_transaction()?;
  for sentence in sentences {
    insert_sentence(&tx, sentence, now)?;
  }
  tx.commit()?;
  Ok(sentences.len())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::db::get_eligible_sentences;
  use crate::testing::TestDb;

  #[test]
  fn test_seed_fills_empty_table_once() {
    let db = TestDb::new().unwrap();
    assert_eq!(seed_sentences(&db.conn, &builtin_sentences()).unwrap(), 3);
    assert_eq!(seed_sentences(&db.conn, &builtin_sentences()).unwrap(), 0);
    assert_eq!(count_sentences(&db.conn).unwrap(), 3);

    let first = &get_eligible_sentences(&db.conn).unwrap()[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.japanese, "時間がありません。");
    assert_eq!(first.english, "I don't have time.");
  }

  #[test]
  fn test_load_seed_bank_from_toml() {
    let db = TestDb::new().unwrap();
    let path = db.path().join("bank.toml");
    std::fs::write(
      &path,
      r#"
[[sentences]]
japanese = "水をください。"
english = "Water, please."
page = "40"

[[sentences]]
japanese = "駅はどこですか。"
english = "Where is the station?"
page = "41"
"#,
    )
    .unwrap();

    let bank = load_seed_bank(&path).unwrap();
    assert_eq!(bank.len(), 2);
    assert_eq!(bank[1], NewSentence::new("駅はどこですか。", "Where is the station?", "41"));
  }

  #[test]
  fn test_load_seed_bank_rejects_bad_input() {
    let db = TestDb::new().unwrap();
    assert!(load_seed_bank(&db.path().join("missing.toml")).is_none());

    let path = db.path().join("broken.toml");
    std::fs::write(&path, "[[sentences]]\njapanese = \"水\"\n").unwrap();
    assert!(load_seed_bank(&path).is_none());
  }
}
