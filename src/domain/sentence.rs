use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sentence leaves the practice pool once `correct - incorrect` reaches this value.
pub const MASTERY_THRESHOLD: i64 = 2;

/// Stored sentence row.
///
/// Test-support type: the HTTP surface only serves [`PracticeSentence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
  pub id: i64,
  pub japanese: String,
  pub english: String,
  pub page: String,
  pub is_reported: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Sentence as served to the practice client, with live answer counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeSentence {
  pub id: i64,
  pub japanese: String,
  pub english: String,
  pub page: String,
  pub correct_count: i64,
  pub incorrect_count: i64,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl PracticeSentence {
  pub fn mastery_score(&self) -> i64 {
    mastery_score(self.correct_count, self.incorrect_count)
  }
}

/// Sentence content used for seeding; ids and timestamps are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewSentence {
  pub japanese: String,
  pub english: String,
  pub page: String,
}

impl NewSentence {
  pub fn new(japanese: &str, english: &str, page: &str) -> Self {
    Self {
      japanese: japanese.to_string(),
      english: english.to_string(),
      page: page.to_string(),
    }
  }
}

pub fn mastery_score(correct_count: i64, incorrect_count: i64) -> i64 {
  correct_count - incorrect_count
}

/// Whether a sentence belongs in the random practice pool.
///
/// Rust statement of the filter in `db::get_eligible_sentences`, which is the
/// one the service applies. Kept for tests and offline tooling.
pub fn is_eligible(is_reported: bool, correct_count: i64, incorrect_count: i64) -> bool {
  !is_reported && mastery_score(correct_count, incorrect_count) < MASTERY_THRESHOLD
}
