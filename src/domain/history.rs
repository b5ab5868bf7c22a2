use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One evaluation attempt, as stored in `answer_histories`.
///
/// Test-support type: responses only carry [`WrongAnswer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerHistory {
  pub id: i64,
  pub sentence_id: i64,
  pub is_correct: bool,
  /// Verbatim user input for wrong answers, empty for correct ones
  pub incorrect_answer: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// A previous wrong answer shown back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrongAnswer {
  pub id: i64,
  pub incorrect_answer: String,
  pub created_at: DateTime<Utc>,
}

/// History row to be inserted for a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
  pub sentence_id: i64,
  pub is_correct: bool,
  pub incorrect_answer: String,
}

impl AnswerRecord {
  pub fn new(sentence_id: i64, user_answer: &str, is_correct: bool) -> Self {
    let incorrect_answer = if is_correct {
      String::new()
    } else {
      user_answer.to_string()
    };
    Self {
      sentence_id,
      is_correct,
      incorrect_answer,
    }
  }
}
