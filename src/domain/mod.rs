pub mod history;
pub mod sentence;

pub use history::{AnswerHistory, AnswerRecord, WrongAnswer};
pub use sentence::{
  is_eligible, mastery_score, NewSentence, PracticeSentence, Sentence, MASTERY_THRESHOLD,
};
