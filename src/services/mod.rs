//! Application services.
//!
//! Each service takes the storage handle explicitly; handlers lock the pool
//! and pass the connection in.

pub mod evaluation;
pub mod reporting;
pub mod selection;

pub use evaluation::{answers_match, check_answer, normalize_answer, AnswerVerdict};
pub use reporting::report_sentence;
pub use selection::SentenceSelector;
