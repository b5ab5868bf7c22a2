//! Random sentence selection over the practice pool.
//!
//! The pool is recomputed from storage on every draw; eligibility lives in
//! [`db::get_eligible_sentences`] so a cache can be slotted in behind
//! [`SentenceSelector::pick`] without changing callers.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, PoisonError};

use crate::db;
use crate::domain::PracticeSentence;
use crate::error::AppError;

/// Uniform random picker backed by one process-lifetime RNG.
#[derive(Clone)]
pub struct SentenceSelector {
  rng: Arc<Mutex<StdRng>>,
}

impl SentenceSelector {
  pub fn from_os_rng() -> Self {
    Self::with_rng(StdRng::from_os_rng())
  }

  /// Deterministic selector for tests and reproducible runs
  pub fn seeded(seed: u64) -> Self {
    Self::with_rng(StdRng::seed_from_u64(seed))
  }

  pub fn with_rng(rng: StdRng) -> Self {
    Self {
      rng: Arc::new(Mutex::new(rng)),
    }
  }

  /// Draw one sentence from the current pool.
  pub fn pick(&self, conn: &Connection) -> Result<PracticeSentence, AppError> {
    let pool = db::get_eligible_sentences(conn)?;

    // RNG state stays valid even if a holder panicked
    let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
    let chosen = pool
      .choose(&mut *rng)
      .cloned()
      .ok_or(AppError::NotFound("No sentences found"))?;

    tracing::debug!(
      pool_size = pool.len(),
      id = chosen.id,
      mastery = chosen.mastery_score(),
      "Selected practice sentence"
    );
    Ok(chosen)
  }
}
