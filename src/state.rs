//! Application state shared by all handlers.

use crate::db::DbPool;
use crate::services::SentenceSelector;

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    /// Storage handle, opened once at startup
    pub db: DbPool,

    /// Random source for sentence selection
    pub selector: SentenceSelector,
}

impl AppState {
    pub fn new(db: DbPool) -> Self {
        Self::with_selector(db, SentenceSelector::from_os_rng())
    }

    pub fn with_selector(db: DbPool, selector: SentenceSelector) -> Self {
        Self { db, selector }
    }
}
