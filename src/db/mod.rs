pub mod histories;
pub mod schema;
pub mod seed;
pub mod sentences;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, Result};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// Re-export all public items from submodules
pub use histories::*;
pub use schema::run_migrations;
pub use seed::{builtin_sentences, load_seed_bank, seed_sentences};
pub use sentences::*;

pub type DbPool = Arc<Mutex<Connection>>;

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
  /// Log the error at warn level and return None
  fn log_warn(self, context: &str) -> Option<T>;
}

impl<T, E: std::fmt::Display> LogOnError<T> for std::result::Result<T, E> {
  fn log_warn(self, context: &str) -> Option<T> {
    match self {
      Ok(v) => Some(v),
      Err(e) => {
        tracing::warn!("{}: {}", context, e);
        None
      }
    }
  }
}

/// Error returned when database lock cannot be acquired
#[derive(Debug)]
pub struct DbLockError;

impl std::fmt::Display for DbLockError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Database unavailable")
  }
}

impl std::error::Error for DbLockError {}

/// Try to acquire the database lock, returning an error if poisoned
pub fn try_lock(pool: &DbPool) -> std::result::Result<MutexGuard<'_, Connection>, DbLockError> {
  pool.lock().map_err(|_: PoisonError<_>| {
    tracing::error!("Database mutex poisoned - a thread panicked while holding the lock");
    DbLockError
  })
}

/// Open a connection with foreign key enforcement turned on.
pub fn open_connection(path: &Path) -> Result<Connection> {
  let conn = Connection::open(path)?;
  conn.pragma_update(None, "foreign_keys", true)?;
  Ok(conn)
}

pub fn init_db(path: &Path) -> Result<DbPool> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).ok();
  }

  // Create backup before migrations if database exists
  if path.exists() {
    let backup_path = path.with_extension("db.backup");
    if let Err(e) = std::fs::copy(path, &backup_path) {
      tracing::warn!("Could not create database backup: {}", e);
    }
  }

  let conn = open_connection(path)?;
  run_migrations(&conn)?;
  Ok(Arc::new(Mutex::new(conn)))
}

/// Cheap round trip used by the readiness probe.
pub fn ping(conn: &Connection) -> Result<()> {
  conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
  Ok(())
}

/// Fixed-width RFC 3339 so that string order in SQLite matches time order.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(row: &rusqlite::Row, idx: usize) -> Result<DateTime<Utc>> {
  let raw: String = row.get(idx)?;
  DateTime::parse_from_rfc3339(&raw)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  #[test]
  fn test_timestamps_sort_lexically() {
    let earlier = Utc.with_ymd_and_hms(2024, 6, 28, 10, 0, 0).unwrap();
    let later = earlier + chrono::Duration::microseconds(1500);
    let a = format_timestamp(earlier);
    let b = format_timestamp(later);
    assert_eq!(a, "2024-06-28T10:00:00.000000Z");
    assert_eq!(a.len(), b.len());
    assert!(a < b);
  }

  #[test]
  fn test_log_warn_swallows_error() {
    let failing: std::result::Result<i64, DbLockError> = Err(DbLockError);
    assert_eq!(failing.log_warn("lookup"), None);
    let ok: std::result::Result<i64, DbLockError> = Ok(7);
    assert_eq!(ok.log_warn("lookup"), Some(7));
  }

  #[test]
  fn test_init_db_creates_parent_dirs_and_schema() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("nested").join("sentences.db");
    let pool = init_db(&path).unwrap();
    let conn = try_lock(&pool).unwrap();
    ping(&conn).unwrap();
    let count: i64 = conn
      .query_row("SELECT COUNT(*) FROM sentences", [], |row| row.get(0))
      .unwrap();
    assert_eq!(count, 0);
  }

  #[test]
  fn test_init_db_backs_up_existing_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("sentences.db");
    drop(init_db(&path).unwrap());
    drop(init_db(&path).unwrap());
    assert!(temp.path().join("sentences.db.backup").exists());
  }
}
