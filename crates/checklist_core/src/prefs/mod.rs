//! Host key-value preference seam.
//!
//! # Responsibility
//! - Define the `has/get/set` contract the checklist store persists through.
//! - Provide in-memory and SQLite-backed implementations.
//!
//! # Invariants
//! - Backend failures propagate to the caller; nothing here retries.
//! - `get` on a missing key is an error, callers check `has` first.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryPreferences;
pub use sqlite::SqlitePreferences;

pub type PrefsResult<T> = Result<T, PrefsError>;

/// Errors surfaced by preference backends.
#[derive(Debug)]
pub enum PrefsError {
    /// `get` was called for a key that holds no value.
    MissingKey(String),
    /// SQLite backend failure.
    Db(DbError),
    /// Failure reported by a host-provided backend.
    Backend(String),
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingKey(key) => write!(f, "preference key not found: {key}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "preference backend failed: {message}"),
        }
    }
}

impl Error for PrefsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingKey(_) | Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for PrefsError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PrefsError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String key-value store provided by the host environment.
pub trait PreferenceStore {
    fn has(&self, key: &str) -> PrefsResult<bool>;
    fn get(&self, key: &str) -> PrefsResult<String>;
    fn set(&self, key: &str, value: &str) -> PrefsResult<()>;
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for &P {
    fn has(&self, key: &str) -> PrefsResult<bool> {
        (**self).has(key)
    }

    fn get(&self, key: &str) -> PrefsResult<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> PrefsResult<()> {
        (**self).set(key, value)
    }
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Box<P> {
    fn has(&self, key: &str) -> PrefsResult<bool> {
        (**self).has(key)
    }

    fn get(&self, key: &str) -> PrefsResult<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> PrefsResult<()> {
        (**self).set(key, value)
    }
}
