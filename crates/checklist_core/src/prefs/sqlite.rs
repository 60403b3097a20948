//! SQLite-backed preference table.
//!
//! # Invariants
//! - One row per key; `set` upserts and refreshes `updated_at`.
//! - The connection must come from `db::open_db*` so the table exists.

use super::{PreferenceStore, PrefsError, PrefsResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Preferences stored in the `preferences` table of a database opened through `db::open_db`.
pub struct SqlitePreferences<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferences<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PreferenceStore for SqlitePreferences<'_> {
    fn has(&self, key: &str) -> PrefsResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM preferences WHERE key = ?1);",
            params![key],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn get(&self, key: &str) -> PrefsResult<String> {
        self.conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?
            .ok_or_else(|| PrefsError::MissingKey(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> PrefsResult<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
