//! Core logic for the checklist panel.
//! Hosts render views and route input through `ChecklistPanel`; everything
//! persistent goes through a `PreferenceStore`.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod panel;
pub mod prefs;
pub mod queue;
pub mod store;
pub mod text;

pub use config::{ChecklistConfig, ConfigError, DEFAULT_PREF_KEY, SAMPLE_ENTRY_TEXT};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::checklist::{BlobError, Checklist, ChecklistView, ItemView};
pub use model::item::{Item, ItemId};
pub use panel::ChecklistPanel;
pub use prefs::{MemoryPreferences, PreferenceStore, PrefsError, PrefsResult, SqlitePreferences};
pub use queue::EditQueue;
pub use store::{ChecklistStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
