//! Checklist identity configuration.
//!
//! # Invariants
//! - `pref_key` is never blank; it names the single blob a checklist owns.
//! - Two panels configured with different keys never share state.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Preference key used when the host does not configure one.
pub const DEFAULT_PREF_KEY: &str = "CheckList";
/// Text of the single item seeded on first-ever load.
pub const SAMPLE_ENTRY_TEXT: &str = "Sample entry.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    BlankKey,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankKey => write!(f, "preference key must not be blank"),
        }
    }
}

impl Error for ConfigError {}

/// Per-checklist settings chosen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistConfig {
    pref_key: String,
    sample_text: String,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            pref_key: DEFAULT_PREF_KEY.to_string(),
            sample_text: SAMPLE_ENTRY_TEXT.to_string(),
        }
    }
}

impl ChecklistConfig {
    /// Builds a config persisting under `pref_key` (trimmed).
    ///
    /// # Errors
    /// - `ConfigError::BlankKey` when the key is empty after trim.
    pub fn new(pref_key: &str) -> Result<Self, ConfigError> {
        let trimmed = pref_key.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::BlankKey);
        }
        Ok(Self {
            pref_key: trimmed.to_string(),
            ..Self::default()
        })
    }

    /// Overrides the first-run sample item text.
    pub fn with_sample_text(mut self, text: impl Into<String>) -> Self {
        self.sample_text = text.into();
        self
    }

    pub fn pref_key(&self) -> &str {
        &self.pref_key
    }

    pub fn sample_text(&self) -> &str {
        &self.sample_text
    }
}
