//! Process-local preference map.

use super::{PreferenceStore, PrefsError, PrefsResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// In-memory preferences for single-threaded hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn has(&self, key: &str) -> PrefsResult<bool> {
        Ok(self.values.borrow().contains_key(key))
    }

    fn get(&self, key: &str) -> PrefsResult<String> {
        self.values
            .borrow()
            .get(key)
            .cloned()
            .ok_or_else(|| PrefsError::MissingKey(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> PrefsResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
