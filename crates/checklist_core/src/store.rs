//! Preference-backed checklist store.
//!
//! # Responsibility
//! - Hold the authoritative in-memory checklist for one preference key.
//! - Load, save and reload it through a `PreferenceStore`.
//!
//! # Invariants
//! - A missing key is not an error: first load yields the sample list.
//! - `save` overwrites the key unconditionally with the full list.
//! - A failed `reload` leaves the in-memory list untouched.
//! - Log events carry counts and keys, never item text.

use crate::config::ChecklistConfig;
use crate::model::checklist::{BlobError, Checklist};
use crate::prefs::{PreferenceStore, PrefsError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from loading or saving a checklist.
#[derive(Debug)]
pub enum StoreError {
    /// Blob encoding/decoding failure, including malformed persisted data.
    Blob(BlobError),
    /// The preference backend failed.
    Prefs(PrefsError),
}

impl StoreError {
    /// Raw persisted text when the failure was a malformed blob.
    pub fn malformed_blob(&self) -> Option<&str> {
        match self {
            Self::Blob(BlobError::Deserialization { raw, .. }) => Some(raw.as_str()),
            _ => None,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blob(err) => write!(f, "{err}"),
            Self::Prefs(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Blob(err) => Some(err),
            Self::Prefs(err) => Some(err),
        }
    }
}

impl From<BlobError> for StoreError {
    fn from(value: BlobError) -> Self {
        Self::Blob(value)
    }
}

impl From<PrefsError> for StoreError {
    fn from(value: PrefsError) -> Self {
        Self::Prefs(value)
    }
}

/// Checklist bound to one preference key.
pub struct ChecklistStore<P: PreferenceStore> {
    prefs: P,
    config: ChecklistConfig,
    checklist: Checklist,
}

impl<P: PreferenceStore> ChecklistStore<P> {
    /// Creates a store and loads its checklist.
    pub fn open(prefs: P, config: ChecklistConfig) -> StoreResult<Self> {
        let mut store = Self {
            prefs,
            config,
            checklist: Checklist::new(),
        };
        store.checklist = store.load()?;
        Ok(store)
    }

    /// Reads the persisted checklist without touching the in-memory one.
    ///
    /// # Errors
    /// - `StoreError::Prefs` when the backend fails.
    /// - `StoreError::Blob` when the stored blob is malformed.
    pub fn load(&self) -> StoreResult<Checklist> {
        let key = self.config.pref_key();
        if !self.prefs.has(key)? {
            info!("event=checklist_load module=store status=ok source=sample key={key} items=1");
            return Ok(Checklist::sample(self.config.sample_text()));
        }

        let result = self
            .prefs
            .get(key)
            .map_err(StoreError::from)
            .and_then(|raw| Checklist::from_blob(&raw).map_err(StoreError::from));
        match &result {
            Ok(list) => info!(
                "event=checklist_load module=store status=ok source=prefs key={key} items={}",
                list.len()
            ),
            Err(err) => error!(
                "event=checklist_load module=store status=error key={key} error={err}"
            ),
        }
        result
    }

    /// Writes the whole in-memory checklist to the preference key.
    pub fn save(&self) -> StoreResult<()> {
        let key = self.config.pref_key();
        let result = self
            .checklist
            .to_blob()
            .map_err(StoreError::from)
            .and_then(|blob| self.prefs.set(key, &blob).map_err(StoreError::from));
        match &result {
            Ok(()) => info!(
                "event=checklist_save module=store status=ok key={key} items={}",
                self.checklist.len()
            ),
            Err(err) => error!("event=checklist_save module=store status=error key={key} error={err}"),
        }
        result
    }

    /// Replaces the in-memory list with the persisted one, if any.
    ///
    /// Returns `false` and keeps the current list when the key is absent.
    pub fn reload(&mut self) -> StoreResult<bool> {
        let key = self.config.pref_key();
        if !self.prefs.has(key)? {
            info!("event=checklist_reload module=store status=ok key={key} replaced=false");
            return Ok(false);
        }
        self.checklist = self.load()?;
        info!(
            "event=checklist_reload module=store status=ok key={key} replaced=true items={}",
            self.checklist.len()
        );
        Ok(true)
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn checklist_mut(&mut self) -> &mut Checklist {
        &mut self.checklist
    }

    pub fn key(&self) -> &str {
        self.config.pref_key()
    }

    pub fn config(&self) -> &ChecklistConfig {
        &self.config
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }
}
