//! Preference store implementations.
//!
//! # Responsibility
//! - Persist the filter snapshot as one flat JSON document on disk.
//! - Provide an in-memory double so tests can inject a store.

use super::{PreferenceStore, PrefsResult};
use crate::filter::state::SavedFilters;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-backed store holding one JSON-serialized snapshot.
#[derive(Debug, Clone)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
}

impl JsonFilePreferenceStore {
    /// Creates a store over `path`; the file may not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn load(&self) -> PrefsResult<Option<SavedFilters>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let saved = serde_json::from_str(&raw)?;
        Ok(Some(saved))
    }

    fn save(&mut self, filters: &SavedFilters) -> PrefsResult<()> {
        let raw = serde_json::to_string(filters)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    saved: Option<SavedFilters>,
}

impl MemoryPreferenceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a snapshot.
    pub fn with_saved(saved: SavedFilters) -> Self {
        Self { saved: Some(saved) }
    }

    /// Returns the last saved snapshot, if any.
    pub fn saved(&self) -> Option<&SavedFilters> {
        self.saved.as_ref()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> PrefsResult<Option<SavedFilters>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, filters: &SavedFilters) -> PrefsResult<()> {
        self.saved = Some(filters.clone());
        Ok(())
    }
}
