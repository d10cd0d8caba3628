//! Filter preference persistence.
//!
//! # Responsibility
//! - Define the store port the session persists selections through.
//! - Isolate the flat-key JSON format from filtering logic.
//!
//! # Invariants
//! - Persistence is best-effort; callers swallow failures and fall back
//!   to the default all-selected state.
//! - Missing or corrupt saved data is a fallback, never a crash.

use crate::filter::state::SavedFilters;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod store;

pub use store::{JsonFilePreferenceStore, MemoryPreferenceStore};

/// Result type for preference persistence.
pub type PrefsResult<T> = Result<T, PrefsError>;

/// Persistence failure for saved filter preferences.
#[derive(Debug)]
pub enum PrefsError {
    /// Backing storage could not be read or written.
    Io(std::io::Error),
    /// Saved data exists but is not a valid snapshot document.
    Corrupt(serde_json::Error),
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "preference storage failure: {err}"),
            Self::Corrupt(err) => write!(f, "corrupt saved filters: {err}"),
        }
    }
}

impl Error for PrefsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Corrupt(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PrefsError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for PrefsError {
    fn from(value: serde_json::Error) -> Self {
        Self::Corrupt(value)
    }
}

/// Store port for one saved filter snapshot.
pub trait PreferenceStore {
    /// Reads the saved snapshot; `Ok(None)` when none was ever saved.
    fn load(&self) -> PrefsResult<Option<SavedFilters>>;
    /// Writes the snapshot, replacing any previous one.
    fn save(&mut self, filters: &SavedFilters) -> PrefsResult<()>;
}
