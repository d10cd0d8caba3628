//! Core logic for the project showcase catalog browser.
//! This crate is the single source of truth for filtering semantics.

pub mod catalog;
pub mod filter;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod session;
pub mod view;

pub use catalog::{load_catalog, parse_catalog, CatalogError, CatalogResult, LOAD_ERROR_MESSAGE};
pub use filter::predicate::{is_visible, visible_subset};
pub use filter::state::{CategoryConstraint, FilterState, SavedFilters};
pub use filter::vocabulary::{friendly_category_label, TagVocabulary};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::ActivityStats;
pub use model::project::{Project, ProjectStatus};
pub use prefs::{
    JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore, PrefsError, PrefsResult,
};
pub use session::context::CatalogSession;
pub use session::reveal::{
    reveal_target, RevealLatch, Visibility, REVEAL_CLICKS, REVEAL_WINDOW_MS,
};
pub use view::display::{
    ActivityBadge, DisplayModel, ProjectCard, DEFAULT_ICON, EMPTY_PLACEHOLDER,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
