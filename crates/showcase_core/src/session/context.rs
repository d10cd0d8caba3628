//! Catalog session context.
//!
//! # Responsibility
//! - Own the loaded collection, visibility mode, vocabulary and state.
//! - Route every filter mutation through persistence and recompute.
//!
//! # Invariants
//! - The vocabulary always reflects the current eligible pool.
//! - Persistence failures are swallowed and logged, never propagated.
//! - No ambient globals; all state lives in one session value.

use crate::filter::predicate::visible_subset;
use crate::filter::state::FilterState;
use crate::filter::vocabulary::TagVocabulary;
use crate::model::project::Project;
use crate::prefs::PreferenceStore;
use crate::session::reveal::Visibility;
use crate::view::display::DisplayModel;
use chrono::NaiveDate;
use log::{info, warn};

/// One browsing session over a loaded catalog.
///
/// Owns the project collection for its lifetime and keeps vocabulary and
/// filter state consistent with the hidden-aware eligible pool.
pub struct CatalogSession<S: PreferenceStore> {
    projects: Vec<Project>,
    visibility: Visibility,
    vocabulary: TagVocabulary,
    filters: FilterState,
    store: S,
}

impl<S: PreferenceStore> CatalogSession<S> {
    /// Builds a session: derives the vocabulary from the eligible pool,
    /// defaults to all-selected, then applies any persisted snapshot.
    ///
    /// A missing or corrupt snapshot falls back to the defaults; the
    /// failure is logged and swallowed.
    pub fn new(projects: Vec<Project>, visibility: Visibility, store: S) -> Self {
        let mut session = Self {
            projects,
            visibility,
            vocabulary: TagVocabulary::default(),
            filters: FilterState::default(),
            store,
        };
        session.rebuild_for_pool();
        session.restore_from_store();
        session
    }

    /// Returns the hidden-aware eligible pool.
    pub fn eligible_pool(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| self.visibility.includes_hidden() || project.is_listed())
            .collect()
    }

    /// Returns the eligible pool size for the status line.
    pub fn total_eligible(&self) -> usize {
        self.eligible_pool().len()
    }

    /// Returns the vocabulary the filter controls are built from.
    pub fn vocabulary(&self) -> &TagVocabulary {
        &self.vocabulary
    }

    /// Returns the current filter state.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Returns the active visibility mode.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Switches visibility and rebuilds vocabulary and state from the new
    /// pool, re-applying the previous selections where tags survive.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        if self.visibility == visibility {
            return;
        }
        let previous = self.filters.snapshot();
        self.visibility = visibility;
        self.rebuild_for_pool();
        self.filters.restore(&previous);
        info!(
            "event=visibility_change module=session status=ok include_hidden={} eligible={}",
            visibility.includes_hidden(),
            self.total_eligible()
        );
    }

    /// Toggles one tag selection and persists the new state.
    pub fn set_selected(&mut self, category: &str, tag: &str, selected: bool) -> bool {
        let changed = self.filters.set_selected(category, tag, selected);
        if changed {
            self.persist();
        }
        changed
    }

    /// Selects every tag in `category` and persists the new state.
    pub fn select_all(&mut self, category: &str) {
        self.filters.select_all(category);
        self.persist();
    }

    /// Clears every tag in `category` and persists the new state.
    pub fn select_none(&mut self, category: &str) {
        self.filters.select_none(category);
        self.persist();
    }

    /// Returns the projects passing the current selections, in pool order.
    pub fn visible_projects(&self) -> Vec<&Project> {
        visible_subset(&self.eligible_pool(), &self.filters)
    }

    /// Projects the visible set for the presentation layer.
    pub fn display_model(&self, today: NaiveDate) -> DisplayModel {
        DisplayModel::project(&self.visible_projects(), self.total_eligible(), today)
    }

    fn rebuild_for_pool(&mut self) {
        let vocabulary = {
            let pool = self.eligible_pool();
            TagVocabulary::extract(&pool)
        };
        self.filters = FilterState::all_selected(&vocabulary);
        self.vocabulary = vocabulary;
    }

    fn restore_from_store(&mut self) {
        match self.store.load() {
            Ok(Some(saved)) => {
                self.filters.restore(&saved);
                info!(
                    "event=prefs_restore module=session status=ok categories={}",
                    saved.len()
                );
            }
            Ok(None) => {}
            Err(err) => {
                // Fall back to the all-selected defaults.
                warn!(
                    "event=prefs_restore module=session status=error error={err}"
                );
            }
        }
    }

    fn persist(&mut self) {
        let snapshot = self.filters.snapshot();
        if let Err(err) = self.store.save(&snapshot) {
            warn!("event=prefs_save module=session status=error error={err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogSession;
    use crate::model::project::Project;
    use crate::prefs::MemoryPreferenceStore;
    use crate::session::reveal::Visibility;

    fn catalog() -> Vec<Project> {
        serde_json::from_str(
            r#"[
                {"title":"public go","description":"d","url":"u",
                 "tags":{"language":["go"]}},
                {"title":"public rust","description":"d","url":"u",
                 "tags":{"language":["rust"]}},
                {"title":"secret","description":"d","url":"u","status":"hidden",
                 "tags":{"language":["zig"]}}
            ]"#,
        )
        .expect("catalog json should parse")
    }

    #[test]
    fn listed_only_excludes_hidden_from_pool_and_vocabulary() {
        let session = CatalogSession::new(
            catalog(),
            Visibility::ListedOnly,
            MemoryPreferenceStore::new(),
        );
        assert_eq!(session.total_eligible(), 2);
        assert!(!session.vocabulary().contains("language", "zig"));
        assert_eq!(session.visible_projects().len(), 2);
    }

    #[test]
    fn include_hidden_expands_pool_and_vocabulary() {
        let session = CatalogSession::new(
            catalog(),
            Visibility::IncludeHidden,
            MemoryPreferenceStore::new(),
        );
        assert_eq!(session.total_eligible(), 3);
        assert!(session.vocabulary().contains("language", "zig"));
    }

    #[test]
    fn visibility_switch_keeps_surviving_selections() {
        let mut session = CatalogSession::new(
            catalog(),
            Visibility::ListedOnly,
            MemoryPreferenceStore::new(),
        );
        session.set_selected("language", "rust", false);
        assert_eq!(session.visible_projects().len(), 1);

        session.set_visibility(Visibility::IncludeHidden);
        // Selections re-apply like a persisted restore: "go" stays
        // selected, "rust" stays deselected, and the new "zig" tag starts
        // deselected because the snapshot never named it.
        let visible: Vec<&str> = session
            .visible_projects()
            .iter()
            .map(|project| project.title.as_str())
            .collect();
        assert_eq!(visible, ["public go"]);

        session.select_all("language");
        assert_eq!(session.visible_projects().len(), 3);
    }

    #[test]
    fn mutations_persist_to_the_store() {
        let mut session = CatalogSession::new(
            catalog(),
            Visibility::ListedOnly,
            MemoryPreferenceStore::new(),
        );
        session.select_none("language");
        let saved = session
            .store
            .saved()
            .expect("mutation should persist a snapshot");
        assert_eq!(saved.get("language").map(Vec::len), Some(0));
    }
}
