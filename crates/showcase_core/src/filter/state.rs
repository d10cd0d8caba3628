//! Filter selection state.
//!
//! # Responsibility
//! - Track, per category, which known tags are currently selected.
//! - Provide bulk select/clear and snapshot/restore operations.
//!
//! # Invariants
//! - Selections are always a subset of the vocabulary's known tags.
//! - Restoring drops tags and categories the vocabulary no longer knows.
//! - The default state selects every known tag (no filtering).

use crate::filter::vocabulary::TagVocabulary;
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet};

/// Persisted snapshot shape: category -> selected tags, sorted.
pub type SavedFilters = BTreeMap<String, Vec<String>>;

/// Per-category constraint derived from the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryConstraint<'a> {
    /// Every known tag is selected; the category excludes nothing.
    Unconstrained,
    /// Nothing is selected; the category excludes everything.
    ExcludeAll,
    /// Partial selection; a project needs at least one of these tags.
    AnyOf(&'a BTreeSet<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CategorySelection {
    known: BTreeSet<String>,
    selected: BTreeSet<String>,
}

/// Selection state across all known categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    categories: IndexMap<String, CategorySelection>,
}

impl FilterState {
    /// Builds the default state from a vocabulary: all tags selected.
    pub fn all_selected(vocabulary: &TagVocabulary) -> Self {
        let mut categories = IndexMap::new();
        for category in vocabulary.categories() {
            let known = vocabulary
                .tags(category)
                .cloned()
                .unwrap_or_default();
            categories.insert(
                category.to_string(),
                CategorySelection {
                    selected: known.clone(),
                    known,
                },
            );
        }
        Self { categories }
    }

    /// Toggles membership of one known tag.
    ///
    /// Returns `false` when the category or tag is unknown; unknown input
    /// is ignored rather than recorded.
    pub fn set_selected(&mut self, category: &str, tag: &str, selected: bool) -> bool {
        let Some(entry) = self.categories.get_mut(category) else {
            return false;
        };
        if !entry.known.contains(tag) {
            return false;
        }
        if selected {
            entry.selected.insert(tag.to_string());
        } else {
            entry.selected.remove(tag);
        }
        true
    }

    /// Selects every known tag in `category`.
    pub fn select_all(&mut self, category: &str) {
        if let Some(entry) = self.categories.get_mut(category) {
            entry.selected = entry.known.clone();
        }
    }

    /// Deselects every tag in `category`.
    pub fn select_none(&mut self, category: &str) {
        if let Some(entry) = self.categories.get_mut(category) {
            entry.selected.clear();
        }
    }

    /// Returns the selected tags for `category`, if the category exists.
    pub fn selected(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.categories.get(category).map(|entry| &entry.selected)
    }

    /// Returns how many tags are selected in `category`.
    ///
    /// Drives the per-category counter badge in filter controls.
    pub fn selected_count(&self, category: &str) -> usize {
        self.categories
            .get(category)
            .map_or(0, |entry| entry.selected.len())
    }

    /// Returns the constraint `category` currently imposes.
    pub fn constraint(&self, category: &str) -> CategoryConstraint<'_> {
        match self.categories.get(category) {
            None => CategoryConstraint::Unconstrained,
            // Full selection wins over empty: a category with no known
            // tags is vacuously fully selected, not excluding.
            Some(entry) if entry.selected.len() == entry.known.len() => {
                CategoryConstraint::Unconstrained
            }
            Some(entry) if entry.selected.is_empty() => CategoryConstraint::ExcludeAll,
            Some(entry) => CategoryConstraint::AnyOf(&entry.selected),
        }
    }

    /// Returns category names in vocabulary order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Captures the current selections for persistence.
    pub fn snapshot(&self) -> SavedFilters {
        self.categories
            .iter()
            .map(|(category, entry)| {
                (
                    category.clone(),
                    entry.selected.iter().cloned().collect(),
                )
            })
            .collect()
    }

    /// Applies a persisted snapshot.
    ///
    /// Categories absent from the snapshot keep their current selection.
    /// Saved tags no longer present in the vocabulary are silently
    /// dropped; saved categories the vocabulary no longer knows are
    /// ignored entirely.
    pub fn restore(&mut self, saved: &SavedFilters) {
        for (category, tags) in saved {
            let Some(entry) = self.categories.get_mut(category) else {
                continue;
            };
            entry.selected = tags
                .iter()
                .filter(|tag| entry.known.contains(*tag))
                .cloned()
                .collect();
        }
    }
}
