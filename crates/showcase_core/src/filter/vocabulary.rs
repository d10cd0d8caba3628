//! Tag vocabulary extraction.
//!
//! # Responsibility
//! - Collect, per category, the distinct tag values present in a pool.
//! - Keep category order stable for filter-control generation.
//!
//! # Invariants
//! - Category order is first-encounter order across the pool.
//! - Tag sets are alphabetically ordered (BTreeSet) for display.
//! - Projects without tags contribute nothing and never fail.
//! - A category never exists with an empty known set; empty tag lists
//!   are skipped, so they can never constrain anything downstream.

use crate::model::project::Project;
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Category -> distinct tags, derived from one project pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagVocabulary {
    categories: IndexMap<String, BTreeSet<String>>,
}

impl TagVocabulary {
    /// Scans `projects` and unions every category's tag lists.
    pub fn extract(projects: &[&Project]) -> Self {
        let mut categories: IndexMap<String, BTreeSet<String>> = IndexMap::new();
        for project in projects {
            for (category, tags) in &project.tags {
                // An empty tag list must not create a constraining
                // category with nothing selectable in it.
                if tags.is_empty() {
                    continue;
                }
                let entry = categories.entry(category.clone()).or_default();
                entry.extend(tags.iter().cloned());
            }
        }
        Self { categories }
    }

    /// Returns category names in first-encounter order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Returns the known tags for `category`, if the category exists.
    pub fn tags(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.categories.get(category)
    }

    /// Returns whether `tag` is a known value of `category`.
    pub fn contains(&self, category: &str, tag: &str) -> bool {
        self.categories
            .get(category)
            .is_some_and(|tags| tags.contains(tag))
    }

    /// Returns the number of known categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns whether the pool contributed no tags at all.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Renders a category key as a human-readable control label.
///
/// Splits camelCase keys on capitals and upper-cases the first letter,
/// so `projectType` becomes `Project Type`.
pub fn friendly_category_label(category: &str) -> String {
    let mut label = String::with_capacity(category.len() + 4);
    for (index, ch) in category.chars().enumerate() {
        if index == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}
