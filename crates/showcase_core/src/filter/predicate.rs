//! Visibility predicate.
//!
//! # Responsibility
//! - Decide whether one project passes the current filter selections.
//! - Narrow an eligible pool into the visible set.
//!
//! # Invariants
//! - AND across categories, OR within a category.
//! - A fully selected category excludes nothing; an empty selection
//!   excludes everything; a partial selection requires tag overlap.
//! - Hidden-status gating happens upstream in the session, never here.

use crate::filter::state::{CategoryConstraint, FilterState};
use crate::model::project::Project;

/// Returns whether `project` passes every category constraint.
///
/// Pure function of its inputs; evaluation order carries no meaning.
pub fn is_visible(project: &Project, filters: &FilterState) -> bool {
    filters
        .categories()
        .all(|category| passes_category(project, filters, category))
}

/// Narrows `pool` to the projects passing the current selections.
pub fn visible_subset<'a>(pool: &[&'a Project], filters: &FilterState) -> Vec<&'a Project> {
    pool.iter()
        .copied()
        .filter(|project| is_visible(project, filters))
        .collect()
}

fn passes_category(project: &Project, filters: &FilterState, category: &str) -> bool {
    match filters.constraint(category) {
        CategoryConstraint::Unconstrained => true,
        CategoryConstraint::ExcludeAll => false,
        CategoryConstraint::AnyOf(selected) => project
            .tags_in(category)
            .is_some_and(|tags| tags.iter().any(|tag| selected.contains(tag))),
    }
}
