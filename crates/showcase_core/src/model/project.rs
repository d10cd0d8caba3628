//! Project record and visibility status.
//!
//! # Responsibility
//! - Define the catalog entry shape shared by filtering and projection.
//! - Preserve the category order of the source document in `tags`.
//!
//! # Invariants
//! - Unknown `status` strings deserialize to `Listed`, never fail.
//! - `tags` keys are category names; values are the project's tags in
//!   that category, possibly empty.

use crate::model::activity::ActivityStats;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Visibility status of one catalog entry.
///
/// Anything other than the `hidden` sentinel counts as listed, so new
/// status strings in the catalog never break deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Excluded from the eligible pool unless hidden mode is active.
    Hidden,
    /// Shown in the default pool.
    #[default]
    #[serde(other)]
    Listed,
}

/// One catalog entry.
///
/// Immutable once loaded. Tag metadata is a category-to-tags map; the
/// vocabulary and the filter predicate are both derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Card headline.
    pub title: String,
    /// Card body text.
    pub description: String,
    /// Call-to-action link target.
    pub url: String,
    /// Optional icon name; projection falls back to a stock icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Display visibility; defaults to listed when absent.
    #[serde(default)]
    pub status: ProjectStatus,
    /// Category -> tags map, insertion order preserved from the document.
    #[serde(default)]
    pub tags: IndexMap<String, Vec<String>>,
    /// Optional activity metadata driving badge and recency projection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivityStats>,
}

impl Project {
    /// Returns whether this project belongs to the default (non-hidden) pool.
    pub fn is_listed(&self) -> bool {
        self.status != ProjectStatus::Hidden
    }

    /// Returns the project's tags in `category`, if any were declared.
    pub fn tags_in(&self, category: &str) -> Option<&[String]> {
        self.tags.get(category).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectStatus};

    fn parse(raw: &str) -> Project {
        serde_json::from_str(raw).expect("project json should parse")
    }

    #[test]
    fn status_defaults_to_listed_when_absent() {
        let project = parse(r#"{"title":"t","description":"d","url":"u"}"#);
        assert_eq!(project.status, ProjectStatus::Listed);
        assert!(project.is_listed());
    }

    #[test]
    fn unknown_status_string_falls_back_to_listed() {
        let project = parse(r#"{"title":"t","description":"d","url":"u","status":"archived"}"#);
        assert_eq!(project.status, ProjectStatus::Listed);
    }

    #[test]
    fn hidden_status_is_recognized() {
        let project = parse(r#"{"title":"t","description":"d","url":"u","status":"hidden"}"#);
        assert!(!project.is_listed());
    }

    #[test]
    fn tags_preserve_document_category_order() {
        let project = parse(
            r#"{"title":"t","description":"d","url":"u",
                "tags":{"language":["rust"],"domain":["tooling"]}}"#,
        );
        let categories: Vec<&String> = project.tags.keys().collect();
        assert_eq!(categories, ["language", "domain"]);
        assert_eq!(project.tags_in("language"), Some(&["rust".to_string()][..]));
        assert_eq!(project.tags_in("missing"), None);
    }
}
