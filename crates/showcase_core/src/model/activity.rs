//! Precomputed activity metadata attached to catalog entries.

use serde::{Deserialize, Serialize};

/// Activity signals for one project, all optional.
///
/// `hotness_score` is a 0-100 signal precomputed upstream; it drives the
/// badge tier only. `last_commit` is a `YYYY-MM-DD` date string or the
/// literal `"unknown"` when the upstream job could not resolve it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityStats {
    /// Composite activity score on a 0-100 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotness_score: Option<f64>,
    /// Commits over the trailing 30 days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commits_30d: Option<u32>,
    /// Distinct contributor count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributors: Option<u32>,
    /// Date of the most recent commit, `YYYY-MM-DD` or `"unknown"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_commit: Option<String>,
}

impl ActivityStats {
    /// Returns whether any signal is present at all.
    pub fn is_empty(&self) -> bool {
        self.hotness_score.is_none()
            && self.commits_30d.is_none()
            && self.contributors.is_none()
            && self.last_commit.is_none()
    }
}
