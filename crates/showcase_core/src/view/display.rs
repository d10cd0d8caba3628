//! Card projection, activity badges and recency lines.
//!
//! # Responsibility
//! - Build one `ProjectCard` per visible project.
//! - Derive the badge tier from the hotness score, first match wins.
//! - Compose the human-readable recency line from activity stats.
//!
//! # Invariants
//! - A zero or absent hotness score produces no badge.
//! - Recency is relative to an injected `today`, never the wall clock.
//! - Commits older than 30 days contribute no recency clause.

use crate::model::activity::ActivityStats;
use crate::model::project::{Project, ProjectStatus};
use chrono::NaiveDate;

/// Stock icon used when a project declares none.
pub const DEFAULT_ICON: &str = "bi-box-seam";

/// Placeholder text shown instead of an empty grid.
pub const EMPTY_PLACEHOLDER: &str = "No projects match the selected filters.";

/// Separator between recency clauses.
const RECENCY_SEPARATOR: &str = " · ";

/// Oldest last-commit age, in days, still worth a recency clause.
const RECENCY_MAX_AGE_DAYS: i64 = 30;

/// Activity badge tier derived from the hotness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityBadge {
    Hot,
    Active,
    Growing,
    Updated,
    Quiet,
}

impl ActivityBadge {
    /// Maps a hotness score to a badge tier, top-down, first match wins.
    ///
    /// Returns `None` for a zero, negative or absent signal.
    pub fn from_score(score: f64) -> Option<Self> {
        if score >= 80.0 {
            Some(Self::Hot)
        } else if score >= 60.0 {
            Some(Self::Active)
        } else if score >= 40.0 {
            Some(Self::Growing)
        } else if score >= 20.0 {
            Some(Self::Updated)
        } else if score > 0.0 {
            Some(Self::Quiet)
        } else {
            None
        }
    }

    /// Display label for the tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hot => "Hot",
            Self::Active => "Active",
            Self::Growing => "Growing",
            Self::Updated => "Updated",
            Self::Quiet => "Quiet",
        }
    }
}

/// Presentation-agnostic card for one visible project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    /// Card headline.
    pub title: String,
    /// Card body text.
    pub description: String,
    /// Call-to-action link target.
    pub url: String,
    /// Icon name, defaulted when the project declares none.
    pub icon: String,
    /// Marks unlisted entries so the surface can style them apart.
    pub hidden: bool,
    /// Optional activity badge tier.
    pub badge: Option<ActivityBadge>,
    /// Optional human-readable recency line.
    pub recency: Option<String>,
}

/// Projection of the visible set plus the counts for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    /// One card per visible project, in pool order.
    pub cards: Vec<ProjectCard>,
    /// Number of projects passing the current filters.
    pub visible_count: usize,
    /// Size of the hidden-aware eligible pool.
    pub total_eligible: usize,
}

impl DisplayModel {
    /// Projects `visible` into cards; `today` anchors recency math.
    pub fn project(visible: &[&Project], total_eligible: usize, today: NaiveDate) -> Self {
        let cards = visible
            .iter()
            .map(|project| project_card(project, today))
            .collect::<Vec<_>>();
        Self {
            visible_count: cards.len(),
            total_eligible,
            cards,
        }
    }

    /// Returns the placeholder text when nothing is visible.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.cards.is_empty().then_some(EMPTY_PLACEHOLDER)
    }
}

fn project_card(project: &Project, today: NaiveDate) -> ProjectCard {
    // A present-but-blank activity object means the same as no activity.
    let activity = project
        .activity
        .as_ref()
        .filter(|stats| !stats.is_empty());
    let badge = activity
        .and_then(|stats| stats.hotness_score)
        .and_then(ActivityBadge::from_score);
    let recency = activity.and_then(|stats| recency_line(stats, today));

    ProjectCard {
        title: project.title.clone(),
        description: project.description.clone(),
        url: project.url.clone(),
        icon: project
            .icon
            .clone()
            .unwrap_or_else(|| DEFAULT_ICON.to_string()),
        hidden: project.status == ProjectStatus::Hidden,
        badge,
        recency,
    }
}

/// Composes the recency line from the applicable clauses.
///
/// Clause order is fixed: commit count, contributor count, last-commit
/// age. Returns `None` when no clause applies.
pub fn recency_line(activity: &ActivityStats, today: NaiveDate) -> Option<String> {
    let mut clauses = Vec::new();

    if let Some(commits) = activity.commits_30d.filter(|count| *count > 0) {
        clauses.push(format!("{commits} commits (30d)"));
    }
    if let Some(contributors) = activity.contributors.filter(|count| *count > 1) {
        clauses.push(format!("{contributors} contributors"));
    }
    if let Some(age) = activity
        .last_commit
        .as_deref()
        .and_then(|date| last_commit_age_days(date, today))
    {
        match age {
            // Negative ages come from clock skew; treat them as today.
            d if d <= 0 => clauses.push("Updated today".to_string()),
            1 => clauses.push("Updated yesterday".to_string()),
            d if d < RECENCY_MAX_AGE_DAYS => clauses.push(format!("Updated {d} days ago")),
            _ => {}
        }
    }

    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(RECENCY_SEPARATOR))
    }
}

fn last_commit_age_days(date: &str, today: NaiveDate) -> Option<i64> {
    // "unknown" and malformed dates fall through to None.
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some((today - parsed).num_days())
}
