//! Hidden-mode activation paths.
//!
//! # Responsibility
//! - Parse the hidden-mode query flag.
//! - Count rapid trigger clicks with an explicit, clock-injected state
//!   machine instead of a hidden timer callback.
//!
//! # Invariants
//! - Only the exact `show=hidden` pair activates hidden mode.
//! - Five clicks inside a rolling 2-second window trip the latch.
//! - Two seconds of inactivity reset the count.

/// Query parameter name gating hidden-project visibility.
pub const REVEAL_QUERY_KEY: &str = "show";

/// Sentinel value of [`REVEAL_QUERY_KEY`] that enables hidden mode.
pub const REVEAL_QUERY_VALUE: &str = "hidden";

/// Clicks required to trip the reveal latch.
pub const REVEAL_CLICKS: u32 = 5;

/// Rolling inactivity window, in milliseconds.
pub const REVEAL_WINDOW_MS: i64 = 2_000;

/// Whether hidden-status projects belong to the eligible pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Hidden projects are excluded (default).
    #[default]
    ListedOnly,
    /// Hidden projects join the eligible pool.
    IncludeHidden,
}

impl Visibility {
    /// Parses a URL query string (with or without a leading `?`).
    ///
    /// Returns `IncludeHidden` only when some pair is exactly
    /// `show=hidden`; everything else, including an empty string, keeps
    /// the default.
    pub fn from_query(query: &str) -> Self {
        let trimmed = query.trim_start_matches('?');
        let matched = trimmed.split('&').any(|pair| {
            pair.split_once('=')
                .is_some_and(|(key, value)| key == REVEAL_QUERY_KEY && value == REVEAL_QUERY_VALUE)
        });
        if matched {
            Self::IncludeHidden
        } else {
            Self::ListedOnly
        }
    }

    /// Returns whether hidden projects are eligible.
    pub fn includes_hidden(self) -> bool {
        self == Self::IncludeHidden
    }
}

/// Composes the hidden-mode variant of a page path.
pub fn reveal_target(path: &str) -> String {
    format!("{path}?{REVEAL_QUERY_KEY}={REVEAL_QUERY_VALUE}")
}

/// Click-count state machine for the reveal easter egg.
///
/// The caller feeds it trigger clicks with an epoch-milliseconds
/// timestamp; `register_click` returns `true` exactly when the required
/// click count lands inside the rolling window, after which the latch
/// resets itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    count: u32,
    deadline_ms: i64,
}

impl RevealLatch {
    /// Creates an idle latch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one click at `now_ms` and reports whether the latch trips.
    pub fn register_click(&mut self, now_ms: i64) -> bool {
        if now_ms >= self.deadline_ms {
            self.count = 0;
        }
        self.count += 1;
        self.deadline_ms = now_ms + REVEAL_WINDOW_MS;

        if self.count >= REVEAL_CLICKS {
            self.reset();
            return true;
        }
        false
    }

    /// Returns the current click count inside the window.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Clears the count and the window deadline.
    pub fn reset(&mut self) {
        self.count = 0;
        self.deadline_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::{reveal_target, RevealLatch, Visibility, REVEAL_CLICKS};

    #[test]
    fn query_flag_requires_exact_sentinel() {
        assert!(Visibility::from_query("show=hidden").includes_hidden());
        assert!(Visibility::from_query("?a=b&show=hidden").includes_hidden());
        assert!(!Visibility::from_query("show=all").includes_hidden());
        assert!(!Visibility::from_query("show=hiddenx").includes_hidden());
        assert!(!Visibility::from_query("").includes_hidden());
    }

    #[test]
    fn reveal_target_appends_the_flag() {
        assert_eq!(reveal_target("/projects"), "/projects?show=hidden");
    }

    #[test]
    fn five_rapid_clicks_trip_the_latch() {
        let mut latch = RevealLatch::new();
        for click in 0..REVEAL_CLICKS - 1 {
            assert!(!latch.register_click(i64::from(click) * 100));
        }
        assert!(latch.register_click(500));
        // Latch resets after tripping.
        assert_eq!(latch.count(), 0);
    }

    #[test]
    fn inactivity_resets_the_count() {
        let mut latch = RevealLatch::new();
        assert!(!latch.register_click(0));
        assert!(!latch.register_click(100));
        // 2s of silence; the window expired, count restarts at one.
        assert!(!latch.register_click(2_200));
        assert_eq!(latch.count(), 1);

        // Still needs four more inside the new window.
        assert!(!latch.register_click(2_300));
        assert!(!latch.register_click(2_400));
        assert!(!latch.register_click(2_500));
        assert!(latch.register_click(2_600));
    }

    #[test]
    fn each_click_extends_the_window() {
        let mut latch = RevealLatch::new();
        // Clicks spaced 1.5s apart never expire the rolling window.
        assert!(!latch.register_click(0));
        assert!(!latch.register_click(1_500));
        assert!(!latch.register_click(3_000));
        assert!(!latch.register_click(4_500));
        assert!(latch.register_click(6_000));
    }
}
