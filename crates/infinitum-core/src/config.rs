//! Screen configuration assembled from the command line.

use crate::error::ProfileResult;
use crate::nav::TabId;
use crate::timing::CounterTiming;

/// Decorative particles scattered behind the screen.
pub const DEFAULT_PARTICLE_COUNT: usize = 50;

/// Everything the profile screen reads at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenConfig {
    pub timing: CounterTiming,
    pub initial_tab: TabId,
    pub particle_count: usize,
}

impl ScreenConfig {
    /// Validate raw values. `initial_tab` is a tab id such as `home`.
    pub fn from_parts(
        duration_ms: u64,
        tick_ms: u64,
        visibility_threshold: f64,
        initial_tab: &str,
        particle_count: usize,
    ) -> ProfileResult<Self> {
        Ok(Self {
            timing: CounterTiming::from_millis(duration_ms, tick_ms, visibility_threshold)?,
            initial_tab: initial_tab.parse()?,
            particle_count,
        })
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            timing: CounterTiming::default(),
            initial_tab: TabId::Home,
            particle_count: DEFAULT_PARTICLE_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;

    #[test]
    fn defaults_match_from_parts() {
        let parsed = ScreenConfig::from_parts(1000, 10, 0.5, "home", 50).unwrap();
        assert_eq!(parsed, ScreenConfig::default());
    }

    #[test]
    fn bad_tab_is_reported() {
        let err = ScreenConfig::from_parts(1000, 10, 0.5, "stars", 50).unwrap_err();
        assert_eq!(err, ProfileError::UnknownTab("stars".to_string()));
    }

    #[test]
    fn bad_timing_wins_over_bad_tab() {
        let err = ScreenConfig::from_parts(0, 10, 0.5, "stars", 50).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidTiming { .. }));
    }
}
