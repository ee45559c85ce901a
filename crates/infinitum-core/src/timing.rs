//! Counter animation timing.

use std::time::Duration;

use crate::error::{ProfileError, ProfileResult};

/// Default ramp length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);

/// Default timer cadence.
pub const DEFAULT_TICK: Duration = Duration::from_millis(10);

/// Fraction of the counter that must be on screen before it starts.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.5;

/// How a counter ramps from zero to its target.
///
/// Always valid once constructed: duration and tick are non-zero, the tick
/// fits inside the duration, and the threshold lies in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTiming {
    duration: Duration,
    tick: Duration,
    visibility_threshold: f64,
}

impl CounterTiming {
    pub fn new(
        duration: Duration,
        tick: Duration,
        visibility_threshold: f64,
    ) -> ProfileResult<Self> {
        if duration.is_zero() || tick.is_zero() || tick > duration {
            return Err(ProfileError::InvalidTiming {
                duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
                tick_ms: u64::try_from(tick.as_millis()).unwrap_or(u64::MAX),
            });
        }

        // NaN fails both comparisons
        if !(visibility_threshold > 0.0 && visibility_threshold <= 1.0) {
            return Err(ProfileError::InvalidThreshold(visibility_threshold));
        }

        Ok(Self {
            duration,
            tick,
            visibility_threshold,
        })
    }

    /// Build from millisecond values, as they arrive from the command line.
    pub fn from_millis(
        duration_ms: u64,
        tick_ms: u64,
        visibility_threshold: f64,
    ) -> ProfileResult<Self> {
        Self::new(
            Duration::from_millis(duration_ms),
            Duration::from_millis(tick_ms),
            visibility_threshold,
        )
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn visibility_threshold(&self) -> f64 {
        self.visibility_threshold
    }

    /// Number of ticks in one ramp. At least 1.
    pub fn steps(&self) -> u64 {
        let steps = self.duration.as_nanos() / self.tick.as_nanos();
        u64::try_from(steps).unwrap_or(u64::MAX).max(1)
    }

    /// Whether an intersection ratio reported by the view counts as visible.
    pub fn is_visible(&self, intersection_ratio: f64) -> bool {
        intersection_ratio >= self.visibility_threshold
    }
}

impl Default for CounterTiming {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            tick: DEFAULT_TICK,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_second_in_hundred_steps() {
        let timing = CounterTiming::default();
        assert_eq!(timing.steps(), 100);
        assert_eq!(timing.visibility_threshold(), 0.5);
    }

    #[test]
    fn rejects_zero_duration() {
        let err = CounterTiming::from_millis(0, 10, 0.5).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidTiming { duration_ms: 0, .. }));
    }

    #[test]
    fn rejects_zero_tick() {
        assert!(CounterTiming::from_millis(1000, 0, 0.5).is_err());
    }

    #[test]
    fn rejects_tick_longer_than_duration() {
        assert!(CounterTiming::from_millis(100, 200, 0.5).is_err());
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        assert_eq!(
            CounterTiming::from_millis(1000, 10, 0.0),
            Err(ProfileError::InvalidThreshold(0.0))
        );
        assert!(CounterTiming::from_millis(1000, 10, 1.5).is_err());
        assert!(CounterTiming::from_millis(1000, 10, f64::NAN).is_err());
    }

    #[test]
    fn threshold_of_one_is_allowed() {
        let timing = CounterTiming::from_millis(1000, 10, 1.0).unwrap();
        assert!(timing.is_visible(1.0));
        assert!(!timing.is_visible(0.99));
    }

    #[test]
    fn uneven_division_rounds_down() {
        let timing = CounterTiming::from_millis(1000, 300, 0.5).unwrap();
        assert_eq!(timing.steps(), 3);
    }

    #[test]
    fn oversized_duration_saturates_in_error() {
        let err = CounterTiming::new(Duration::MAX, Duration::ZERO, 0.5).unwrap_err();
        assert_eq!(
            err,
            ProfileError::InvalidTiming {
                duration_ms: u64::MAX,
                tick_ms: 0,
            }
        );
    }
}
