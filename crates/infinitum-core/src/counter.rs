//! Linear counter ramp for the statistic cards.
//!
//! A [`CounterRamp`] walks from zero to its target in a fixed number of
//! ticks. The value after tick `n` of `steps` is `floor(target * n / steps)`,
//! computed in integers so the last tick lands exactly on the target.
//!
//! [`drive_ramp`] runs a ramp against the tokio timer, one tick per sleep.
//! [`CounterTrigger`] decides when a counter on screen is visible enough to
//! start.

use std::time::Duration;

use crate::timing::CounterTiming;

/// Progress of a counter from zero to its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterRamp {
    target: u32,
    steps: u64,
    elapsed: u64,
}

impl CounterRamp {
    pub fn new(target: u32, timing: &CounterTiming) -> Self {
        Self::with_steps(target, timing.steps())
    }

    /// Ramp with an explicit tick count. Zero is treated as one.
    pub fn with_steps(target: u32, steps: u64) -> Self {
        let steps = steps.max(1);
        let elapsed = if target == 0 { steps } else { 0 };
        Self {
            target,
            steps,
            elapsed,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Value currently displayed.
    pub fn value(&self) -> u32 {
        let scaled = u128::from(self.target) * u128::from(self.elapsed) / u128::from(self.steps);
        // elapsed <= steps, so scaled <= target
        u32::try_from(scaled).unwrap_or(self.target)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.steps
    }

    /// Advance one tick and return the new value. No-op once finished.
    pub fn tick(&mut self) -> u32 {
        if !self.is_finished() {
            self.elapsed += 1;
        }
        self.value()
    }
}

impl Iterator for CounterRamp {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.is_finished() {
            None
        } else {
            Some(self.tick())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.steps - self.elapsed).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

/// Run `ramp` to completion, sleeping `tick` before every step.
///
/// `on_value` sees each new value; the last one is always the target.
/// Dropping the returned future stops the ramp where it is.
pub async fn drive_ramp<F>(mut ramp: CounterRamp, tick: Duration, mut on_value: F) -> u32
where
    F: FnMut(u32),
{
    tracing::debug!(goal = ramp.target(), steps = ramp.steps(), "counter ramp started");

    while !ramp.is_finished() {
        tokio::time::sleep(tick).await;
        on_value(ramp.tick());
    }

    tracing::debug!(goal = ramp.target(), "counter ramp finished");
    ramp.value()
}

/// What a counter should do after a visibility report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerAction {
    /// Visible enough: start the ramp now
    Start,
    /// Partly on screen but below the threshold: keep measuring
    Watch,
    /// Off screen, unmeasurable, or already started
    Ignore,
}

/// Start-once gate for a visibility-triggered counter.
///
/// Visibility reports arrive as intersection ratios. A counter partly
/// on screen may never be reported again, so the caller must keep
/// measuring while [`TriggerAction::Watch`] is returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTrigger {
    timing: CounterTiming,
    started: bool,
}

impl CounterTrigger {
    pub fn new(timing: &CounterTiming) -> Self {
        Self {
            timing: *timing,
            started: false,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn observe(&mut self, ratio: f64) -> TriggerAction {
        // NaN fails the comparison
        if self.started || !(ratio > 0.0) {
            return TriggerAction::Ignore;
        }
        if self.timing.is_visible(ratio) {
            self.started = true;
            TriggerAction::Start
        } else {
            TriggerAction::Watch
        }
    }
}

/// Fraction of a vertical span `[top, bottom)` inside a viewport of
/// `viewport_height`, in `[0, 1]`. Degenerate spans count as invisible.
pub fn visible_ratio(top: f64, bottom: f64, viewport_height: f64) -> f64 {
    let height = bottom - top;
    if !(height > 0.0) || !(viewport_height > 0.0) {
        return 0.0;
    }
    let shown = bottom.min(viewport_height) - top.max(0.0);
    (shown / height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let ramp = CounterRamp::new(127, &CounterTiming::default());
        assert_eq!(ramp.value(), 0);
        assert!(!ramp.is_finished());
    }

    #[test]
    fn reaches_target_exactly() {
        let values: Vec<u32> = CounterRamp::new(127, &CounterTiming::default()).collect();
        assert_eq!(values.len(), 100);
        assert_eq!(values.last(), Some(&127));
        assert!(values.iter().all(|v| *v <= 127));
    }

    #[test]
    fn values_are_floored() {
        let mut ramp = CounterRamp::with_steps(45, 100);
        // 45 * 1 / 100 = 0.45
        assert_eq!(ramp.tick(), 0);
        ramp.tick();
        ramp.tick();
        // 45 * 3 / 100 = 1.35
        assert_eq!(ramp.value(), 1);
    }

    #[test]
    fn ticks_after_finish_are_noops() {
        let mut ramp = CounterRamp::with_steps(89, 4);
        for _ in 0..4 {
            ramp.tick();
        }
        assert!(ramp.is_finished());
        assert_eq!(ramp.tick(), 89);
        assert_eq!(ramp.next(), None);
    }

    #[test]
    fn zero_target_is_finished_immediately() {
        let mut ramp = CounterRamp::with_steps(0, 100);
        assert!(ramp.is_finished());
        assert_eq!(ramp.next(), None);
        assert_eq!(ramp.value(), 0);
    }

    #[test]
    fn target_below_steps_is_monotonic() {
        let values: Vec<u32> = CounterRamp::with_steps(3, 100).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values.last(), Some(&3));
    }

    #[test]
    fn size_hint_counts_remaining_ticks() {
        let mut ramp = CounterRamp::with_steps(10, 5);
        ramp.tick();
        assert_eq!(ramp.size_hint(), (4, Some(4)));
    }

    #[tokio::test(start_paused = true)]
    async fn driver_reports_every_tick() {
        let mut seen = Vec::new();
        let last = drive_ramp(CounterRamp::with_steps(127, 100), Duration::from_millis(10), |v| {
            seen.push(v)
        })
        .await;

        assert_eq!(last, 127);
        assert_eq!(seen.len(), 100);
        assert_eq!(seen.last(), Some(&127));
    }

    #[tokio::test(start_paused = true)]
    async fn driver_takes_full_duration() {
        let start = tokio::time::Instant::now();
        drive_ramp(CounterRamp::with_steps(45, 100), Duration::from_millis(10), |_| {}).await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(1000));
        assert!(elapsed < Duration::from_millis(1010));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_driver_stops_the_ramp() {
        let mut seen = Vec::new();
        let driver = drive_ramp(CounterRamp::with_steps(100, 100), Duration::from_millis(10), |v| {
            seen.push(v)
        });

        let stopped = tokio::time::timeout(Duration::from_millis(255), driver).await;
        assert!(stopped.is_err());
        assert_eq!(seen.len(), 25);
        assert_eq!(seen.last(), Some(&25));
    }

    #[test]
    fn trigger_waits_for_threshold_then_starts_once() {
        let mut trigger = CounterTrigger::new(&CounterTiming::default());
        assert_eq!(trigger.observe(0.1), TriggerAction::Watch);
        assert_eq!(trigger.observe(0.49), TriggerAction::Watch);
        assert!(!trigger.is_started());
        assert_eq!(trigger.observe(0.5), TriggerAction::Start);
        assert!(trigger.is_started());
        assert_eq!(trigger.observe(1.0), TriggerAction::Ignore);
    }

    #[test]
    fn trigger_does_not_restart_on_reentry() {
        let mut trigger = CounterTrigger::new(&CounterTiming::default());
        assert_eq!(trigger.observe(0.8), TriggerAction::Start);
        // Scrolled away and back
        assert_eq!(trigger.observe(0.0), TriggerAction::Ignore);
        assert_eq!(trigger.observe(0.3), TriggerAction::Ignore);
        assert_eq!(trigger.observe(0.9), TriggerAction::Ignore);
    }

    #[test]
    fn trigger_ignores_unmeasurable_ratios() {
        let mut trigger = CounterTrigger::new(&CounterTiming::default());
        assert_eq!(trigger.observe(f64::NAN), TriggerAction::Ignore);
        assert_eq!(trigger.observe(-1.0), TriggerAction::Ignore);
        assert_eq!(trigger.observe(0.0), TriggerAction::Ignore);
        assert!(!trigger.is_started());
        assert_eq!(trigger.observe(0.75), TriggerAction::Start);
    }

    #[test]
    fn visible_ratio_clips_to_viewport() {
        // Fully inside
        assert_eq!(visible_ratio(100.0, 200.0, 900.0), 1.0);
        // Top 10% peeking in from below
        assert_eq!(visible_ratio(880.0, 1080.0, 900.0), 0.1);
        // Half scrolled off the top
        assert_eq!(visible_ratio(-50.0, 50.0, 900.0), 0.5);
        // Entirely below
        assert_eq!(visible_ratio(1000.0, 1100.0, 900.0), 0.0);
        assert_eq!(visible_ratio(10.0, 10.0, 900.0), 0.0);
        assert_eq!(visible_ratio(10.0, 20.0, f64::NAN), 0.0);
    }

    #[test]
    fn measured_ratios_feed_the_trigger() {
        let mut trigger = CounterTrigger::new(&CounterTiming::default());
        // Element scrolls up through the bottom edge of the viewport
        let actions: Vec<TriggerAction> = [880.0, 860.0, 850.0, 800.0]
            .iter()
            .map(|top| trigger.observe(visible_ratio(*top, top + 100.0, 900.0)))
            .collect();
        assert_eq!(
            actions,
            vec![
                TriggerAction::Watch,
                TriggerAction::Watch,
                TriggerAction::Start,
                TriggerAction::Ignore,
            ]
        );
    }
}
