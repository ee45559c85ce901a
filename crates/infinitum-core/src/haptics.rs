//! Haptic feedback seam.
//!
//! A host mini-app container exposes two haptic entry points: impacts
//! (light/medium/heavy taps) and notifications (success/warning/error).
//! Nothing is dispatched here. [`LoggingHaptics`] records the intent in the
//! log, and [`RecordingHaptics`] keeps it in memory for tests.

use std::fmt;

use parking_lot::Mutex;

/// Kind of haptic feedback requested by an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticFeedback {
    Light,
    Medium,
    Heavy,
    Success,
    Warning,
    Error,
}

/// Host entry point a feedback kind is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticChannel {
    Impact,
    Notification,
}

impl HapticFeedback {
    pub fn channel(self) -> HapticChannel {
        match self {
            HapticFeedback::Light | HapticFeedback::Medium | HapticFeedback::Heavy => {
                HapticChannel::Impact
            }
            HapticFeedback::Success | HapticFeedback::Warning | HapticFeedback::Error => {
                HapticChannel::Notification
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HapticFeedback::Light => "light",
            HapticFeedback::Medium => "medium",
            HapticFeedback::Heavy => "heavy",
            HapticFeedback::Success => "success",
            HapticFeedback::Warning => "warning",
            HapticFeedback::Error => "error",
        }
    }
}

impl fmt::Display for HapticFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver of haptic feedback requests.
pub trait HapticSink: Send + Sync {
    fn emit(&self, feedback: HapticFeedback);
}

/// Logs each request instead of driving a device.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHaptics;

impl HapticSink for LoggingHaptics {
    fn emit(&self, feedback: HapticFeedback) {
        tracing::info!(
            kind = %feedback,
            channel = ?feedback.channel(),
            "Haptic feedback"
        );
    }
}

/// Keeps every request, in order.
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    events: Mutex<Vec<HapticFeedback>>,
}

impl RecordingHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<HapticFeedback> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl HapticSink for RecordingHaptics {
    fn emit(&self, feedback: HapticFeedback) {
        self.events.lock().push(feedback);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn taps_route_to_impact() {
        assert_eq!(HapticFeedback::Light.channel(), HapticChannel::Impact);
        assert_eq!(HapticFeedback::Medium.channel(), HapticChannel::Impact);
        assert_eq!(HapticFeedback::Heavy.channel(), HapticChannel::Impact);
    }

    #[test]
    fn outcomes_route_to_notification() {
        assert_eq!(HapticFeedback::Success.channel(), HapticChannel::Notification);
        assert_eq!(HapticFeedback::Warning.channel(), HapticChannel::Notification);
        assert_eq!(HapticFeedback::Error.channel(), HapticChannel::Notification);
    }

    #[test]
    fn recording_keeps_order() {
        let sink = RecordingHaptics::new();
        sink.emit(HapticFeedback::Light);
        sink.emit(HapticFeedback::Success);
        assert_eq!(
            sink.events(),
            vec![HapticFeedback::Light, HapticFeedback::Success]
        );
    }

    #[test]
    fn sinks_work_behind_shared_pointer() {
        let recording = Arc::new(RecordingHaptics::new());
        let sink: Arc<dyn HapticSink> = recording.clone();
        sink.emit(HapticFeedback::Heavy);
        LoggingHaptics.emit(HapticFeedback::Heavy);
        assert_eq!(recording.len(), 1);
    }

    #[test]
    fn display_uses_host_names() {
        assert_eq!(HapticFeedback::Warning.to_string(), "warning");
    }
}
