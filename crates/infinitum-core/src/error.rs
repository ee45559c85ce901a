//! Error types for the Infinitum profile screen

use thiserror::Error;

/// Main error type for profile screen model operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// Counter timing is unusable (zero duration, zero tick, or tick longer than duration)
    #[error("Invalid counter timing: duration {duration_ms}ms, tick {tick_ms}ms")]
    InvalidTiming { duration_ms: u64, tick_ms: u64 },

    /// Visibility threshold must lie in (0, 1]
    #[error("Invalid visibility threshold: {0}")]
    InvalidThreshold(f64),

    /// Navigation tab id is not one of the bottom bar tabs
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    /// Calendar month cannot be constructed
    #[error("Invalid calendar month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
}

/// Result type alias using ProfileError
pub type ProfileResult<T> = Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProfileError::UnknownTab("settings".to_string());
        assert_eq!(format!("{}", err), "Unknown tab: settings");
    }

    #[test]
    fn test_timing_error_display() {
        let err = ProfileError::InvalidTiming {
            duration_ms: 0,
            tick_ms: 10,
        };
        assert_eq!(
            err.to_string(),
            "Invalid counter timing: duration 0ms, tick 10ms"
        );
    }
}
