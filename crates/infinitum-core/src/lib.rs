//! Infinitum Core Library
//!
//! UI-free model behind the Infinitum profile screen.
//!
//! ## Overview
//!
//! The profile screen is a decorative view for a mystic mini-app: a header,
//! three animated statistic counters, recommended content, an achievements
//! grid, astrology widgets and a bottom navigation bar. All data is fixed.
//! This crate holds the fixtures and the little behavior there is:
//!
//! - **Counter ramp**: linear climb from zero to a target on a fixed cadence
//! - **Tab selection**: the most recently clicked tab is active
//! - **Calendar grid**: Monday-first month layout with marked days
//! - **Haptics seam**: where host feedback would be requested
//!
//! ## Quick Start
//!
//! ```ignore
//! use infinitum_core::{drive_ramp, CounterRamp, CounterTiming};
//!
//! let timing = CounterTiming::default();
//! let ramp = CounterRamp::new(127, &timing);
//! let last = drive_ramp(ramp, timing.tick(), |v| println!("{v}")).await;
//! assert_eq!(last, 127);
//! ```

pub mod achievements;
pub mod astrology;
pub mod config;
pub mod content;
pub mod counter;
pub mod error;
pub mod haptics;
pub mod nav;
pub mod profile;
pub mod timing;

// Re-exports
pub use achievements::{achievements, Achievement, Rarity, STAR_SLOTS};
pub use astrology::{
    today_forecast, CalendarCell, CalendarMonth, DayMark, TodayForecast, WEEKDAY_HEADERS,
};
pub use config::{ScreenConfig, DEFAULT_PARTICLE_COUNT};
pub use content::{recommended_content, ContentCard, ContentFormat};
pub use counter::{drive_ramp, visible_ratio, CounterRamp, CounterTrigger, TriggerAction};
pub use error::{ProfileError, ProfileResult};
pub use haptics::{HapticChannel, HapticFeedback, HapticSink, LoggingHaptics, RecordingHaptics};
pub use nav::{NavTab, TabId, TabSelection, NAV_TABS};
pub use profile::{profile_summary, ProfileSummary, StatCounter};
pub use timing::CounterTiming;
