//! Shared context for the Infinitum profile screen.
//!
//! Provides the screen configuration and the haptic sink to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| get_screen_config());
//! use_context_provider(|| -> SharedHaptics { Arc::new(LoggingHaptics) });
//!
//! // In child components
//! let haptics = use_haptics();
//! haptics.emit(HapticFeedback::Light);
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use infinitum_core::{HapticFeedback, HapticSink, ScreenConfig};

/// Shared haptic sink type for context.
pub type SharedHaptics = Arc<dyn HapticSink>;

/// Get the screen configuration.
/// Uses the global config set from command line args.
pub fn get_screen_config() -> ScreenConfig {
    crate::get_screen_config()
}

/// Hook to access the screen configuration from context.
pub fn use_screen_config() -> ScreenConfig {
    use_context::<ScreenConfig>()
}

/// Hook to access the haptic sink from context.
pub fn use_haptics() -> SharedHaptics {
    use_context::<SharedHaptics>()
}

/// Hook returning a handler that requests light feedback, the kind every
/// tap on this screen uses.
pub fn use_light_tap() -> impl Fn() + Clone + 'static {
    let haptics = use_haptics();
    move || haptics.emit(HapticFeedback::Light)
}
