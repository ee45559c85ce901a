use std::sync::Arc;

use dioxus::prelude::*;
use infinitum_core::LoggingHaptics;

use crate::context::{get_screen_config, SharedHaptics};
use crate::pages::ProfileScreen;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, screen configuration and the haptic sink.
#[component]
pub fn App() -> Element {
    use_context_provider(get_screen_config);
    use_context_provider(|| -> SharedHaptics { Arc::new(LoggingHaptics) });

    rsx! {
        style { {GLOBAL_STYLES} }
        ProfileScreen {}
    }
}
