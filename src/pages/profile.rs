//! Profile Page - the whole Infinitum profile screen
//!
//! Header, stats, recommended content, achievements and astrology widgets,
//! with the bottom navigation pinned below.

use dioxus::prelude::*;
use infinitum_core::{
    achievements, profile_summary, recommended_content, today_forecast, TabId, TabSelection,
};

use crate::components::{
    AchievementGrid, AstrologySection, ContentGrid, CosmicBackground, MobileNav, ProfileHero,
    StatsGrid,
};
use crate::context::use_screen_config;

/// Profile screen
#[component]
pub fn ProfileScreen() -> Element {
    let config = use_screen_config();

    // Only the active tab changes; everything else is fixed content
    let mut selection = use_signal(|| TabSelection::new(config.initial_tab));

    let summary = profile_summary();

    rsx! {
        div { class: "profile-screen",
            CosmicBackground { count: config.particle_count }

            ProfileHero { summary: summary.clone() }

            div { class: "profile-content",
                StatsGrid { stats: summary.stats, timing: config.timing }
                ContentGrid { cards: recommended_content() }
                AchievementGrid { items: achievements() }
                AstrologySection { forecast: today_forecast() }
            }

            MobileNav {
                selection: selection(),
                on_select: move |id: TabId| {
                    selection.write().select(id);
                },
            }
        }
    }
}
