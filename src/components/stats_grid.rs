//! Stats Grid - three animated statistic cards.

use dioxus::prelude::*;
use infinitum_core::{CounterTiming, StatCounter};
use infinitum_ui::AnimatedCounter;

#[component]
pub fn StatsGrid(stats: [StatCounter; 3], timing: CounterTiming) -> Element {
    rsx! {
        div { class: "stats-grid",
            for stat in stats {
                div { key: "{stat.label}", class: "stat-card glass lift-on-hover",
                    div { class: "stat-value gradient-text",
                        AnimatedCounter {
                            target: stat.target,
                            timing: timing,
                            suffix: stat.suffix,
                        }
                    }
                    p { class: "stat-label", "{stat.label}" }
                }
            }
        }
    }
}
