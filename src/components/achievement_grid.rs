//! Achievement Grid - "Созвездие достижений".

use dioxus::prelude::*;
use infinitum_core::Achievement;

#[component]
pub fn AchievementGrid(items: Vec<Achievement>) -> Element {
    rsx! {
        h2 { class: "section-title", "Созвездие достижений" }
        div { class: "achievement-grid",
            for (index, achievement) in items.into_iter().enumerate() {
                AchievementTile { key: "{index}", achievement: achievement }
            }
        }
    }
}

/// One achievement. Locked tiles are dimmed under a lock overlay.
#[component]
fn AchievementTile(achievement: Achievement) -> Element {
    rsx! {
        div { class: achievement.tile_class(),
            if achievement.shows_lock() {
                div { class: "lock-overlay",
                    span { class: "lock-glyph", "🔒" }
                }
            }

            div { class: achievement.rarity.icon_class(), "{achievement.icon}" }
            h4 { class: "achievement-name", "{achievement.name}" }

            div { class: "star-row",
                for (i, filled) in achievement.rarity.stars().into_iter().enumerate() {
                    span {
                        key: "{i}",
                        class: if filled { "star filled" } else { "star" },
                        "⭐"
                    }
                }
            }

            if let Some(label) = achievement.earned_label() {
                p { class: "earned-on", "{label}" }
            }
        }
    }
}
