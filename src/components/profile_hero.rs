//! Profile Hero - header band, avatar and identity line.

use dioxus::prelude::*;
use infinitum_core::ProfileSummary;

/// Gradient header band with the avatar overlapping its lower edge.
#[component]
pub fn ProfileHero(summary: ProfileSummary) -> Element {
    rsx! {
        div { class: "hero-band",
            div { class: "hero-band-glow" }
        }

        div { class: "hero-identity",
            // Avatar with spinning progress ring
            div { class: "avatar-ring",
                div { class: "avatar-progress" }
                div { class: "avatar-placeholder",
                    span { class: "avatar-glyph", "👤" }
                }
            }

            h1 { class: "display-name gradient-text", "{summary.display_name}" }
            p { class: "rank-line", "{summary.rank_line()}" }
        }
    }
}
