//! Content Grid - "Рекомендуемый контент" cards.

use dioxus::prelude::*;
use infinitum_core::ContentCard;
use infinitum_ui::GradientBorderCard;

use crate::context::use_light_tap;

#[component]
pub fn ContentGrid(cards: Vec<ContentCard>) -> Element {
    rsx! {
        h2 { class: "section-title", "Рекомендуемый контент" }
        div { class: "content-grid",
            for card in cards {
                {
                    let index = card.index;
                    rsx! {
                        ContentCardView { key: "{index}", card: card }
                    }
                }
            }
        }
    }
}

/// A single recommended content card
#[component]
fn ContentCardView(card: ContentCard) -> Element {
    let tap = use_light_tap();
    let tap_share = tap.clone();

    rsx! {
        GradientBorderCard { class: "content-card",
            // Preview with tag pills
            div { class: "content-preview",
                div { class: "preview-placeholder", "{card.preview_label}" }
                div { class: "preview-shade" }
                div { class: "preview-pills",
                    span { class: "pill gradient-pill", "{card.tag_label()}" }
                    span { class: "pill gradient-pill", "{card.duration_label()}" }
                }
            }

            h3 { class: "content-title", "{card.title}" }
            p { class: "content-description", "{card.description}" }

            // Relevance bar
            div { class: "relevance",
                div { class: "relevance-track",
                    div { class: "relevance-fill", style: "{card.relevance_style()}" }
                }
                span { class: "relevance-label", "{card.relevance_label()}" }
            }

            div { class: "content-footer",
                div { class: "content-meta",
                    span { "👤 {card.author}" }
                    for format in card.formats.iter() {
                        span { class: "pill format-pill", "{format.icon()}" }
                    }
                }
                div { class: "content-actions",
                    button {
                        class: "icon-button",
                        "aria-label": "Save",
                        onclick: move |_| tap(),
                        "💾"
                    }
                    button {
                        class: "icon-button",
                        "aria-label": "Share",
                        onclick: move |_| tap_share(),
                        "↗️"
                    }
                    span { class: "rating", "{card.rating_label()}" }
                }
            }
        }
    }
}
