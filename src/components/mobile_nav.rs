//! Mobile Navigation Component
//!
//! Bottom navigation bar with a raised center "magic" action.

use dioxus::prelude::*;
use infinitum_core::{TabId, TabSelection, NAV_TABS};

use crate::context::use_light_tap;

#[derive(Props, Clone, PartialEq)]
pub struct MobileNavProps {
    /// Current tab selection
    pub selection: TabSelection,
    /// Callback when a tab is clicked
    pub on_select: EventHandler<TabId>,
}

/// Mobile bottom navigation bar
///
/// Shows: Дом | Поиск | ✨ | Контент | Я
/// Every tap selects the tab and requests light haptic feedback.
#[component]
pub fn MobileNav(props: MobileNavProps) -> Element {
    let tap = use_light_tap();
    let selection = props.selection;

    rsx! {
        nav { class: "mobile-nav",
            for tab in NAV_TABS {
                {
                    let tap = tap.clone();
                    let on_select = props.on_select;
                    let current = if selection.is_highlighted(tab.id) { "page" } else { "false" };
                    rsx! {
                        button {
                            key: "{tab.id}",
                            class: selection.button_class(tab.id),
                            "aria-label": "{tab.label}",
                            "aria-current": current,
                            onclick: move |_| {
                                on_select.call(tab.id);
                                tap();
                            },

                            span { class: selection.icon_class(tab.id), "{tab.icon}" }

                            if selection.shows_label(tab.id) {
                                span { class: selection.label_class(tab.id), "{tab.label}" }
                            }

                            if selection.shows_indicator(tab.id) {
                                div { class: "nav-indicator" }
                            }
                        }
                    }
                }
            }
        }
    }
}
