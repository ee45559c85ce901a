//! Gradient Border Card
//!
//! Dark panel inside a 1px purple-to-fuchsia gradient frame.

use dioxus::prelude::*;

/// Classes of the outer gradient frame.
pub fn frame_classes(hover_effect: bool) -> &'static str {
    if hover_effect {
        "gradient-frame lift-on-hover"
    } else {
        "gradient-frame"
    }
}

/// Classes of the inner panel, with caller extras appended.
pub fn panel_classes(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        "gradient-panel".to_string()
    } else {
        format!("gradient-panel {extra}")
    }
}

/// Gradient-framed container used by the content cards and astrology widgets
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GradientBorderCard { class: "widget",
///         h3 { "Сегодня" }
///     }
/// }
/// ```
#[component]
pub fn GradientBorderCard(
    /// Extra classes for the inner panel
    #[props(into, default)]
    class: String,
    /// Lift and glow on hover
    #[props(default = true)]
    hover_effect: bool,
    children: Element,
) -> Element {
    rsx! {
        div { class: frame_classes(hover_effect),
            div { class: panel_classes(&class),
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_adds_lift() {
        assert_eq!(frame_classes(true), "gradient-frame lift-on-hover");
        assert_eq!(frame_classes(false), "gradient-frame");
    }

    #[test]
    fn panel_appends_extras() {
        assert_eq!(panel_classes(""), "gradient-panel");
        assert_eq!(panel_classes("  "), "gradient-panel");
        assert_eq!(panel_classes("content-card"), "gradient-panel content-card");
    }
}
