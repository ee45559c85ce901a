//! Astrology Widgets - today's forecast and the month calendar.

use dioxus::prelude::*;
use infinitum_core::{CalendarCell, CalendarMonth, TodayForecast, WEEKDAY_HEADERS};
use infinitum_ui::GradientBorderCard;

use crate::context::use_light_tap;

#[component]
pub fn AstrologySection(forecast: TodayForecast) -> Element {
    rsx! {
        h2 { class: "section-title", "Астрологический прогноз" }
        div { class: "astrology-grid",
            TodayWidget { forecast: forecast }
            CalendarWidget {}
        }
    }
}

/// "Сегодня" card
#[component]
fn TodayWidget(forecast: TodayForecast) -> Element {
    rsx! {
        GradientBorderCard { class: "widget",
            h3 { class: "widget-title", "Сегодня" }
            p { class: "moon-line", "{forecast.moon_line}" }
            p { class: "phase-line", "{forecast.phase_line()}" }
            div { class: "forecast-block",
                p { class: "forecast-heading", "Благоприятно:" }
                p { class: "forecast-good", "{forecast.favorable_line()}" }
            }
            div { class: "forecast-block",
                p { class: "forecast-heading", "Не рекомендуется:" }
                p { class: "forecast-bad", "{forecast.unfavorable_line()}" }
            }
        }
    }
}

/// Month calendar with marked full moon and event days
#[component]
fn CalendarWidget() -> Element {
    let mut month = use_signal(CalendarMonth::initial);
    let tap = use_light_tap();

    let step = {
        let tap = tap.clone();
        move |forward: bool| {
            tap();
            let current = month();
            let moved = if forward {
                current.next_month()
            } else {
                current.previous_month()
            };
            match moved {
                Ok(m) => month.set(m),
                Err(e) => tracing::warn!("Calendar cannot move: {}", e),
            }
        }
    };
    let mut step_back = step.clone();
    let mut step_forward = step;

    let shown = month();

    rsx! {
        GradientBorderCard { class: "widget",
            div { class: "calendar-header",
                button {
                    class: "calendar-arrow",
                    "aria-label": "Previous month",
                    onclick: move |_| step_back(false),
                    "←"
                }
                h3 { class: "widget-title", "{shown.title()}" }
                button {
                    class: "calendar-arrow",
                    "aria-label": "Next month",
                    onclick: move |_| step_forward(true),
                    "→"
                }
            }

            div { class: "calendar-weekdays",
                for day in WEEKDAY_HEADERS {
                    span { key: "{day}", "{day}" }
                }
            }

            div { class: "calendar-days",
                for (i, cell) in shown.cells().into_iter().enumerate() {
                    {
                        let tap = tap.clone();
                        match cell {
                            CalendarCell::Blank => rsx! {
                                div { key: "{i}", class: cell.class() }
                            },
                            CalendarCell::Day { day, mark } => rsx! {
                                div {
                                    key: "{i}",
                                    class: cell.class(),
                                    onclick: move |_| tap(),
                                    "{day}"
                                    if let Some(mark) = mark {
                                        span { class: "day-mark", "{mark.icon()}" }
                                    }
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
