//! Animated Counter Component
//!
//! Number that climbs from zero to its target once it scrolls into view.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use infinitum_core::{
    drive_ramp, visible_ratio, CounterRamp, CounterTiming, CounterTrigger, TriggerAction,
};

/// How often a partly visible counter re-measures itself
const WATCH_INTERVAL: Duration = Duration::from_millis(100);

/// Properties for the AnimatedCounter component
#[derive(Clone, PartialEq, Props)]
pub struct AnimatedCounterProps {
    /// Value the counter settles on
    pub target: u32,
    /// Ramp length, cadence and visibility threshold
    #[props(default)]
    pub timing: CounterTiming,
    /// Rendered right after the number, e.g. "%"
    #[props(default)]
    pub suffix: &'static str,
}

/// Displays 0 until at least `timing.visibility_threshold()` of the element
/// is visible, then ramps to `target` over `timing.duration()`.
///
/// `onvisible` only reports when the element enters or leaves the viewport.
/// If it enters below the threshold, a watch task measures the element's
/// rect against the window height until it either crosses the threshold or
/// leaves again.
///
/// The ramp starts once per mount; scrolling away and back does not restart
/// it. Both tasks belong to this component's scope, so unmounting cancels
/// them.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AnimatedCounter { target: 89, suffix: "%" }
/// }
/// ```
#[component]
pub fn AnimatedCounter(props: AnimatedCounterProps) -> Element {
    let value = use_signal(|| 0u32);
    let mut trigger = use_signal(|| CounterTrigger::new(&props.timing));
    let mut watching = use_signal(|| false);
    let mut element = use_signal(|| None::<Rc<MountedData>>);

    let target = props.target;
    let timing = props.timing;

    let on_visible = move |evt: Event<VisibleData>| {
        let ratio = evt.data().get_intersection_ratio().unwrap_or(f64::NAN);
        let action = trigger.write().observe(ratio);

        match action {
            TriggerAction::Start => {
                spawn(count_up(target, timing, value));
            }
            TriggerAction::Watch if !watching() => {
                tracing::debug!(goal = target, ratio, "Counter partly visible, watching");
                watching.set(true);
                spawn(async move {
                    loop {
                        tokio::time::sleep(WATCH_INTERVAL).await;
                        let ratio = measure(element()).await;
                        let action = trigger.write().observe(ratio);
                        match action {
                            TriggerAction::Start => {
                                watching.set(false);
                                count_up(target, timing, value).await;
                                break;
                            }
                            TriggerAction::Watch => {}
                            TriggerAction::Ignore => {
                                watching.set(false);
                                break;
                            }
                        }
                    }
                });
            }
            TriggerAction::Watch | TriggerAction::Ignore => {}
        }
    };

    rsx! {
        span {
            class: "animated-counter",
            onmounted: move |evt: MountedEvent| element.set(Some(evt.data())),
            onvisible: on_visible,
            "{value}{props.suffix}"
        }
    }
}

async fn count_up(target: u32, timing: CounterTiming, mut value: Signal<u32>) {
    tracing::debug!(goal = target, "Counter became visible");
    let ramp = CounterRamp::new(target, &timing);
    drive_ramp(ramp, timing.tick(), move |v| value.set(v)).await;
}

/// Visible fraction of the element, or NaN when it cannot be measured.
async fn measure(element: Option<Rc<MountedData>>) -> f64 {
    let Some(element) = element else {
        return f64::NAN;
    };
    let Ok(rect) = element.get_client_rect().await else {
        return f64::NAN;
    };
    let viewport = dioxus::document::eval("return window.innerHeight;")
        .join::<f64>()
        .await
        .unwrap_or(f64::NAN);

    visible_ratio(rect.min_y(), rect.max_y(), viewport)
}
