//! Screen model tests
//!
//! Checks the fixtures against what the profile screen renders, and the
//! counters against the tokio timer.

use std::time::Duration;

use infinitum_core::{
    achievements, drive_ramp, profile_summary, recommended_content, today_forecast,
    CalendarCell, CalendarMonth, CounterRamp, CounterTiming, HapticFeedback, HapticSink, Rarity,
    RecordingHaptics, ScreenConfig, WEEKDAY_HEADERS,
};

// ============================================================================
// Counters
// ============================================================================

/// All three statistic counters land on their targets after one second
#[tokio::test(start_paused = true)]
async fn test_all_counters_finish_together() {
    let timing = CounterTiming::default();
    let summary = profile_summary();

    let drivers = summary.stats.map(|stat| {
        let ramp = CounterRamp::new(stat.target, &timing);
        tokio::spawn(drive_ramp(ramp, timing.tick(), |_| {}))
    });

    let start = tokio::time::Instant::now();
    let mut finals = Vec::new();
    for driver in drivers {
        finals.push(driver.await.unwrap());
    }

    assert_eq!(finals, vec![127, 45, 89]);
    assert!(start.elapsed() >= timing.duration());
}

/// Aborting the spawned timer freezes the displayed value below the target
#[tokio::test(start_paused = true)]
async fn test_abort_stops_counter() {
    let timing = CounterTiming::default();
    let (tx, mut rx) = tokio::sync::watch::channel(0u32);

    let handle = tokio::spawn(drive_ramp(
        CounterRamp::new(127, &timing),
        timing.tick(),
        move |v| {
            let _ = tx.send(v);
        },
    ));

    tokio::time::sleep(Duration::from_millis(505)).await;
    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());

    let frozen = *rx.borrow_and_update();
    assert!(frozen > 0);
    assert!(frozen < 127);
}

/// Visibility below the threshold does not count
#[test]
fn test_visibility_threshold() {
    let timing = CounterTiming::default();
    assert!(!timing.is_visible(0.49));
    assert!(timing.is_visible(0.5));
    assert!(timing.is_visible(1.0));
}

// ============================================================================
// Fixtures
// ============================================================================

#[test]
fn test_content_grid_has_four_cards() {
    let cards = recommended_content();
    assert_eq!(cards.len(), 4);
    assert!(cards.iter().all(|c| c.formats.len() == 2));
    assert_eq!(cards[3].preview_label, "Превью 4");
}

#[test]
fn test_achievement_grid() {
    let list = achievements();
    assert_eq!(list.len(), 5);

    let locked: Vec<&str> = list.iter().filter(|a| a.shows_lock()).map(|a| a.name).collect();
    assert_eq!(locked, vec!["Мудрец", "Космический Герой"]);

    let legendary = list.iter().filter(|a| a.rarity == Rarity::Legendary).count();
    assert_eq!(legendary, 2);
}

#[test]
fn test_today_forecast() {
    let today = today_forecast();
    assert_eq!(today.lunar_day, 18);
    assert_eq!(today.favorable.len(), 2);
}

#[test]
fn test_calendar_has_one_cell_per_day() {
    let month = CalendarMonth::initial();
    let cells = month.cells();
    let days = cells
        .iter()
        .filter(|c| matches!(c, CalendarCell::Day { .. }))
        .count();
    assert_eq!(days, 31);
    assert_eq!(WEEKDAY_HEADERS.len(), 7);
}

#[test]
fn test_calendar_walk_through_a_year() {
    let mut month = CalendarMonth::initial();
    let mut total_days = 0;
    for _ in 0..12 {
        total_days += month.days_in_month();
        month = month.next_month().unwrap();
    }
    // 2024 is a leap year
    assert_eq!(total_days, 366);
    assert_eq!((month.year(), month.month()), (2025, 1));
}

// ============================================================================
// Haptics and configuration
// ============================================================================

#[test]
fn test_every_interaction_is_light() {
    let sink = RecordingHaptics::new();
    for _ in 0..3 {
        sink.emit(HapticFeedback::Light);
    }
    assert_eq!(sink.len(), 3);
    assert!(sink.events().iter().all(|f| *f == HapticFeedback::Light));
}

#[test]
fn test_config_rejects_every_bad_field() {
    assert!(ScreenConfig::from_parts(1000, 10, 0.5, "home", 50).is_ok());
    assert!(ScreenConfig::from_parts(1000, 2000, 0.5, "home", 50).is_err());
    assert!(ScreenConfig::from_parts(1000, 10, -0.1, "home", 50).is_err());
    assert!(ScreenConfig::from_parts(1000, 10, 0.5, "Home", 50).is_err());
}
