//! Astrology widgets: today's forecast and the month calendar.
//!
//! The calendar grid is Monday-first. It opens with one blank cell per
//! weekday before the 1st, then one cell per day of the month.

use chrono::{Datelike, NaiveDate};

use crate::error::{ProfileError, ProfileResult};

pub const WEEKDAY_HEADERS: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// Summary shown in the "Сегодня" card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayForecast {
    pub moon_line: &'static str,
    pub phase_percent: u32,
    pub lunar_day: u32,
    pub favorable: &'static [&'static str],
    pub unfavorable: &'static [&'static str],
}

impl TodayForecast {
    pub fn phase_line(&self) -> String {
        format!(
            "Фаза: {}% • {} лунный день",
            self.phase_percent, self.lunar_day
        )
    }

    pub fn favorable_line(&self) -> String {
        join_marked("✅", self.favorable)
    }

    pub fn unfavorable_line(&self) -> String {
        join_marked("⛔", self.unfavorable)
    }
}

fn join_marked(mark: &str, items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("{mark} {item}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn today_forecast() -> TodayForecast {
    TodayForecast {
        moon_line: "🌖 Убывающая Луна в ♌ Льве",
        phase_percent: 67,
        lunar_day: 18,
        favorable: &["Творчество", "Общение"],
        unfavorable: &["Важные решения"],
    }
}

/// Highlight attached to a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMark {
    FullMoon,
    Event,
}

impl DayMark {
    pub fn icon(self) -> &'static str {
        match self {
            DayMark::FullMoon => "🌕",
            DayMark::Event => "⚡",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            DayMark::FullMoon => "full-moon",
            DayMark::Event => "event",
        }
    }
}

/// Marked days known to the calendar.
const MARKS: [(i32, u32, u32, DayMark); 2] = [
    (2024, 1, 11, DayMark::FullMoon),
    (2024, 1, 19, DayMark::Event),
];

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day { day: u32, mark: Option<DayMark> },
}

impl CalendarCell {
    pub fn class(&self) -> String {
        match self {
            CalendarCell::Blank => "calendar-cell blank".to_string(),
            CalendarCell::Day { mark: None, .. } => "calendar-cell day".to_string(),
            CalendarCell::Day { mark: Some(mark), .. } => {
                format!("calendar-cell day {}", mark.class())
            }
        }
    }
}

/// A month shown by the calendar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> ProfileResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or(ProfileError::InvalidMonth { year, month })
    }

    /// January 2024, the month the widget opens on.
    pub fn initial() -> Self {
        Self::new(2024, 1).unwrap_or(Self {
            first: NaiveDate::default(),
        })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// `Январь 2024`
    pub fn title(&self) -> String {
        let name = MONTH_NAMES[self.first.month0() as usize];
        format!("{} {}", name, self.first.year())
    }

    pub fn days_in_month(&self) -> u32 {
        match self.next_month() {
            Ok(next) => next.first.signed_duration_since(self.first).num_days() as u32,
            // Only the last representable month has no successor
            Err(_) => 31,
        }
    }

    /// Blank cells before the 1st in a Monday-first grid.
    pub fn leading_blanks(&self) -> u32 {
        self.first.weekday().num_days_from_monday()
    }

    pub fn mark(&self, day: u32) -> Option<DayMark> {
        MARKS
            .iter()
            .find(|(y, m, d, _)| *y == self.year() && *m == self.month() && *d == day)
            .map(|(_, _, _, mark)| *mark)
    }

    pub fn cells(&self) -> Vec<CalendarCell> {
        let blanks = (0..self.leading_blanks()).map(|_| CalendarCell::Blank);
        let days = (1..=self.days_in_month()).map(|day| CalendarCell::Day {
            day,
            mark: self.mark(day),
        });
        blanks.chain(days).collect()
    }

    pub fn previous_month(&self) -> ProfileResult<Self> {
        if self.month() == 1 {
            Self::new(self.year() - 1, 12)
        } else {
            Self::new(self.year(), self.month() - 1)
        }
    }

    pub fn next_month(&self) -> ProfileResult<Self> {
        if self.month() == 12 {
            Self::new(self.year() + 1, 1)
        } else {
            Self::new(self.year(), self.month() + 1)
        }
    }
}

impl Default for CalendarMonth {
    fn default() -> Self {
        Self::initial()
    }
}
