//! "Созвездие достижений" grid.

use chrono::NaiveDate;

/// Number of star slots under every achievement.
pub const STAR_SLOTS: usize = 5;

/// Rarity tier of an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rarity {
    Legendary,
    Epic,
    Rare,
    Common,
}

impl Rarity {
    /// Filled stars out of [`STAR_SLOTS`].
    pub fn star_count(self) -> usize {
        match self {
            Rarity::Legendary => 5,
            Rarity::Epic => 4,
            Rarity::Rare => 3,
            Rarity::Common => 2,
        }
    }

    /// Accent applied to the achievement icon.
    pub fn icon_class(self) -> &'static str {
        match self {
            Rarity::Legendary => "achievement-icon rarity-legendary",
            Rarity::Epic => "achievement-icon rarity-epic",
            Rarity::Rare => "achievement-icon rarity-rare",
            Rarity::Common => "achievement-icon rarity-common",
        }
    }

    /// Filled/empty flag per star slot, left to right.
    pub fn stars(self) -> [bool; STAR_SLOTS] {
        let filled = self.star_count();
        std::array::from_fn(|i| i < filled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub name: &'static str,
    pub rarity: Rarity,
    pub icon: &'static str,
    pub unlocked: bool,
    /// Set only for unlocked achievements.
    pub earned_on: Option<NaiveDate>,
}

impl Achievement {
    /// Locked tiles get a lock overlay and no earned date.
    pub fn shows_lock(&self) -> bool {
        !self.unlocked
    }

    pub fn tile_class(&self) -> &'static str {
        if self.unlocked {
            "achievement-tile unlocked"
        } else {
            "achievement-tile locked"
        }
    }

    /// `Получено: 15.01.24`, or `None` while locked.
    pub fn earned_label(&self) -> Option<String> {
        if !self.unlocked {
            return None;
        }
        self.earned_on
            .map(|date| format!("Получено: {}", date.format("%d.%m.%y")))
    }
}

fn entry(name: &'static str, rarity: Rarity, icon: &'static str, unlocked: bool) -> Achievement {
    Achievement {
        name,
        rarity,
        icon,
        unlocked,
        earned_on: if unlocked {
            NaiveDate::from_ymd_opt(2024, 1, 15)
        } else {
            None
        },
    }
}

pub fn achievements() -> Vec<Achievement> {
    vec![
        entry("Первооткрыватель", Rarity::Legendary, "🏆", true),
        entry("Мастер Астрологии", Rarity::Epic, "✨", true),
        entry("Мудрец", Rarity::Rare, "📚", false),
        entry("Звездный Путник", Rarity::Common, "💫", true),
        entry("Космический Герой", Rarity::Legendary, "🌟", false),
    ]
}
