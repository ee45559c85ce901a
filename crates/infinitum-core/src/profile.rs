//! Profile header and statistic counters.

/// A statistic card: animated number plus caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCounter {
    pub target: u32,
    pub label: &'static str,
    /// Appended after the number, e.g. `%`
    pub suffix: &'static str,
}

/// Who the profile belongs to and what the counters show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub display_name: &'static str,
    pub level: u32,
    pub title: &'static str,
    pub stats: [StatCounter; 3],
}

impl ProfileSummary {
    /// Line under the name: `⭐ Уровень 12 • Мистик`
    pub fn rank_line(&self) -> String {
        format!("⭐ Уровень {} • {}", self.level, self.title)
    }
}

pub fn profile_summary() -> ProfileSummary {
    ProfileSummary {
        display_name: "Имя Пользователя",
        level: 12,
        title: "Мистик",
        stats: [
            StatCounter {
                target: 127,
                label: "Контент",
                suffix: "",
            },
            StatCounter {
                target: 45,
                label: "Регалии",
                suffix: "",
            },
            StatCounter {
                target: 89,
                label: "Прогресс",
                suffix: "%",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_line_joins_level_and_title() {
        assert_eq!(profile_summary().rank_line(), "⭐ Уровень 12 • Мистик");
    }

    #[test]
    fn only_progress_has_suffix() {
        let stats = profile_summary().stats;
        assert_eq!(stats.map(|s| s.target), [127, 45, 89]);
        assert_eq!(stats[2].suffix, "%");
        assert!(stats[..2].iter().all(|s| s.suffix.is_empty()));
    }
}
