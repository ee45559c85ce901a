//! Recommended content cards.

/// Media a piece of content is available as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Audio,
    Document,
}

impl ContentFormat {
    pub fn icon(self) -> &'static str {
        match self {
            ContentFormat::Audio => "🎧",
            ContentFormat::Document => "📄",
        }
    }
}

/// A recommended content card.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentCard {
    /// 1-based grid position, unique per card
    pub index: u32,
    pub title: String,
    pub preview_label: String,
    pub description: &'static str,
    pub tag: &'static str,
    pub duration_minutes: u32,
    /// 0..=100
    pub relevance_percent: u32,
    pub rating: f32,
    pub author: &'static str,
    pub formats: &'static [ContentFormat],
}

impl ContentCard {
    pub fn duration_label(&self) -> String {
        format!("⏱️ {} мин", self.duration_minutes)
    }

    pub fn tag_label(&self) -> String {
        format!("🏷️ {}", self.tag)
    }

    pub fn relevance_label(&self) -> String {
        format!("{}% релевантность", self.relevance_percent)
    }

    /// Inline width of the relevance bar fill.
    pub fn relevance_style(&self) -> String {
        format!("width: {}%;", self.relevance_percent.min(100))
    }

    pub fn rating_label(&self) -> String {
        format!("⭐ {:.1}", self.rating)
    }
}

const DESCRIPTION: &str =
    "Краткое описание в две строки для предпросмотра, чтобы пользователь мог быстро понять суть.";

const FORMATS: &[ContentFormat] = &[ContentFormat::Audio, ContentFormat::Document];

/// The four cards of the "Рекомендуемый контент" grid.
pub fn recommended_content() -> Vec<ContentCard> {
    (1..=4)
        .map(|i| ContentCard {
            index: i,
            title: format!("Заголовок контента {i}"),
            preview_label: format!("Превью {i}"),
            description: DESCRIPTION,
            tag: "Астрология",
            duration_minutes: 15,
            relevance_percent: 90 - i * 5,
            rating: 4.8,
            author: "Эксперт",
            formats: FORMATS,
        })
        .collect()
}
