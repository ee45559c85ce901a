//! UI Components for the Infinitum profile screen.
//!
//! One component per screen section, top to bottom.

mod achievement_grid;
mod astrology_widgets;
mod content_grid;
mod cosmic_background;
mod mobile_nav;
mod profile_hero;
mod stats_grid;

pub use achievement_grid::AchievementGrid;
pub use astrology_widgets::AstrologySection;
pub use content_grid::ContentGrid;
pub use cosmic_background::CosmicBackground;
pub use mobile_nav::MobileNav;
pub use profile_hero::ProfileHero;
pub use stats_grid::StatsGrid;
