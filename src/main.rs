#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use infinitum_core::ScreenConfig;
use tracing_subscriber::EnvFilter;

/// Global screen configuration, set from command line
static SCREEN_CONFIG: OnceLock<ScreenConfig> = OnceLock::new();

/// Get the screen configuration (set from command line or default)
pub fn get_screen_config() -> ScreenConfig {
    SCREEN_CONFIG.get().copied().unwrap_or_default()
}

/// Infinitum - Mystic profile screen
#[derive(Parser, Debug)]
#[command(name = "infinitum-desktop")]
#[command(about = "Infinitum - mystic mini-app profile screen")]
struct Args {
    /// How long a statistic counter takes to reach its target
    #[arg(long, default_value_t = 1000)]
    counter_duration_ms: u64,

    /// Counter timer cadence
    #[arg(long, default_value_t = 10)]
    counter_tick_ms: u64,

    /// Fraction of a counter that must be visible before it starts (0, 1]
    #[arg(long, default_value_t = 0.5)]
    visibility_threshold: f64,

    /// Initially active bottom tab (home, search, magic, content, profile)
    #[arg(short, long, default_value = "home")]
    tab: String,

    /// Number of background particles
    #[arg(long, default_value_t = infinitum_core::DEFAULT_PARTICLE_COUNT)]
    particles: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = ScreenConfig::from_parts(
        args.counter_duration_ms,
        args.counter_tick_ms,
        args.visibility_threshold,
        &args.tab,
        args.particles,
    )
    .context("invalid screen configuration")?;

    // Store configuration globally
    let _ = SCREEN_CONFIG.set(config);

    // Phone-shaped window
    let window_width = 430.0;
    let window_height = 900.0;

    tracing::info!(
        duration = ?config.timing.duration(),
        tick = ?config.timing.tick(),
        threshold = config.timing.visibility_threshold(),
        tab = %config.initial_tab,
        particles = config.particle_count,
        "Starting Infinitum profile screen"
    );

    // Configure desktop window
    let desktop_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Infinitum")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse_to_default_config() {
        let args = Args::parse_from(["infinitum-desktop"]);
        let config = ScreenConfig::from_parts(
            args.counter_duration_ms,
            args.counter_tick_ms,
            args.visibility_threshold,
            &args.tab,
            args.particles,
        )
        .unwrap();
        assert_eq!(config, ScreenConfig::default());
    }

    #[test]
    fn tab_flag_is_parsed() {
        let args = Args::parse_from(["infinitum-desktop", "--tab", "magic", "--particles", "0"]);
        assert_eq!(args.tab, "magic");
        assert_eq!(args.particles, 0);
    }
}
