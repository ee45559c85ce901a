//! Infinitum UI Components
//!
//! This crate provides the reusable Dioxus components of the Infinitum
//! profile screen, styled for the cosmic-purple theme.
//!
//! ## Design Philosophy
//!
//! - **Purple (#a855f7)** to **fuchsia (#d946ef)**: frames, highlights, active state
//! - **Night (#030712)**: background darkness
//! - **Gold (#fde047)**: ratings, legendary accents
//!
//! Components only carry behavior that is reused across sections: the
//! visibility-triggered [`AnimatedCounter`] and the [`GradientBorderCard`]
//! frame.

pub mod components;

pub use components::*;
