//! Theme for the Infinitum profile screen.

mod styles;

pub use styles::GLOBAL_STYLES;
