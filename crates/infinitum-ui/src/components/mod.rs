//! Reusable UI components
//!
//! Class names match the global stylesheet shipped by the desktop app.

mod animated_counter;
mod gradient_border_card;

pub use animated_counter::*;
pub use gradient_border_card::*;
