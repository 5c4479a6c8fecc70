//! # Rendering Module
//!
//! macroquad drawing for the world view, HUD and overlays.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;
