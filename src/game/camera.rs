//! # Camera
//!
//! Viewport placement for the render adapter.

use crate::game::Position;

/// Top-left corner of a viewport centred on `focus`, kept inside the world.
///
/// Per axis this is `clamp(focus - viewport / 2, 0, world - viewport)`; when
/// the world is smaller than the viewport the offset is 0.
///
/// # Examples
///
/// ```
/// use skirmish::{camera_offset, Position};
///
/// let offset = camera_offset(Position::new(400.0, 100.0), (200.0, 100.0), (800.0, 480.0));
/// assert_eq!(offset, Position::new(300.0, 50.0));
/// ```
pub fn camera_offset(focus: Position, viewport: (f32, f32), world: (f32, f32)) -> Position {
    Position::new(
        clamp_axis(focus.x, viewport.0, world.0),
        clamp_axis(focus.y, viewport.1, world.1),
    )
}

fn clamp_axis(focus: f32, viewport: f32, world: f32) -> f32 {
    (focus - viewport / 2.0).min(world - viewport).max(0.0)
}
