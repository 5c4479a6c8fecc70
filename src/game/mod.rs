//! # Game Module
//!
//! The real-time simulation core: world grid, entity records, combat,
//! enemy AI and the per-frame step.
//!
//! This module contains the fundamental building blocks of Skirmish:
//! - Grid collision and the world container
//! - Entity records for the player, enemies, items and projectiles
//! - Combat and progression rules
//! - Enemy behaviour policies
//! - The session object that runs one frame at a time

pub mod ai;
pub mod camera;
pub mod combat;
pub mod entities;
pub mod events;
pub mod state;
pub mod world;

pub use ai::*;
pub use camera::*;
pub use combat::*;
pub use entities::*;
pub use events::*;
pub use state::*;
pub use world::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A point (or displacement) in continuous world space.
///
/// # Examples
///
/// ```
/// use skirmish::Position;
///
/// let a = Position::new(0.0, 0.0);
/// let b = Position::new(3.0, 4.0);
/// assert_eq!(a.distance(b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Position at the given tile coordinates scaled by `tile_size`.
    pub fn from_tiles(tile_x: f32, tile_y: f32, tile_size: f32) -> Self {
        Self::new(tile_x * tile_size, tile_y * tile_size)
    }

    /// Length of this vector.
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another position.
    pub fn distance(self, other: Position) -> f32 {
        (self - other).length()
    }

    /// Unit vector in the same direction, or `None` for a zero vector.
    pub fn normalized(self) -> Option<Position> {
        let len = self.length();
        if len > f32::EPSILON {
            Some(Self::new(self.x / len, self.y / len))
        } else {
            None
        }
    }

    /// Angle of this vector in radians, measured from +x toward +y.
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Scales both components.
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::AddAssign for Position {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

/// Unique identifier for game entities.
pub type EntityId = Uuid;

/// Creates a new unique entity ID.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4()
}
