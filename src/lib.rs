//! # Skirmish
//!
//! A single-screen, real-time top-down action game: the player walks a tile
//! grid, fights melee and ranged enemies, collects items and levels up until
//! every enemy is down or the player falls.
//!
//! ## Architecture Overview
//!
//! The crate separates the deterministic simulation core from the adapters
//! that talk to a window:
//!
//! - **Game State**: an explicit [`GameState`] session owning the [`World`] and
//!   the run state machine; one call to [`GameState::step`] advances one frame
//! - **Entities**: plain serializable records for the player, enemies, items
//!   and projectiles
//! - **Generation**: builds the starting arena from fixed templates
//! - **Input**: a per-frame [`InputSnapshot`] of semantic actions, plus a
//!   keyboard adapter producing it
//! - **Rendering**: a macroquad adapter that draws a read-only view of the
//!   world through the camera offset reported by each frame
//!
//! The simulation never touches the window, so everything under [`game`] can
//! be driven from tests frame by frame.

pub mod config;
pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod scenes;

// Core module re-exports
pub use config::*;
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use scenes::*;

/// Core error type for the Skirmish engine.
#[derive(thiserror::Error, Debug)]
pub enum SkirmishError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration values are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Grid or spawn layout breaks a world invariant
    #[error("Invalid world: {0}")]
    InvalidWorld(String),

    /// A simulation step was requested outside of a running game
    #[error("Game is not running (state: {0:?})")]
    NotRunning(RunState),
}

/// Result type used throughout the Skirmish codebase.
pub type SkirmishResult<T> = Result<T, SkirmishError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
