//! # Input Module
//!
//! Device-independent input for the simulation, and the keyboard adapter that
//! produces it.
//!
//! The simulation only ever sees an [`InputSnapshot`]: the set of semantic
//! actions held at the start of a frame.

pub mod keyboard;

pub use keyboard::*;

use crate::game::Position;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A semantic action the player can hold during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Attack,
}

/// Immutable set of actions held at the start of a frame.
///
/// # Examples
///
/// ```
/// use skirmish::{InputAction, InputSnapshot};
///
/// let input = InputSnapshot::from_actions([InputAction::MoveRight, InputAction::Attack]);
/// assert!(input.attack());
/// assert_eq!(input.movement().unwrap().x, 1.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    held: HashSet<InputAction>,
}

impl InputSnapshot {
    /// Creates a snapshot with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snapshot holding exactly `actions`.
    pub fn from_actions(actions: impl IntoIterator<Item = InputAction>) -> Self {
        Self {
            held: actions.into_iter().collect(),
        }
    }

    /// Returns true if `action` is held.
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    /// Returns true if the attack action is held.
    pub fn attack(&self) -> bool {
        self.is_held(InputAction::Attack)
    }

    /// Returns true if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Unit movement vector from the held directions, or `None` when idle.
    ///
    /// Right overrides left and down overrides up when both are held.
    pub fn movement(&self) -> Option<Position> {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.is_held(InputAction::MoveLeft) {
            dx = -1.0;
        }
        if self.is_held(InputAction::MoveRight) {
            dx = 1.0;
        }
        if self.is_held(InputAction::MoveUp) {
            dy = -1.0;
        }
        if self.is_held(InputAction::MoveDown) {
            dy = 1.0;
        }
        Position::new(dx, dy).normalized()
    }
}
