//! # Keyboard Adapter
//!
//! Maps macroquad key state onto [`InputSnapshot`]s and scene commands.

use crate::input::{InputAction, InputSnapshot};
use macroquad::prelude::*;

/// Scene-level commands that never reach the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Start a new run (from the title or ending screen)
    Start,
    /// Quit the game
    Quit,
    /// Show help information
    Help,
}

/// Input handler for processing player keys.
///
/// Movement and attack are sampled as held keys every frame; scene commands
/// fire once per key press.
pub struct InputHandler {
    /// Whether WASD also moves, alongside the arrow keys
    pub wasd_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self { wasd_enabled: true }
    }

    /// Samples the keys currently held into a snapshot for this frame.
    pub fn sample(&self) -> InputSnapshot {
        let bindings = [
            (KeyCode::Left, KeyCode::A, InputAction::MoveLeft),
            (KeyCode::Right, KeyCode::D, InputAction::MoveRight),
            (KeyCode::Up, KeyCode::W, InputAction::MoveUp),
            (KeyCode::Down, KeyCode::S, InputAction::MoveDown),
        ];

        let mut held = Vec::new();
        for (arrow, letter, action) in bindings {
            if is_key_down(arrow) || (self.wasd_enabled && is_key_down(letter)) {
                held.push(action);
            }
        }
        if is_key_down(KeyCode::Space) {
            held.push(InputAction::Attack);
        }

        InputSnapshot::from_actions(held)
    }

    /// Returns the scene command pressed this frame, if any.
    pub fn get_command(&self) -> Option<PlayerInput> {
        if is_key_pressed(KeyCode::Escape) {
            return Some(PlayerInput::Quit);
        }
        if is_key_pressed(KeyCode::Enter) {
            return Some(PlayerInput::Start);
        }
        if is_key_pressed(KeyCode::F1) {
            return Some(PlayerInput::Help);
        }
        None
    }
}
