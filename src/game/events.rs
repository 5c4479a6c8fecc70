//! # Frame Events
//!
//! Everything notable that happens during one simulation step is reported as
//! a [`GameEvent`]. Nothing here is stored between frames; the caller decides
//! what to show or keep.

use crate::game::{EntityId, ItemKind, Position, RunState};
use serde::{Deserialize, Serialize};

/// How a run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// What hurt the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageSource {
    /// Contact hit from a chasing enemy
    Melee(EntityId),
    /// An enemy projectile
    Projectile,
}

/// Importance levels used to style messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageImportance {
    Normal,
    Important,
    Critical,
}

/// Something that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerMoved {
        from: Position,
        to: Position,
    },
    ItemPickedUp {
        item_id: EntityId,
        name: String,
        kind: ItemKind,
    },
    /// A swing that connected with at least one enemy
    PlayerAttacked {
        /// Attack power applied to each enemy in reach
        damage: u32,
        hits: usize,
        /// Hp actually removed across all hits
        total_damage: u32,
    },
    EnemyDefeated {
        enemy_id: EntityId,
        experience: u32,
        score: u32,
    },
    LevelUp {
        level: u32,
    },
    ProjectileFired {
        enemy_id: EntityId,
    },
    PlayerDamaged {
        damage: u32,
        source: DamageSource,
    },
    RunEnded {
        outcome: Outcome,
    },
}

impl GameEvent {
    /// Status line for this event, if it is worth showing.
    pub fn message(&self) -> Option<String> {
        match self {
            GameEvent::PlayerMoved { .. }
            | GameEvent::EnemyDefeated { .. }
            | GameEvent::ProjectileFired { .. } => None,
            GameEvent::ItemPickedUp { name, .. } => Some(format!("Picked up: {}!", name)),
            GameEvent::PlayerAttacked { damage, .. } => {
                Some(format!("Attack! {} damage!", damage))
            }
            GameEvent::LevelUp { level } => Some(format!("Level up! LV.{}", level)),
            GameEvent::PlayerDamaged {
                damage,
                source: DamageSource::Melee(_),
            } => Some(format!("Enemy attack! HP -{}", damage)),
            GameEvent::PlayerDamaged {
                damage,
                source: DamageSource::Projectile,
            } => Some(format!("Ranged attack! HP -{}", damage)),
            GameEvent::RunEnded {
                outcome: Outcome::Victory,
            } => Some("Victory!".to_string()),
            GameEvent::RunEnded {
                outcome: Outcome::Defeat,
            } => Some("Game Over!".to_string()),
        }
    }

    /// How prominently the message should be shown.
    pub fn importance(&self) -> MessageImportance {
        match self {
            GameEvent::RunEnded { .. } => MessageImportance::Critical,
            GameEvent::LevelUp { .. } | GameEvent::PlayerDamaged { .. } => {
                MessageImportance::Important
            }
            _ => MessageImportance::Normal,
        }
    }
}

/// Result of one simulation step, handed to the render adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    /// Frame number of this step, starting at 1 after a reset
    pub frame: u64,
    /// Events in the order they happened
    pub events: Vec<GameEvent>,
    /// Text of the latest event with a message, or empty
    pub message: String,
    /// Top-left corner of the viewport in world units
    pub camera: Position,
    /// Run state after the step
    pub run_state: RunState,
}

impl FrameOutput {
    /// Builds the output, deriving the status message from the events.
    pub fn new(frame: u64, events: Vec<GameEvent>, camera: Position, run_state: RunState) -> Self {
        let message = latest_message(&events).unwrap_or_default();
        Self {
            frame,
            events,
            message,
            camera,
            run_state,
        }
    }

    /// Importance of the event behind `message`.
    pub fn message_importance(&self) -> MessageImportance {
        self.events
            .iter()
            .rev()
            .find(|event| event.message().is_some())
            .map(GameEvent::importance)
            .unwrap_or(MessageImportance::Normal)
    }
}

/// Message of the last event that has one.
pub fn latest_message(events: &[GameEvent]) -> Option<String> {
    events.iter().rev().find_map(GameEvent::message)
}
