//! # Entity Records
//!
//! Plain data for everything that lives on the grid. Behaviour lives in the
//! combat, AI and state modules; the only logic here is small helpers on the
//! records themselves.

use crate::game::{new_entity_id, EntityId, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collision radius of the player.
pub const PLAYER_RADIUS: f32 = 18.0;
/// Player hp at the start of a run.
pub const PLAYER_START_HP: u32 = 30;
/// Player attack at the start of a run.
pub const PLAYER_START_ATTACK: u32 = 5;
/// Collision radius shared by every enemy.
pub const ENEMY_RADIUS: f32 = 18.0;

/// Health and attack shared by the player and enemies.
///
/// Hp is unsigned and only ever reduced through [`CombatStats::take_damage`],
/// so it bottoms out at zero instead of going negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
}

impl CombatStats {
    /// Creates full-health stats.
    pub fn new(max_hp: u32, attack: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            attack,
        }
    }

    /// Returns true while hp is above zero.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Subtracts `damage`, clamping at zero. Returns the hp actually lost.
    ///
    /// # Examples
    ///
    /// ```
    /// use skirmish::CombatStats;
    ///
    /// let mut stats = CombatStats::new(10, 2);
    /// assert_eq!(stats.take_damage(4), 4);
    /// assert_eq!(stats.take_damage(50), 6);
    /// assert_eq!(stats.hp, 0);
    /// assert!(!stats.is_alive());
    /// ```
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        let lost = damage.min(self.hp);
        self.hp -= lost;
        lost
    }
}

/// The single player-controlled character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    pub radius: f32,
    pub stats: CombatStats,
    pub experience: u32,
    pub level: u32,
    /// Collected items in pickup order
    pub inventory: Vec<Item>,
    /// Facing angle in radians; only changes while moving
    pub facing: f32,
    /// Frames until the next swing is allowed
    pub attack_cooldown: u32,
    pub score: u32,
}

impl Player {
    /// Creates a level-1 player with starting stats at `position`.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            radius: PLAYER_RADIUS,
            stats: CombatStats::new(PLAYER_START_HP, PLAYER_START_ATTACK),
            experience: 0,
            level: 1,
            inventory: Vec::new(),
            facing: 0.0,
            attack_cooldown: 0,
            score: 0,
        }
    }

    /// Returns true while hp is above zero.
    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    /// Names of collected items in pickup order.
    pub fn inventory_names(&self) -> Vec<&str> {
        self.inventory.iter().map(|item| item.name.as_str()).collect()
    }
}

/// Behaviour policy an enemy follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiBehavior {
    /// Walk straight at the player and hit on contact
    Chase,
    /// Close to a keep-away distance and shoot projectiles
    Ranged,
}

impl fmt::Display for AiBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiBehavior::Chase => write!(f, "chaser"),
            AiBehavior::Ranged => write!(f, "archer"),
        }
    }
}

/// A hostile mover. Removed from the world once its hp reaches zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub position: Position,
    pub radius: f32,
    pub stats: CombatStats,
    pub behavior: AiBehavior,
    /// Frames until the next hit or shot
    pub cooldown: u32,
}

impl Enemy {
    /// Creates a full-health enemy with a fresh id.
    pub fn new(position: Position, behavior: AiBehavior, max_hp: u32, attack: u32) -> Self {
        Self {
            id: new_entity_id(),
            position,
            radius: ENEMY_RADIUS,
            stats: CombatStats::new(max_hp, attack),
            behavior,
            cooldown: 0,
        }
    }

    /// Shorthand for a [`AiBehavior::Chase`] enemy.
    pub fn chaser(position: Position, max_hp: u32, attack: u32) -> Self {
        Self::new(position, AiBehavior::Chase, max_hp, attack)
    }

    /// Shorthand for a [`AiBehavior::Ranged`] enemy.
    pub fn ranged(position: Position, max_hp: u32, attack: u32) -> Self {
        Self::new(position, AiBehavior::Ranged, max_hp, attack)
    }

    /// Returns true while hp is above zero.
    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }
}

/// Category of an item, derived from its effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Heal,
    AttackBoost,
}

/// One-shot effect applied to the player on pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    /// Restore hp, never above max hp
    Heal(u32),
    /// Permanently raise attack
    AttackBoost(u32),
}

impl ItemEffect {
    /// Returns the stats after this effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use skirmish::{CombatStats, ItemEffect};
    ///
    /// let stats = CombatStats { hp: 25, max_hp: 30, attack: 5 };
    /// assert_eq!(ItemEffect::Heal(10).apply(stats).hp, 30);
    /// assert_eq!(ItemEffect::AttackBoost(3).apply(stats).attack, 8);
    /// ```
    pub fn apply(self, stats: CombatStats) -> CombatStats {
        match self {
            ItemEffect::Heal(amount) => CombatStats {
                hp: stats.hp.saturating_add(amount).min(stats.max_hp),
                ..stats
            },
            ItemEffect::AttackBoost(amount) => CombatStats {
                attack: stats.attack.saturating_add(amount),
                ..stats
            },
        }
    }

    /// Kind of item carrying this effect.
    pub fn kind(self) -> ItemKind {
        match self {
            ItemEffect::Heal(_) => ItemKind::Heal,
            ItemEffect::AttackBoost(_) => ItemKind::AttackBoost,
        }
    }
}

/// A collectible lying on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: EntityId,
    pub position: Position,
    pub name: String,
    pub effect: ItemEffect,
}

impl Item {
    /// Creates an item with a fresh id.
    pub fn new(position: Position, name: impl Into<String>, effect: ItemEffect) -> Self {
        Self {
            id: new_entity_id(),
            position,
            name: name.into(),
            effect,
        }
    }

    /// Kind of this item.
    pub fn kind(&self) -> ItemKind {
        self.effect.kind()
    }
}

/// Side that fired a projectile. Only enemies shoot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Enemy,
}

/// A shot in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Position,
    /// Displacement per frame
    pub velocity: Position,
    pub owner: Faction,
    pub damage: u32,
}

impl Projectile {
    /// Creates an enemy-owned projectile.
    pub fn enemy_shot(position: Position, velocity: Position, damage: u32) -> Self {
        Self {
            position,
            velocity,
            owner: Faction::Enemy,
            damage,
        }
    }
}
