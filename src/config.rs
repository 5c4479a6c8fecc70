//! # Game Configuration
//!
//! Every tunable number the simulation uses lives in [`GameConfig`], so the
//! core never reaches for a global constant.

use crate::{SkirmishError, SkirmishResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for the arena, movement, combat and progression.
///
/// All distances are in world units (pixels at zoom 1). All cooldowns are in
/// frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edge length of one tile
    pub tile_size: f32,
    /// Grid width in tiles
    pub map_width: usize,
    /// Grid height in tiles
    pub map_height: usize,
    /// Distance the player covers per frame
    pub player_speed: f32,
    /// Distance an enemy covers per frame
    pub enemy_speed: f32,
    /// Reach of a melee swing beyond both radii
    pub attack_range: f32,
    /// Visual diameter of an item; half of it counts toward pickup distance
    pub item_size: f32,
    /// Frames between player swings
    pub player_attack_cooldown: u32,
    /// Frames between contact hits from a chasing enemy
    pub chase_attack_cooldown: u32,
    /// Frames between shots from a ranged enemy
    pub ranged_fire_cooldown: u32,
    /// Ranged enemies stop advancing inside this distance
    pub ranged_keep_away: f32,
    /// Ranged enemies fire when the player is closer than this
    pub ranged_fire_range: f32,
    /// Projectile distance per frame
    pub projectile_speed: f32,
    /// Projectile collision radius
    pub projectile_radius: f32,
    /// Damage dealt by a projectile hit
    pub projectile_damage: u32,
    /// Experience awarded per defeated enemy
    pub experience_per_kill: u32,
    /// Score awarded per defeated enemy
    pub score_per_kill: u32,
    /// Level n needs `level_threshold_factor * n` experience
    pub level_threshold_factor: u32,
    /// Max hp gained per level
    pub level_up_max_hp: u32,
    /// Attack gained per level
    pub level_up_attack: u32,
    /// Viewport width used for the camera
    pub viewport_width: f32,
    /// Viewport height used for the camera
    pub viewport_height: f32,
}

impl GameConfig {
    /// Creates the standard configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use skirmish::GameConfig;
    ///
    /// let config = GameConfig::new();
    /// assert_eq!(config.world_width(), 800.0);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new() -> Self {
        Self {
            tile_size: 40.0,
            map_width: 20,
            map_height: 12,
            player_speed: 3.0,
            enemy_speed: 1.5,
            attack_range: 36.0,
            item_size: 24.0,
            player_attack_cooldown: 20,
            chase_attack_cooldown: 30,
            ranged_fire_cooldown: 60,
            ranged_keep_away: 200.0,
            ranged_fire_range: 300.0,
            projectile_speed: 5.0,
            projectile_radius: 7.0,
            projectile_damage: 5,
            experience_per_kill: 5,
            score_per_kill: 10,
            level_threshold_factor: 10,
            level_up_max_hp: 5,
            level_up_attack: 2,
            viewport_width: 640.0,
            viewport_height: 400.0,
        }
    }

    /// Creates a configuration for tests: same rules, smaller viewport.
    pub fn for_testing() -> Self {
        Self {
            viewport_width: 320.0,
            viewport_height: 240.0,
            ..Self::new()
        }
    }

    /// Loads a JSON configuration file. Missing fields keep their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> SkirmishResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the numbers describe a playable arena.
    pub fn validate(&self) -> SkirmishResult<()> {
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(SkirmishError::InvalidConfig(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if self.map_width < 3 || self.map_height < 3 {
            return Err(SkirmishError::InvalidConfig(format!(
                "map must be at least 3x3 tiles, got {}x{}",
                self.map_width, self.map_height
            )));
        }
        let non_negative = [
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("attack_range", self.attack_range),
            ("item_size", self.item_size),
            ("ranged_keep_away", self.ranged_keep_away),
            ("ranged_fire_range", self.ranged_fire_range),
            ("projectile_speed", self.projectile_speed),
            ("projectile_radius", self.projectile_radius),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SkirmishError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return Err(SkirmishError::InvalidConfig(
                "viewport must have a positive size".to_string(),
            ));
        }
        if self.level_threshold_factor == 0 {
            return Err(SkirmishError::InvalidConfig(
                "level_threshold_factor must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Width of the whole world in world units.
    pub fn world_width(&self) -> f32 {
        self.map_width as f32 * self.tile_size
    }

    /// Height of the whole world in world units.
    pub fn world_height(&self) -> f32 {
        self.map_height as f32 * self.tile_size
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
