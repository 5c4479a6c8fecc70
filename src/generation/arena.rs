//! # Arena Generation
//!
//! Lays out the starting arena: a bordered grid, the player, one enemy of each
//! behaviour and two pickups, all at fixed tile coordinates.

use crate::game::{
    AiBehavior, Enemy, Grid, Item, ItemEffect, Player, Position, TileType, World,
};
use crate::{GameConfig, Generator, SkirmishError, SkirmishResult};
use log::{debug, info};

/// Template for an enemy placed when a run starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyTemplate {
    /// Spawn point in tile units
    pub tile: (f32, f32),
    pub behavior: AiBehavior,
    pub max_hp: u32,
    pub attack: u32,
}

/// Template for an item placed when a run starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemTemplate {
    /// Spawn point in tile units
    pub tile: (f32, f32),
    pub name: &'static str,
    pub effect: ItemEffect,
}

/// Player spawn in tile units.
pub const PLAYER_SPAWN_TILE: (f32, f32) = (2.5, 2.5);

/// Enemies every run starts with.
pub const ENEMY_TEMPLATES: [EnemyTemplate; 2] = [
    EnemyTemplate {
        tile: (12.0, 5.0),
        behavior: AiBehavior::Chase,
        max_hp: 12,
        attack: 3,
    },
    EnemyTemplate {
        tile: (15.0, 9.0),
        behavior: AiBehavior::Ranged,
        max_hp: 20,
        attack: 5,
    },
];

/// Items every run starts with.
pub const ITEM_TEMPLATES: [ItemTemplate; 2] = [
    ItemTemplate {
        tile: (7.0, 3.0),
        name: "Potion",
        effect: ItemEffect::Heal(10),
    },
    ItemTemplate {
        tile: (17.0, 10.0),
        name: "Sword",
        effect: ItemEffect::AttackBoost(3),
    },
];

/// Generator for the starting arena.
///
/// # Examples
///
/// ```
/// use skirmish::{ArenaGenerator, GameConfig, Generator};
///
/// let world = ArenaGenerator::new().generate(&GameConfig::default()).unwrap();
/// assert_eq!(world.enemies.len(), 2);
/// assert!(world.projectiles.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArenaGenerator {
    interior_walls: Vec<(usize, usize)>,
}

impl ArenaGenerator {
    /// Creates a generator for the plain bordered arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds interior wall cells to the layout.
    pub fn with_interior_walls(mut self, walls: impl IntoIterator<Item = (usize, usize)>) -> Self {
        self.interior_walls.extend(walls);
        self
    }

    fn spawn_point(tile: (f32, f32), config: &GameConfig) -> Position {
        Position::from_tiles(tile.0, tile.1, config.tile_size)
    }
}

impl Generator<World> for ArenaGenerator {
    fn generate(&self, config: &GameConfig) -> SkirmishResult<World> {
        let grid = Grid::with_walls(
            config.map_width,
            config.map_height,
            config.tile_size,
            self.interior_walls.iter().copied(),
        )?;

        let player = Player::new(Self::spawn_point(PLAYER_SPAWN_TILE, config));
        let enemies: Vec<Enemy> = ENEMY_TEMPLATES
            .iter()
            .map(|template| {
                Enemy::new(
                    Self::spawn_point(template.tile, config),
                    template.behavior,
                    template.max_hp,
                    template.attack,
                )
            })
            .collect();
        let items: Vec<Item> = ITEM_TEMPLATES
            .iter()
            .map(|template| {
                Item::new(
                    Self::spawn_point(template.tile, config),
                    template.name,
                    template.effect,
                )
            })
            .collect();

        let world = World::new(grid, player, enemies, items);
        self.validate(&world, config)?;

        info!(
            "{} laid out a {}x{} arena",
            self.generator_type(),
            config.map_width,
            config.map_height
        );
        Ok(world)
    }

    fn validate(&self, world: &World, _config: &GameConfig) -> SkirmishResult<()> {
        if !world.grid.has_closed_border() {
            return Err(SkirmishError::InvalidWorld(
                "arena border must be walls".to_string(),
            ));
        }

        if world.grid.is_blocked(world.player.position, world.player.radius) {
            return Err(SkirmishError::InvalidWorld(format!(
                "player spawn {:?} is blocked",
                world.player.position
            )));
        }

        for enemy in &world.enemies {
            if world.grid.is_blocked(enemy.position, enemy.radius) {
                return Err(SkirmishError::InvalidWorld(format!(
                    "{} spawn {:?} is blocked",
                    enemy.behavior, enemy.position
                )));
            }
        }

        for item in &world.items {
            let open = world
                .grid
                .cell_at(item.position)
                .and_then(|(x, y)| world.grid.tile(x, y))
                .map(TileType::is_passable)
                .unwrap_or(false);
            if !open {
                return Err(SkirmishError::InvalidWorld(format!(
                    "item {} at {:?} is not on an open tile",
                    item.name, item.position
                )));
            }
        }

        debug!("arena layout validated");
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "ArenaGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{ItemKind, PLAYER_START_HP};

    #[test]
    fn test_default_arena_layout() {
        let config = GameConfig::new();
        let world = ArenaGenerator::new().generate(&config).unwrap();

        assert_eq!(world.grid.width(), 20);
        assert_eq!(world.grid.height(), 12);
        assert_eq!(world.player.position, Position::new(100.0, 100.0));
        assert_eq!(world.player.stats.hp, PLAYER_START_HP);

        assert_eq!(world.enemies[0].behavior, AiBehavior::Chase);
        assert_eq!(world.enemies[0].position, Position::new(480.0, 200.0));
        assert_eq!(world.enemies[0].stats.max_hp, 12);
        assert_eq!(world.enemies[1].behavior, AiBehavior::Ranged);
        assert_eq!(world.enemies[1].position, Position::new(600.0, 360.0));
        assert_eq!(world.enemies[1].stats.attack, 5);

        assert_eq!(world.items[0].name, "Potion");
        assert_eq!(world.items[0].kind(), ItemKind::Heal);
        assert_eq!(world.items[1].name, "Sword");
        assert_eq!(world.items[1].position, Position::new(680.0, 400.0));
    }

    #[test]
    fn test_fresh_ids_each_generation() {
        let config = GameConfig::new();
        let generator = ArenaGenerator::new();
        let first = generator.generate(&config).unwrap();
        let second = generator.generate(&config).unwrap();
        assert_ne!(first.enemies[0].id, second.enemies[0].id);
        assert_ne!(first.items[0].id, second.items[0].id);
    }

    #[test]
    fn test_map_too_small_for_templates() {
        let config = GameConfig {
            map_width: 10,
            map_height: 6,
            ..GameConfig::new()
        };
        assert!(matches!(
            ArenaGenerator::new().generate(&config),
            Err(SkirmishError::InvalidWorld(_))
        ));
    }

    #[test]
    fn test_wall_on_enemy_spawn_rejected() {
        let generator = ArenaGenerator::new().with_interior_walls([(12, 5)]);
        assert!(matches!(
            generator.generate(&GameConfig::new()),
            Err(SkirmishError::InvalidWorld(_))
        ));
    }

    #[test]
    fn test_interior_walls_away_from_spawns() {
        let generator = ArenaGenerator::new().with_interior_walls([(9, 6), (9, 7)]);
        let world = generator.generate(&GameConfig::new()).unwrap();
        assert_eq!(world.grid.tile(9, 6), Some(TileType::Wall));
        assert_eq!(generator.generator_type(), "ArenaGenerator");
    }
}
