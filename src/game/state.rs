//! # Game State Module
//!
//! The session object that owns the world and the run state machine, and
//! advances the simulation one frame at a time.
//!
//! A frame runs these phases in order, each a complete pass before the next:
//! movement, pickups, the player's attack, leveling, enemies, projectiles and
//! finally the victory check. The session never schedules itself; an external
//! driver calls [`GameState::step`] once per frame.

use crate::game::{
    camera_offset, resolve_player_attack, try_level_up, update_enemy, AiAction, DamageSource,
    FrameOutput, GameEvent, Outcome, Position, World,
};
use crate::input::InputSnapshot;
use crate::{ArenaGenerator, GameConfig, Generator, SkirmishError, SkirmishResult};
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunState {
    /// Nothing has been started yet
    Idle,
    /// Frames are being simulated
    Running,
    /// The run is over and frames are rejected until the next reset
    Ended(Outcome),
}

/// Running totals for the current run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Number of enemies defeated
    pub enemies_defeated: u32,
    /// Number of items collected
    pub items_collected: u32,
    /// Hp removed from enemies
    pub damage_dealt: u64,
    /// Hp removed from the player
    pub damage_taken: u64,
    /// Shots fired by enemies
    pub projectiles_fired: u32,
    /// Frames in which the player actually moved
    pub steps_taken: u64,
    /// Levels gained
    pub levels_gained: u32,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PlayerMoved { .. } => {
                self.steps_taken += 1;
            }
            GameEvent::ItemPickedUp { .. } => {
                self.items_collected += 1;
            }
            GameEvent::PlayerAttacked { total_damage, .. } => {
                self.damage_dealt += *total_damage as u64;
            }
            GameEvent::EnemyDefeated { .. } => {
                self.enemies_defeated += 1;
            }
            GameEvent::LevelUp { .. } => {
                self.levels_gained += 1;
            }
            GameEvent::ProjectileFired { .. } => {
                self.projectiles_fired += 1;
            }
            GameEvent::PlayerDamaged { damage, .. } => {
                self.damage_taken += *damage as u64;
            }
            GameEvent::RunEnded { .. } => {}
        }
    }
}

/// Whether the rest of a frame should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    PlayerDown,
}

/// Central game session: configuration, world and run state.
///
/// The world is read freely by the renderer through [`GameState::world`];
/// only [`GameState::step`] and [`GameState::reset`] change it.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    world: World,
    run_state: RunState,
    frame: u64,
    statistics: GameStatistics,
}

impl GameState {
    /// Creates an idle session with the starting arena already laid out.
    ///
    /// # Examples
    ///
    /// ```
    /// use skirmish::{GameConfig, GameState, RunState};
    ///
    /// let game_state = GameState::new(GameConfig::default()).unwrap();
    /// assert_eq!(game_state.run_state(), RunState::Idle);
    /// assert_eq!(game_state.frame(), 0);
    /// ```
    pub fn new(config: GameConfig) -> SkirmishResult<Self> {
        config.validate()?;
        let world = ArenaGenerator::new().generate(&config)?;
        Ok(Self {
            config,
            world,
            run_state: RunState::Idle,
            frame: 0,
            statistics: GameStatistics::new(),
        })
    }

    /// Starts a run on a prebuilt world instead of the standard arena.
    ///
    /// The grid border is checked, but spawns are taken as given so tests and
    /// custom scenarios can place entities freely.
    pub fn from_world(config: GameConfig, world: World) -> SkirmishResult<Self> {
        config.validate()?;
        if !world.grid.has_closed_border() {
            return Err(SkirmishError::InvalidWorld(
                "grid border must be walls".to_string(),
            ));
        }
        info!("starting run on a custom world");
        Ok(Self {
            config,
            world,
            run_state: RunState::Running,
            frame: 0,
            statistics: GameStatistics::new(),
        })
    }

    /// Rebuilds every entity from the starting templates and starts running.
    pub fn reset(&mut self) -> SkirmishResult<()> {
        self.world = ArenaGenerator::new().generate(&self.config)?;
        self.run_state = RunState::Running;
        self.frame = 0;
        self.statistics = GameStatistics::new();
        info!(
            "run started with {} enemies and {} items",
            self.world.enemies.len(),
            self.world.items.len()
        );
        Ok(())
    }

    /// Current run state.
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Returns true while frames are accepted.
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Read-only view of the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Configuration this session runs with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of frames simulated since the last reset.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Totals for the current run.
    pub fn statistics(&self) -> &GameStatistics {
        &self.statistics
    }

    /// Viewport offset that keeps the player centred inside the world.
    pub fn camera(&self) -> Position {
        camera_offset(
            self.world.player.position,
            (self.config.viewport_width, self.config.viewport_height),
            self.world.grid.world_size(),
        )
    }

    /// Advances the simulation by one frame.
    ///
    /// Returns [`SkirmishError::NotRunning`] without touching anything unless
    /// the run state is [`RunState::Running`].
    pub fn step(&mut self, input: &InputSnapshot) -> SkirmishResult<FrameOutput> {
        if self.run_state != RunState::Running {
            return Err(SkirmishError::NotRunning(self.run_state));
        }
        self.frame += 1;
        trace!("frame {} input {:?}", self.frame, input);

        let mut events = Vec::new();
        self.move_player(input, &mut events);
        self.collect_items(&mut events);
        self.player_attack(input, &mut events);
        if let Some(level) = try_level_up(&mut self.world.player, &self.config) {
            events.push(GameEvent::LevelUp { level });
        }

        let flow = match self.update_enemies(&mut events) {
            Flow::Continue => self.update_projectiles(&mut events),
            Flow::PlayerDown => Flow::PlayerDown,
        };

        match flow {
            Flow::PlayerDown => self.end_run(Outcome::Defeat, &mut events),
            Flow::Continue if self.world.enemies.is_empty() => {
                self.end_run(Outcome::Victory, &mut events)
            }
            Flow::Continue => {}
        }

        for event in &events {
            self.statistics.update_from_event(event);
        }

        Ok(FrameOutput::new(
            self.frame,
            events,
            self.camera(),
            self.run_state,
        ))
    }

    fn move_player(&mut self, input: &InputSnapshot, events: &mut Vec<GameEvent>) {
        let Some(direction) = input.movement() else {
            return;
        };
        let player = &mut self.world.player;
        let from = player.position;
        let proposed = from + direction.scale(self.config.player_speed);

        if !self.world.grid.is_blocked(proposed, player.radius) {
            player.position = proposed;
            events.push(GameEvent::PlayerMoved { from, to: proposed });
        }
        player.facing = direction.angle();
    }

    fn collect_items(&mut self, events: &mut Vec<GameEvent>) {
        let player = &mut self.world.player;
        let reach = player.radius + self.config.item_size / 2.0;

        let (picked, remaining): (Vec<_>, Vec<_>) = std::mem::take(&mut self.world.items)
            .into_iter()
            .partition(|item| player.position.distance(item.position) < reach);
        self.world.items = remaining;

        for item in picked {
            player.stats = item.effect.apply(player.stats);
            debug!("picked up {} ({:?})", item.name, item.effect);
            events.push(GameEvent::ItemPickedUp {
                item_id: item.id,
                name: item.name.clone(),
                kind: item.kind(),
            });
            player.inventory.push(item);
        }
    }

    fn player_attack(&mut self, input: &InputSnapshot, events: &mut Vec<GameEvent>) {
        let Some(report) = resolve_player_attack(
            &mut self.world.player,
            &mut self.world.enemies,
            input.attack(),
            &self.config,
        ) else {
            return;
        };

        if report.hits > 0 {
            events.push(GameEvent::PlayerAttacked {
                damage: report.damage,
                hits: report.hits,
                total_damage: report.total_damage,
            });
        }
        for enemy_id in report.defeated {
            events.push(GameEvent::EnemyDefeated {
                enemy_id,
                experience: self.config.experience_per_kill,
                score: self.config.score_per_kill,
            });
        }
    }

    fn update_enemies(&mut self, events: &mut Vec<GameEvent>) -> Flow {
        let World {
            grid,
            player,
            enemies,
            projectiles,
            ..
        } = &mut self.world;

        // Kills were already rewarded when the hit landed.
        enemies.retain(|enemy| enemy.is_alive());

        for enemy in enemies.iter_mut() {
            match update_enemy(enemy, player, grid, &self.config) {
                Some(AiAction::MeleeHit { damage }) => {
                    let lost = player.stats.take_damage(damage);
                    events.push(GameEvent::PlayerDamaged {
                        damage: lost,
                        source: DamageSource::Melee(enemy.id),
                    });
                    if !player.is_alive() {
                        return Flow::PlayerDown;
                    }
                }
                Some(AiAction::Fire(projectile)) => {
                    projectiles.push(projectile);
                    events.push(GameEvent::ProjectileFired { enemy_id: enemy.id });
                }
                None => {}
            }
        }
        Flow::Continue
    }

    fn update_projectiles(&mut self, events: &mut Vec<GameEvent>) -> Flow {
        let hit_distance = self.world.player.radius + self.config.projectile_radius;
        let mut index = 0;
        while index < self.world.projectiles.len() {
            let projectile = &mut self.world.projectiles[index];
            projectile.position += projectile.velocity;
            let position = projectile.position;
            let damage = projectile.damage;

            if position.distance(self.world.player.position) < hit_distance {
                self.world.projectiles.remove(index);
                let lost = self.world.player.stats.take_damage(damage);
                events.push(GameEvent::PlayerDamaged {
                    damage: lost,
                    source: DamageSource::Projectile,
                });
                if !self.world.player.is_alive() {
                    return Flow::PlayerDown;
                }
                continue;
            }

            if !self.world.contains(position) {
                self.world.projectiles.remove(index);
                continue;
            }
            index += 1;
        }
        Flow::Continue
    }

    fn end_run(&mut self, outcome: Outcome, events: &mut Vec<GameEvent>) {
        self.run_state = RunState::Ended(outcome);
        events.push(GameEvent::RunEnded { outcome });
        info!(
            "run ended in {:?} on frame {} with score {}",
            outcome, self.frame, self.world.player.score
        );
    }
}
