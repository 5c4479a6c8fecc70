//! # Enemy AI
//!
//! Per-enemy behaviour for one frame. The AI only moves the enemy and decides
//! what it does to the player; the state step applies the consequences.

use crate::game::{tick_cooldown, AiBehavior, Enemy, Grid, Player, Position, Projectile};
use crate::GameConfig;

/// What an enemy did to the player this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum AiAction {
    /// Contact hit for the given damage
    MeleeHit { damage: u32 },
    /// A new projectile to put in flight
    Fire(Projectile),
}

/// Chase enemies stop stepping once this close, so they don't jitter on top
/// of the player.
const CHASE_STOP_DISTANCE: f32 = 1.0;

/// Runs one frame of behaviour for a living enemy.
///
/// The enemy's cooldown ticks first, then its behaviour runs against the
/// player's current position.
pub fn update_enemy(
    enemy: &mut Enemy,
    player: &Player,
    grid: &Grid,
    config: &GameConfig,
) -> Option<AiAction> {
    tick_cooldown(&mut enemy.cooldown);
    match enemy.behavior {
        AiBehavior::Chase => chase(enemy, player, grid, config),
        AiBehavior::Ranged => kite_and_shoot(enemy, player, grid, config),
    }
}

/// Moves `enemy` one step toward `target` unless the step would be blocked.
/// Returns true if it moved.
fn step_toward(enemy: &mut Enemy, target: Position, grid: &Grid, speed: f32) -> bool {
    let Some(direction) = (target - enemy.position).normalized() else {
        return false;
    };
    let next = enemy.position + direction.scale(speed);
    if grid.is_blocked(next, enemy.radius) {
        return false;
    }
    enemy.position = next;
    true
}

fn chase(enemy: &mut Enemy, player: &Player, grid: &Grid, config: &GameConfig) -> Option<AiAction> {
    if enemy.position.distance(player.position) > CHASE_STOP_DISTANCE {
        step_toward(enemy, player.position, grid, config.enemy_speed);
    }

    let touching = enemy.position.distance(player.position) < enemy.radius + player.radius;
    if touching && enemy.cooldown == 0 {
        enemy.cooldown = config.chase_attack_cooldown;
        return Some(AiAction::MeleeHit {
            damage: enemy.stats.attack,
        });
    }
    None
}

fn kite_and_shoot(
    enemy: &mut Enemy,
    player: &Player,
    grid: &Grid,
    config: &GameConfig,
) -> Option<AiAction> {
    let distance = enemy.position.distance(player.position);
    if distance > config.ranged_keep_away {
        step_toward(enemy, player.position, grid, config.enemy_speed);
    }

    if distance < config.ranged_fire_range && enemy.cooldown == 0 {
        let velocity = (player.position - enemy.position)
            .normalized()
            .map(|direction| direction.scale(config.projectile_speed))
            .unwrap_or_default();
        enemy.cooldown = config.ranged_fire_cooldown;
        return Some(AiAction::Fire(Projectile::enemy_shot(
            enemy.position,
            velocity,
            config.projectile_damage,
        )));
    }
    None
}
