//! # Combat & Progression
//!
//! Player swings, kill rewards, and leveling. Enemy-side damage is decided by
//! the AI module and applied by the state step.

use crate::game::{Enemy, EntityId, Player};
use crate::GameConfig;
use log::debug;

/// Result of a swing attempt that was allowed by the cooldown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttackReport {
    /// Attack power applied to each enemy in reach
    pub damage: u32,
    /// Number of enemies in reach
    pub hits: usize,
    /// Hp actually removed across all hits
    pub total_damage: u32,
    /// Enemies whose hp reached zero from this swing
    pub defeated: Vec<EntityId>,
}

/// Counts a cooldown down by one frame, stopping at zero.
pub fn tick_cooldown(cooldown: &mut u32) {
    *cooldown = cooldown.saturating_sub(1);
}

/// Distance under which a swing reaches `enemy`.
pub fn melee_reach(player: &Player, enemy: &Enemy, config: &GameConfig) -> f32 {
    player.radius + enemy.radius + config.attack_range
}

/// Runs the player's attack phase for one frame.
///
/// The cooldown ticks first. If the attack is held and the cooldown is ready,
/// every living enemy within reach takes the player's attack at once, kills
/// are rewarded immediately, and the cooldown restarts whether or not
/// anything was hit. Returns `None` when no swing happened.
pub fn resolve_player_attack(
    player: &mut Player,
    enemies: &mut [Enemy],
    attack_held: bool,
    config: &GameConfig,
) -> Option<AttackReport> {
    tick_cooldown(&mut player.attack_cooldown);
    if !attack_held || player.attack_cooldown > 0 {
        return None;
    }

    let mut report = AttackReport {
        damage: player.stats.attack,
        ..AttackReport::default()
    };

    for enemy in enemies.iter_mut().filter(|enemy| enemy.is_alive()) {
        if player.position.distance(enemy.position) >= melee_reach(player, enemy, config) {
            continue;
        }
        report.hits += 1;
        let lost = enemy.stats.take_damage(player.stats.attack);
        report.total_damage = report.total_damage.saturating_add(lost);

        if !enemy.is_alive() {
            player.experience = player.experience.saturating_add(config.experience_per_kill);
            player.score = player.score.saturating_add(config.score_per_kill);
            report.defeated.push(enemy.id);
            debug!("{} {} defeated", enemy.behavior, enemy.id);
        }
    }

    player.attack_cooldown = config.player_attack_cooldown;
    Some(report)
}

/// Experience needed to leave `level`.
pub fn level_threshold(level: u32, config: &GameConfig) -> u32 {
    config.level_threshold_factor.saturating_mul(level)
}

/// Applies at most one level-up. Returns the new level if one happened.
///
/// Experience resets to zero on level-up, so surplus experience is not carried
/// over into a second level in the same frame.
pub fn try_level_up(player: &mut Player, config: &GameConfig) -> Option<u32> {
    if player.experience < level_threshold(player.level, config) {
        return None;
    }

    player.level = player.level.saturating_add(1);
    player.stats.max_hp = player.stats.max_hp.saturating_add(config.level_up_max_hp);
    player.stats.hp = player.stats.max_hp;
    player.stats.attack = player.stats.attack.saturating_add(config.level_up_attack);
    player.experience = 0;
    debug!("player reached level {}", player.level);
    Some(player.level)
}
