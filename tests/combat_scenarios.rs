//! Frame-by-frame combat scenarios driven through the public session API.

use skirmish::{
    DamageSource, Enemy, GameConfig, GameEvent, GameState, Grid, InputAction, InputSnapshot,
    Item, ItemEffect, Outcome, Player, Position, Projectile, RunState, SkirmishError,
    SkirmishResult, World,
};

fn arena_with(player: Player, enemies: Vec<Enemy>, items: Vec<Item>) -> World {
    World::new(Grid::new(20, 12, 40.0).unwrap(), player, enemies, items)
}

/// Harmless enemy parked in the far corner so the run stays open.
fn bystander() -> Enemy {
    Enemy::chaser(Position::new(700.0, 400.0), 50, 0)
}

fn start(world: World) -> GameState {
    GameState::from_world(GameConfig::for_testing(), world).unwrap()
}

fn count_damage_events(events: &[GameEvent]) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, GameEvent::PlayerDamaged { .. }))
        .count()
}

#[test]
fn test_chase_contact_hit() -> SkirmishResult<()> {
    let player = Player::new(Position::new(200.0, 200.0));
    let chaser = Enemy::chaser(Position::new(200.0, 200.0), 12, 3);
    let mut game_state = start(arena_with(player, vec![chaser], vec![]));

    let output = game_state.step(&InputSnapshot::new())?;

    let world = game_state.world();
    assert_eq!(world.player.stats.hp, 27);
    assert_eq!(world.enemies[0].cooldown, 30);
    assert_eq!(world.enemies[0].position, Position::new(200.0, 200.0));
    assert_eq!(output.message, "Enemy attack! HP -3");
    assert_eq!(output.run_state, RunState::Running);
    Ok(())
}

#[test]
fn test_level_up_at_exact_threshold() -> SkirmishResult<()> {
    let mut player = Player::new(Position::new(200.0, 200.0));
    player.experience = 10;
    player.stats.hp = 9;
    let mut game_state = start(arena_with(player, vec![bystander()], vec![]));

    let output = game_state.step(&InputSnapshot::new())?;

    let player = &game_state.world().player;
    assert_eq!(player.level, 2);
    assert_eq!(player.experience, 0);
    assert_eq!(player.stats.max_hp, 35);
    assert_eq!(player.stats.hp, 35);
    assert_eq!(player.stats.attack, 7);
    assert!(output.events.contains(&GameEvent::LevelUp { level: 2 }));
    assert_eq!(output.message, "Level up! LV.2");
    Ok(())
}

#[test]
fn test_victory_same_frame_without_enemy_ai() -> SkirmishResult<()> {
    let player = Player::new(Position::new(200.0, 200.0));
    // Close enough to land a contact hit if its AI ever ran.
    let last_enemy = Enemy::chaser(Position::new(230.0, 200.0), 5, 3);
    let mut game_state = start(arena_with(player, vec![last_enemy], vec![]));

    let output = game_state.step(&InputSnapshot::from_actions([InputAction::Attack]))?;

    assert_eq!(output.run_state, RunState::Ended(Outcome::Victory));
    assert_eq!(game_state.run_state(), RunState::Ended(Outcome::Victory));
    assert_eq!(output.message, "Victory!");
    assert!(game_state.world().enemies.is_empty());

    let player = &game_state.world().player;
    assert_eq!(player.stats.hp, 30);
    assert_eq!(player.experience, 5);
    assert_eq!(player.score, 10);
    assert_eq!(count_damage_events(&output.events), 0);

    assert!(matches!(
        game_state.step(&InputSnapshot::new()),
        Err(SkirmishError::NotRunning(RunState::Ended(Outcome::Victory)))
    ));
    Ok(())
}

#[test]
fn test_area_swing_kills_both_and_levels() -> SkirmishResult<()> {
    let player = Player::new(Position::new(200.0, 200.0));
    let enemies = vec![
        Enemy::chaser(Position::new(230.0, 200.0), 5, 3),
        Enemy::ranged(Position::new(170.0, 200.0), 5, 5),
    ];
    let mut game_state = start(arena_with(player, enemies, vec![]));

    let output = game_state.step(&InputSnapshot::from_actions([InputAction::Attack]))?;

    let defeated = output
        .events
        .iter()
        .filter(|event| matches!(event, GameEvent::EnemyDefeated { .. }))
        .count();
    assert_eq!(defeated, 2);
    assert!(output.events.contains(&GameEvent::LevelUp { level: 2 }));
    assert_eq!(output.run_state, RunState::Ended(Outcome::Victory));
    assert_eq!(game_state.world().player.score, 20);
    assert_eq!(game_state.statistics().enemies_defeated, 2);
    assert_eq!(game_state.statistics().damage_dealt, 10);
    Ok(())
}

#[test]
fn test_melee_defeat_short_circuits_frame() -> SkirmishResult<()> {
    let mut player = Player::new(Position::new(200.0, 200.0));
    player.stats.hp = 3;
    let second = Position::new(205.0, 200.0);
    let enemies = vec![
        Enemy::chaser(Position::new(200.0, 200.0), 12, 3),
        Enemy::chaser(second, 12, 3),
    ];
    let mut world = arena_with(player, enemies, vec![]);
    world.projectiles.push(Projectile::enemy_shot(
        Position::new(300.0, 200.0),
        Position::new(-5.0, 0.0),
        5,
    ));
    let mut game_state = start(world);

    let output = game_state.step(&InputSnapshot::new())?;

    assert_eq!(output.run_state, RunState::Ended(Outcome::Defeat));
    assert_eq!(output.message, "Game Over!");
    assert_eq!(count_damage_events(&output.events), 1);

    let world = game_state.world();
    assert_eq!(world.player.stats.hp, 0);
    assert_eq!(world.enemies[1].position, second);
    assert_eq!(world.projectiles[0].position, Position::new(300.0, 200.0));
    Ok(())
}

#[test]
fn test_projectile_defeat_short_circuits_frame() -> SkirmishResult<()> {
    let mut player = Player::new(Position::new(200.0, 200.0));
    player.stats.hp = 5;
    let mut world = arena_with(player, vec![bystander()], vec![]);
    for x in [210.0, 190.0] {
        world.projectiles.push(Projectile::enemy_shot(
            Position::new(x, 200.0),
            Position::origin(),
            5,
        ));
    }
    let mut game_state = start(world);

    let output = game_state.step(&InputSnapshot::new())?;

    assert_eq!(output.run_state, RunState::Ended(Outcome::Defeat));
    assert_eq!(count_damage_events(&output.events), 1);
    assert!(output.events.contains(&GameEvent::PlayerDamaged {
        damage: 5,
        source: DamageSource::Projectile,
    }));
    assert_eq!(game_state.world().projectiles.len(), 1);
    assert_eq!(game_state.statistics().damage_taken, 5);
    Ok(())
}

#[test]
fn test_ranged_enemy_shot_lands() -> SkirmishResult<()> {
    let player = Player::new(Position::new(200.0, 200.0));
    let archer = Enemy::ranged(Position::new(450.0, 200.0), 20, 5);
    let mut game_state = start(arena_with(player, vec![archer], vec![]));

    let mut landed = false;
    for _ in 0..60 {
        let output = game_state.step(&InputSnapshot::new())?;
        if output.message == "Ranged attack! HP -5" {
            landed = true;
            break;
        }
    }

    assert!(landed, "the first shot should reach the player within 60 frames");
    assert_eq!(game_state.world().player.stats.hp, 25);
    assert_eq!(game_state.statistics().projectiles_fired, 1);
    assert!(game_state.world().projectiles.is_empty());
    Ok(())
}

#[test]
fn test_item_pickup_is_idempotent() -> SkirmishResult<()> {
    let mut player = Player::new(Position::new(200.0, 200.0));
    player.stats.hp = 12;
    let potion = Item::new(Position::new(200.0, 200.0), "Potion", ItemEffect::Heal(10));
    let mut game_state = start(arena_with(player, vec![bystander()], vec![potion]));

    for _ in 0..3 {
        game_state.step(&InputSnapshot::new())?;
    }

    let player = &game_state.world().player;
    assert_eq!(player.stats.hp, 22);
    assert_eq!(player.inventory.len(), 1);
    assert_eq!(game_state.statistics().items_collected, 1);
    Ok(())
}

#[test]
fn test_multiple_pickups_in_one_frame() -> SkirmishResult<()> {
    let mut player = Player::new(Position::new(200.0, 200.0));
    player.stats.hp = 25;
    let items = vec![
        Item::new(Position::new(210.0, 200.0), "Potion", ItemEffect::Heal(10)),
        Item::new(Position::new(190.0, 205.0), "Sword", ItemEffect::AttackBoost(3)),
        Item::new(Position::new(400.0, 300.0), "Far Potion", ItemEffect::Heal(10)),
    ];
    let mut game_state = start(arena_with(player, vec![bystander()], items));

    let output = game_state.step(&InputSnapshot::new())?;

    let player = &game_state.world().player;
    assert_eq!(player.stats.hp, 30, "heal is capped at max hp");
    assert_eq!(player.stats.attack, 8);
    assert_eq!(player.inventory_names(), vec!["Potion", "Sword"]);
    assert_eq!(game_state.world().items.len(), 1);
    assert_eq!(output.message, "Picked up: Sword!");
    Ok(())
}

#[test]
fn test_attack_cooldown_window() -> SkirmishResult<()> {
    let player = Player::new(Position::new(200.0, 200.0));
    let dummy = Enemy::chaser(Position::new(230.0, 200.0), 100, 0);
    let mut game_state = start(arena_with(player, vec![dummy], vec![]));
    let attack = InputSnapshot::from_actions([InputAction::Attack]);

    let mut swings = 0;
    for _ in 0..41 {
        let output = game_state.step(&attack)?;
        swings += output
            .events
            .iter()
            .filter(|event| matches!(event, GameEvent::PlayerAttacked { .. }))
            .count();
    }

    assert_eq!(swings, 3);
    assert_eq!(game_state.world().enemies[0].stats.hp, 85);
    Ok(())
}

#[test]
fn test_reset_after_defeat() -> SkirmishResult<()> {
    let mut player = Player::new(Position::new(200.0, 200.0));
    player.stats.hp = 1;
    let chaser = Enemy::chaser(Position::new(200.0, 200.0), 12, 3);
    let mut game_state = start(arena_with(player, vec![chaser], vec![]));

    game_state.step(&InputSnapshot::new())?;
    assert_eq!(game_state.run_state(), RunState::Ended(Outcome::Defeat));

    game_state.reset()?;
    assert!(game_state.is_running());
    assert_eq!(game_state.frame(), 0);
    assert_eq!(game_state.world().player.stats.hp, 30);
    assert_eq!(game_state.world().enemies.len(), 2);
    assert_eq!(game_state.world().items.len(), 2);
    assert_eq!(game_state.statistics().damage_taken, 0);
    Ok(())
}
