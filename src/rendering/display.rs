//! # Display Management
//!
//! Draws a read-only view of the world with macroquad. World coordinates map
//! one-to-one onto screen pixels after subtracting the camera offset reported
//! by the simulation.

use crate::game::{AiBehavior, GameState, ItemKind, Position, TileType, World};
use crate::rendering::UI;
use crate::GameConfig;
use macroquad::prelude::*;

/// Wall tile colour.
pub const WALL_COLOR: Color = Color::new(0.133, 0.133, 0.133, 1.0);
/// Floor tile colour.
pub const FLOOR_COLOR: Color = Color::new(0.2, 0.667, 0.2, 1.0);
/// Healing item colour.
pub const HEAL_ITEM_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
/// Attack boost item colour.
pub const BOOST_ITEM_COLOR: Color = Color::new(1.0, 0.667, 0.0, 1.0);
/// Player body colour.
pub const PLAYER_COLOR: Color = Color::new(0.267, 0.667, 1.0, 1.0);
/// Chase enemy body colour.
pub const CHASER_COLOR: Color = Color::new(0.933, 0.333, 0.333, 1.0);
/// Ranged enemy body colour.
pub const ARCHER_COLOR: Color = Color::new(1.0, 0.667, 0.0, 1.0);

/// Fill colour for a tile.
pub fn tile_color(tile: TileType) -> Color {
    match tile {
        TileType::Wall => WALL_COLOR,
        TileType::Open => FLOOR_COLOR,
    }
}

/// Fill colour for an item of the given kind.
pub fn item_color(kind: ItemKind) -> Color {
    match kind {
        ItemKind::Heal => HEAL_ITEM_COLOR,
        ItemKind::AttackBoost => BOOST_ITEM_COLOR,
    }
}

/// Window settings matching the viewport the session runs with.
///
/// The window is not resizable, so the camera clamp and the visible area
/// always agree.
pub fn window_conf_for(config: &GameConfig) -> Conf {
    Conf {
        window_title: "Skirmish".to_string(),
        window_width: config.viewport_width.round() as i32,
        window_height: config.viewport_height.round() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Macroquad display manager for the game.
pub struct MacroquadDisplay {
    /// Visible width in world units (and pixels)
    pub viewport_width: f32,
    /// Visible height in world units (and pixels)
    pub viewport_height: f32,
    /// Diameter of one item marker
    pub item_size: f32,
    /// Message history
    pub messages: Vec<String>,
    /// Maximum number of messages to keep
    pub max_messages: usize,
    /// HUD and overlay drawing
    pub ui: UI,
}

impl MacroquadDisplay {
    /// Creates a display sized to the configured viewport.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            viewport_width: config.viewport_width,
            viewport_height: config.viewport_height,
            item_size: config.item_size,
            messages: Vec::new(),
            max_messages: 50,
            ui: UI::new(),
        }
    }

    /// Renders the complete game screen through `camera`.
    pub fn render_game(&self, game_state: &GameState, camera: Position) {
        clear_background(BLACK);

        let world = game_state.world();
        self.render_tiles(world, camera);
        self.render_items(world, camera);
        self.render_projectiles(world, camera);
        self.render_enemies(world, camera);
        self.render_player(world, camera);

        self.ui.render_hud(&world.player, self.latest_message());
    }

    fn render_tiles(&self, world: &World, camera: Position) {
        let grid = &world.grid;
        let tile = grid.tile_size();

        // Only the cells overlapping the viewport.
        let first_x = (camera.x / tile).floor().max(0.0) as usize;
        let first_y = (camera.y / tile).floor().max(0.0) as usize;
        let last_x =
            (((camera.x + self.viewport_width) / tile).ceil() as usize).min(grid.width());
        let last_y =
            (((camera.y + self.viewport_height) / tile).ceil() as usize).min(grid.height());

        for y in first_y..last_y {
            for x in first_x..last_x {
                let Some(tile_type) = grid.tile(x, y) else {
                    continue;
                };
                draw_rectangle(
                    x as f32 * tile - camera.x,
                    y as f32 * tile - camera.y,
                    tile,
                    tile,
                    tile_color(tile_type),
                );
            }
        }
    }

    fn render_items(&self, world: &World, camera: Position) {
        let half = self.item_size / 2.0;
        for item in &world.items {
            let screen = item.position - camera;
            draw_circle(screen.x, screen.y, half, item_color(item.kind()));
            draw_text(&item.name, screen.x - half, screen.y - half - 4.0, 16.0, WHITE);
        }
    }

    fn render_projectiles(&self, world: &World, camera: Position) {
        for projectile in &world.projectiles {
            let screen = projectile.position - camera;
            draw_circle(screen.x, screen.y, 5.0, ARCHER_COLOR);
        }
    }

    fn render_enemies(&self, world: &World, camera: Position) {
        for enemy in world.enemies.iter().filter(|enemy| enemy.is_alive()) {
            let screen = enemy.position - camera;
            let color = match enemy.behavior {
                AiBehavior::Chase => CHASER_COLOR,
                AiBehavior::Ranged => ARCHER_COLOR,
            };
            draw_circle(screen.x, screen.y, enemy.radius, color);

            let bar_width = enemy.radius * 2.0;
            let filled = bar_width * enemy.stats.hp as f32 / enemy.stats.max_hp.max(1) as f32;
            let bar_y = screen.y - enemy.radius - 8.0;
            draw_rectangle(screen.x - enemy.radius, bar_y, bar_width, 4.0, DARKGRAY);
            draw_rectangle(screen.x - enemy.radius, bar_y, filled, 4.0, RED);
        }
    }

    fn render_player(&self, world: &World, camera: Position) {
        let player = &world.player;
        let screen = player.position - camera;
        draw_circle(screen.x, screen.y, player.radius, PLAYER_COLOR);

        let facing = Position::new(player.facing.cos(), player.facing.sin());
        let tip = screen + facing.scale(player.radius + 6.0);
        draw_line(screen.x, screen.y, tip.x, tip.y, 3.0, WHITE);
    }

    /// Most recent message, if any.
    pub fn latest_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Adds a message to the message history.
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);

        // Keep only the most recent messages
        if self.messages.len() > self.max_messages {
            self.messages.remove(0);
        }
    }

    /// Drops every stored message.
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_follows_loaded_viewport() {
        let config = GameConfig {
            viewport_width: 800.0,
            viewport_height: 480.0,
            ..GameConfig::new()
        };
        let conf = window_conf_for(&config);
        assert_eq!(conf.window_width, 800);
        assert_eq!(conf.window_height, 480);
        assert!(!conf.window_resizable);

        let display = MacroquadDisplay::new(&config);
        assert_eq!(display.viewport_width as i32, conf.window_width);
        assert_eq!(display.viewport_height as i32, conf.window_height);
    }

    #[test]
    fn test_default_window_size() {
        let conf = window_conf_for(&GameConfig::default());
        assert_eq!((conf.window_width, conf.window_height), (640, 400));
    }

    #[test]
    fn test_walls_are_dark_and_floor_green() {
        assert_eq!(tile_color(TileType::Wall), WALL_COLOR);
        assert_eq!(tile_color(TileType::Open), FLOOR_COLOR);
        assert!(WALL_COLOR.g < FLOOR_COLOR.g);
    }

    #[test]
    fn test_items_coloured_by_kind() {
        assert_eq!(item_color(ItemKind::Heal), HEAL_ITEM_COLOR);
        assert_eq!(item_color(ItemKind::AttackBoost), BOOST_ITEM_COLOR);
        assert_ne!(HEAL_ITEM_COLOR, BOOST_ITEM_COLOR);
    }
}
