//! # User Interface Elements
//!
//! HUD text plus the title and ending overlays.

use crate::game::{Outcome, Player};
use macroquad::prelude::*;

/// Formats the status line shown at the top of the screen.
///
/// # Examples
///
/// ```
/// use skirmish::{hud_line, Player, Position};
///
/// let player = Player::new(Position::new(0.0, 0.0));
/// assert_eq!(hud_line(&player), "HP 30/30 LV 1 EXP 0 ATK 5 SCORE 0");
/// ```
pub fn hud_line(player: &Player) -> String {
    format!(
        "HP {}/{} LV {} EXP {} ATK {} SCORE {}",
        player.stats.hp,
        player.stats.max_hp,
        player.level,
        player.experience,
        player.stats.attack,
        player.score
    )
}

/// Formats the inventory line, item names in pickup order.
pub fn inventory_line(player: &Player) -> String {
    let names = player.inventory_names();
    if names.is_empty() {
        "Items: none".to_string()
    } else {
        format!("Items: {}", names.join(", "))
    }
}

/// Headline for the ending overlay.
pub fn outcome_title(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Victory => "VICTORY",
        Outcome::Defeat => "GAME OVER",
    }
}

/// Controls listed by the help overlay.
pub const HELP_LINES: [&str; 5] = [
    "Arrows/WASD: Move",
    "SPACE: Attack",
    "ENTER: Start / restart",
    "ESC: Quit",
    "F1: Toggle help",
];

/// HUD and overlay drawing.
#[derive(Debug, Clone, Default)]
pub struct UI {
    /// Whether the controls overlay is shown
    pub show_help: bool,
}

impl UI {
    /// Creates a new UI instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the controls overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Draws the status line, inventory and latest message.
    pub fn render_hud(&self, player: &Player, message: Option<&str>) {
        draw_rectangle(0.0, 0.0, screen_width(), 48.0, Color::new(0.0, 0.0, 0.0, 0.6));
        draw_text(&hud_line(player), 10.0, 18.0, 20.0, WHITE);
        draw_text(&inventory_line(player), 10.0, 38.0, 16.0, LIGHTGRAY);

        if let Some(message) = message {
            let y = screen_height() - 12.0;
            draw_text(message, 10.0, y, 20.0, YELLOW);
        }

        if self.show_help {
            self.render_help();
        }
    }

    fn render_help(&self) {
        let x = screen_width() - 200.0;
        for (i, line) in HELP_LINES.iter().enumerate() {
            draw_text(line, x, 70.0 + i as f32 * 20.0, 16.0, WHITE);
        }
    }

    /// Draws the title screen.
    pub fn render_title_screen(&self) {
        clear_background(BLACK);
        let center_x = screen_width() / 2.0;
        let center_y = screen_height() / 2.0;
        draw_centered("SKIRMISH", center_x, center_y - 30.0, 48.0, WHITE);
        draw_centered("Press ENTER to start", center_x, center_y + 20.0, 24.0, LIGHTGRAY);
        draw_centered("ESC to quit, F1 for help", center_x, center_y + 50.0, 18.0, GRAY);

        if self.show_help {
            self.render_help();
        }
    }

    /// Draws the ending overlay on top of the last rendered frame.
    pub fn render_ending_screen(&self, outcome: Outcome, player: &Player) {
        draw_rectangle(
            0.0,
            0.0,
            screen_width(),
            screen_height(),
            Color::new(0.0, 0.0, 0.0, 0.7),
        );
        let center_x = screen_width() / 2.0;
        let center_y = screen_height() / 2.0;
        let color = match outcome {
            Outcome::Victory => GOLD,
            Outcome::Defeat => RED,
        };
        draw_centered(outcome_title(outcome), center_x, center_y - 30.0, 48.0, color);
        draw_centered(&hud_line(player), center_x, center_y + 10.0, 20.0, WHITE);
        draw_centered(
            "Press ENTER to play again, ESC to quit",
            center_x,
            center_y + 40.0,
            18.0,
            LIGHTGRAY,
        );

        if self.show_help {
            self.render_help();
        }
    }
}

fn draw_centered(text: &str, center_x: f32, y: f32, font_size: f32, color: Color) {
    let size = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, center_x - size.width / 2.0, y, font_size, color);
}
