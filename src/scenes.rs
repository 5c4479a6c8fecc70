//! # Scene Management System
//!
//! The frame driver. Owns the game session, samples input once per frame,
//! advances the simulation and hands the result to the display. The
//! simulation itself never schedules frames; this loop does.

use crate::{
    GameState, InputHandler, MacroquadDisplay, Outcome, PlayerInput, Position, RunState,
    SkirmishResult,
};
use macroquad::prelude::*;

/// Represents the current scene in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneType {
    /// Waiting for the player to start a run
    Title,
    /// Normal gameplay
    Playing,
    /// The run is over
    Ended(Outcome),
}

impl SceneType {
    /// Scene that matches a run state.
    pub fn for_run_state(run_state: RunState) -> Self {
        match run_state {
            RunState::Idle => SceneType::Title,
            RunState::Running => SceneType::Playing,
            RunState::Ended(outcome) => SceneType::Ended(outcome),
        }
    }
}

/// The main scene manager that coordinates all game scenes
pub struct SceneManager {
    current_scene: SceneType,
    game_state: GameState,
    display: MacroquadDisplay,
    input_handler: InputHandler,
    camera: Position,
}

impl SceneManager {
    /// Creates a new scene manager for the given session.
    pub fn new(game_state: GameState, input_handler: InputHandler) -> Self {
        let display = MacroquadDisplay::new(game_state.config());
        let camera = game_state.camera();
        Self {
            current_scene: SceneType::for_run_state(game_state.run_state()),
            game_state,
            display,
            input_handler,
            camera,
        }
    }

    /// Scene currently shown.
    pub fn current_scene(&self) -> SceneType {
        self.current_scene
    }

    /// Runs the main scene loop until the game exits
    pub async fn run(&mut self) -> SkirmishResult<()> {
        loop {
            let exit = match self.current_scene {
                SceneType::Title => self.update_title_scene()?,
                SceneType::Playing => self.update_playing_scene()?,
                SceneType::Ended(outcome) => self.update_ended_scene(outcome)?,
            };
            if exit {
                break;
            }
            next_frame().await;
        }
        log::info!("scene loop finished");
        Ok(())
    }

    /// Applies a scene-level command, returns true if exit is requested.
    ///
    /// Help toggles the overlay on every scene; Start begins a fresh run.
    fn handle_command(&mut self, command: Option<PlayerInput>) -> SkirmishResult<bool> {
        match command {
            Some(PlayerInput::Quit) => return Ok(true),
            Some(PlayerInput::Help) => self.display.ui.toggle_help(),
            Some(PlayerInput::Start) => self.start_run()?,
            None => {}
        }
        Ok(false)
    }

    /// Updates the title scene, returns true if exit is requested
    fn update_title_scene(&mut self) -> SkirmishResult<bool> {
        if self.handle_command(self.input_handler.get_command())? {
            return Ok(true);
        }
        if self.current_scene == SceneType::Title {
            self.display.ui.render_title_screen();
        }
        Ok(false)
    }

    /// Updates the playing scene, returns true if exit is requested
    fn update_playing_scene(&mut self) -> SkirmishResult<bool> {
        let command = self.input_handler.get_command();
        if self.handle_command(command)? {
            return Ok(true);
        }
        // A restart shows the fresh arena before the first step.
        if command == Some(PlayerInput::Start) {
            self.display.render_game(&self.game_state, self.camera);
            return Ok(false);
        }

        let input = self.input_handler.sample();
        let output = self.game_state.step(&input)?;
        if !output.message.is_empty() {
            self.display.add_message(output.message.clone());
        }
        self.camera = output.camera;
        self.current_scene = SceneType::for_run_state(output.run_state);

        self.display.render_game(&self.game_state, self.camera);
        Ok(false)
    }

    /// Updates the ending scene, returns true if exit is requested
    fn update_ended_scene(&mut self, outcome: Outcome) -> SkirmishResult<bool> {
        if self.handle_command(self.input_handler.get_command())? {
            return Ok(true);
        }
        if self.current_scene != SceneType::Ended(outcome) {
            return Ok(false);
        }

        self.display.render_game(&self.game_state, self.camera);
        self.display
            .ui
            .render_ending_screen(outcome, &self.game_state.world().player);
        Ok(false)
    }

    /// Resets the session and switches to gameplay.
    fn start_run(&mut self) -> SkirmishResult<()> {
        self.game_state.reset()?;
        self.camera = self.game_state.camera();
        self.display.clear_messages();
        self.current_scene = SceneType::Playing;
        Ok(())
    }
}
