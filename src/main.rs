//! # Skirmish Main Entry Point
//!
//! Parses arguments, sets up logging and hands control to the scene loop.

use clap::Parser;
use macroquad::prelude::*;
use skirmish::{
    window_conf_for, GameConfig, GameState, InputHandler, SceneManager, SkirmishResult,
};
use std::path::PathBuf;

/// Command line arguments for Skirmish.
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "A small real-time top-down action game")]
#[command(version)]
struct Args {
    /// JSON file overriding the default game configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Sizes the window from the same configuration the session will load.
///
/// Runs before logging is set up; a bad config file falls back to the
/// defaults here and is reported by `run_game`.
fn window_conf() -> Conf {
    let config = load_config(&Args::parse()).unwrap_or_default();
    window_conf_for(&config)
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    log::info!("Starting Skirmish v{}", skirmish::VERSION);

    if let Err(e) = run_game(&args).await {
        log::error!("Game exited with error: {}", e);
        std::process::exit(1);
    }
}

/// Installs `env_logger`, with `RUST_LOG` taking precedence over `log_level`.
fn initialize_logging(log_level: &str) {
    let env = env_logger::Env::default().default_filter_or(log_level);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        eprintln!("logger was already initialised");
    }
}

/// Configuration from `--config`, or the defaults.
fn load_config(args: &Args) -> SkirmishResult<GameConfig> {
    match &args.config {
        Some(path) => GameConfig::load_from_file(path),
        None => Ok(GameConfig::default()),
    }
}

/// Loads configuration, builds the session and runs the scene loop.
async fn run_game(args: &Args) -> SkirmishResult<()> {
    if let Some(path) = &args.config {
        log::info!("Loading configuration from {}", path.display());
    }
    let config = load_config(args)?;

    let game_state = GameState::new(config)?;
    let mut scenes = SceneManager::new(game_state, InputHandler::new());
    scenes.run().await
}
