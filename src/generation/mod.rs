//! # Generation Module
//!
//! Builds the content a run starts from.
//!
//! Every run begins from the same fixed templates, so generation here is a
//! deterministic layout step followed by validation rather than a random
//! process. The [`Generator`] trait keeps the two halves separate so a
//! layout can be checked independently of how it was produced.

pub mod arena;

pub use arena::*;

use crate::{GameConfig, SkirmishResult};

/// Trait for content generators.
pub trait Generator<T> {
    /// Generates content for the given configuration.
    fn generate(&self, config: &GameConfig) -> SkirmishResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GameConfig) -> SkirmishResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}
