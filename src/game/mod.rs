//! Game rules: one playthrough from start to finish.

pub mod engine;

pub use engine::{GameEngine, GameResult, PlayerState};
