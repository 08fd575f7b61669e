//! # nellie-sim
//!
//! Monte Carlo simulator for the "Around the World with Nellie Bly" race
//! board game.
//!
//! ## Design Principles
//!
//! 1. **Immutable board**: The board is built and validated once, then
//!    shared by reference with every worker. No global state.
//!
//! 2. **N-Player First**: Games seat anywhere from 1 to hundreds of players.
//!    Every API takes `player_count` as context.
//!
//! 3. **Lock once per worker**: Workers keep private totals and fold them
//!    into the shared accumulators a single time, after their last game.
//!
//! ## Rules in brief
//!
//! Players take turns round-robin. A pending skip costs a turn without
//! rolling; otherwise the player rolls, moves, follows at most one offset,
//! captures opponents on the square they landed on, and applies the skip
//! directive of the square they end on. The first player to land exactly on
//! the last square wins.
//!
//! ## Modules
//!
//! - `core`: Player ids, dice, configuration, errors
//! - `board`: Squares and the validated board
//! - `game`: The single-game state machine
//! - `stats`: Weighted histograms, percentile summaries, popularity ranking
//! - `sim`: Worker pool and merged per-configuration summaries
//! - `report`: Plain-text tables

pub mod core;
pub mod board;
pub mod game;
pub mod stats;
pub mod sim;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    Die, GameRng, RollSource, ScriptedRolls,
    OverflowPolicy, SimulationConfig,
    Result, SimError,
};

pub use crate::board::{Board, Space};

pub use crate::game::{GameEngine, GameResult, PlayerState};

pub use crate::stats::{rank_popularity, PopularityEntry, StatSummary, WeightedHistogram};

pub use crate::sim::{Accumulators, TrialSummary, WorkerPool};
