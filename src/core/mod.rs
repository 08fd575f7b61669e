//! Core building blocks: players, dice, configuration, errors.
//!
//! Nothing in here knows the board rules; the `game` and `sim` modules are
//! built on top of these types.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{OverflowPolicy, SimulationConfig, DEFAULT_GIVE_UP_BOUND, DEFAULT_TRIAL_BUDGET};
pub use error::{Result, SimError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{Die, GameRng, RollSource, ScriptedRolls};
