//! Error type shared by every fallible operation in the crate.
//!
//! Only configuration problems are recoverable. Entropy failures and worker
//! panics abort the batch; a simulation run is always safe to restart.

use thiserror::Error;

/// Errors raised by board construction, configuration, and simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A game needs at least one player.
    #[error("player count must be at least 1 (got {0})")]
    InvalidPlayerCount(usize),

    /// A die needs at least one side.
    #[error("die must have at least 1 side (got {0})")]
    InvalidDieSides(u32),

    /// The histogram domain must contain at least one non-zero bucket.
    #[error("give-up bound must be at least 1 (got {0})")]
    InvalidGiveUpBound(u32),

    /// Worker multiplier of zero would start no workers.
    #[error("worker multiplier must be at least 1 (got {0})")]
    InvalidWorkerMultiplier(usize),

    /// Nothing to simulate.
    #[error("no player-count configurations given")]
    NoConfigurations,

    /// The board table is malformed.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// A sample fell outside the histogram domain under `OverflowPolicy::Fail`.
    #[error("sample {value} exceeds give-up bound {bound}")]
    BoundExceeded {
        /// The offending sample.
        value: u32,
        /// The configured histogram bound.
        bound: u32,
    },

    /// The OS entropy source could not seed a worker RNG.
    #[error("failed to seed from OS entropy: {0}")]
    Entropy(#[from] rand::Error),

    /// A worker thread panicked before folding its results.
    #[error("worker {0} panicked")]
    WorkerPanicked(usize),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SimError>;
