//! Simulation configuration.
//!
//! A `SimulationConfig` describes one batch run: which player counts to
//! evaluate, how many games to spend on them, the die, the histogram domain,
//! and how many worker threads to start. Everything is checked up front by
//! [`SimulationConfig::validate`] so no worker ever starts on a bad config.

use serde::{Deserialize, Serialize};

use super::error::{Result, SimError};

/// Default overall sample budget shared across configurations (2^20).
pub const DEFAULT_TRIAL_BUDGET: u64 = 1 << 20;

/// Default histogram domain size.
pub const DEFAULT_GIVE_UP_BOUND: u32 = 200;

/// What to do with a sample larger than the histogram domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Record the sample in the last bucket and count it as clamped.
    #[default]
    Clamp,
    /// Abort the run with `SimError::BoundExceeded`.
    Fail,
}

/// Configuration for a batch of simulations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Overall game budget. Each player-count configuration gets
    /// `total_trial_budget / player_count` games.
    pub total_trial_budget: u64,

    /// Largest histogram bucket. Turn and capture histograms cover
    /// `0..=give_up_bound`.
    pub give_up_bound: u32,

    /// Player counts to evaluate, in report order.
    pub player_counts: Vec<usize>,

    /// Workers per hardware thread.
    pub worker_multiplier: usize,

    /// Explicit worker count. Overrides `worker_multiplier` when set.
    pub workers: Option<usize>,

    /// Faces on the die.
    pub die_sides: u32,

    /// Base seed for reproducible runs. `None` seeds every worker from OS entropy.
    pub seed: Option<u64>,

    /// Handling of samples beyond `give_up_bound`.
    pub overflow: OverflowPolicy,

    /// Rows in the popularity table of the report.
    pub top_squares: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            total_trial_budget: DEFAULT_TRIAL_BUDGET,
            give_up_bound: DEFAULT_GIVE_UP_BOUND,
            player_counts: vec![1, 4, 16, 64, 256],
            worker_multiplier: 2,
            workers: None,
            die_sides: 6,
            seed: None,
            overflow: OverflowPolicy::Clamp,
            top_squares: 20,
        }
    }
}

impl SimulationConfig {
    /// Create a config with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overall game budget.
    #[must_use]
    pub fn with_trial_budget(mut self, budget: u64) -> Self {
        self.total_trial_budget = budget;
        self
    }

    /// Set the histogram domain bound.
    #[must_use]
    pub fn with_give_up_bound(mut self, bound: u32) -> Self {
        self.give_up_bound = bound;
        self
    }

    /// Set the player counts to evaluate.
    #[must_use]
    pub fn with_player_counts(mut self, counts: impl Into<Vec<usize>>) -> Self {
        self.player_counts = counts.into();
        self
    }

    /// Set workers per hardware thread.
    #[must_use]
    pub fn with_worker_multiplier(mut self, multiplier: usize) -> Self {
        self.worker_multiplier = multiplier;
        self
    }

    /// Pin the worker count, ignoring hardware parallelism.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Set the number of die faces.
    #[must_use]
    pub fn with_die_sides(mut self, sides: u32) -> Self {
        self.die_sides = sides;
        self
    }

    /// Seed every worker deterministically from `seed`.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the overflow policy.
    #[must_use]
    pub fn with_overflow(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }

    /// Set the number of popularity rows to report.
    #[must_use]
    pub fn with_top_squares(mut self, top: usize) -> Self {
        self.top_squares = top;
        self
    }

    /// Check every field. Called before any worker starts.
    pub fn validate(&self) -> Result<()> {
        if self.player_counts.is_empty() {
            return Err(SimError::NoConfigurations);
        }
        if let Some(&bad) = self.player_counts.iter().find(|&&c| c == 0) {
            return Err(SimError::InvalidPlayerCount(bad));
        }
        if self.die_sides == 0 {
            return Err(SimError::InvalidDieSides(self.die_sides));
        }
        if self.give_up_bound == 0 {
            return Err(SimError::InvalidGiveUpBound(self.give_up_bound));
        }
        if self.worker_multiplier == 0 {
            return Err(SimError::InvalidWorkerMultiplier(self.worker_multiplier));
        }
        if self.workers == Some(0) {
            return Err(SimError::InvalidWorkerMultiplier(0));
        }
        Ok(())
    }

    /// Games to play for one player-count configuration.
    ///
    /// The budget is split so that every configuration plays roughly the same
    /// number of player-games. Always at least one.
    #[must_use]
    pub fn trials_for(&self, player_count: usize) -> u64 {
        (self.total_trial_budget / player_count.max(1) as u64).max(1)
    }

    /// Worker threads to start: the explicit count if set, otherwise
    /// hardware parallelism times the multiplier.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        if let Some(workers) = self.workers {
            return workers;
        }
        let hardware = std::thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(1);
        (hardware * self.worker_multiplier).max(1)
    }
}
