//! Per-configuration results.

use serde::{Deserialize, Serialize};

use crate::stats::{rank_popularity, PopularityEntry, StatSummary, WeightedHistogram};

use super::accumulators::Accumulators;

/// Merged results for one player count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrialSummary {
    /// Players per game.
    pub players: usize,
    /// Games played.
    pub total_games: u64,
    /// Sum of winner turn counts.
    pub total_turns: u64,
    /// Fewest winner turns seen, unclamped (0 if no games).
    pub min_turns: u32,
    /// Most winner turns seen, unclamped.
    pub max_turns: u32,
    /// Games whose winner turn count was clamped into the last bucket.
    pub clamped_turns: u64,
    /// Player capture counts clamped into the last bucket.
    pub clamped_captures: u64,
    /// Winner turn distribution.
    pub turns: StatSummary,
    /// Per-player capture distribution.
    pub captures: StatSummary,
    /// Squares by landing count, busiest first.
    pub popular: Vec<PopularityEntry>,
    /// Total landings recorded.
    pub total_visits: u64,
    /// Raw winner turn histogram.
    pub turn_histogram: WeightedHistogram,
    /// Raw capture histogram.
    pub capture_histogram: WeightedHistogram,
    /// Wall-clock time for the batch.
    pub elapsed_secs: f64,
}

impl TrialSummary {
    /// Summarize merged totals.
    #[must_use]
    pub fn from_accumulators(players: usize, totals: Accumulators, elapsed_secs: f64) -> Self {
        let min_turns = if totals.games == 0 { 0 } else { totals.min_turns };

        Self {
            players,
            total_games: totals.games,
            total_turns: totals.total_turns,
            min_turns,
            max_turns: totals.max_turns,
            clamped_turns: totals.clamped_turns,
            clamped_captures: totals.clamped_captures,
            turns: StatSummary::from_histogram(&totals.turns),
            captures: StatSummary::from_histogram(&totals.captures),
            popular: rank_popularity(&totals.popularity),
            total_visits: totals.total_visits(),
            turn_histogram: totals.turns,
            capture_histogram: totals.captures,
            elapsed_secs,
        }
    }

    /// Exact mean winner turns from the running sum, unaffected by clamping.
    #[must_use]
    pub fn mean_turns(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.total_games as f64
        }
    }

    /// Games per second.
    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        if self.elapsed_secs <= 0.0 {
            0.0
        } else {
            self.total_games as f64 / self.elapsed_secs
        }
    }
}
