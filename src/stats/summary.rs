//! Percentile summaries and square popularity rankings.

use serde::{Deserialize, Serialize};

use super::histogram::WeightedHistogram;

/// Distribution summary derived from a `WeightedHistogram`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    pub min: u32,
    pub p25: u32,
    pub p50: u32,
    pub p75: u32,
    pub p90: u32,
    pub p95: u32,
    pub p99: u32,
    pub max: u32,
    pub mean: f64,
    pub std_dev: f64,
}

impl StatSummary {
    /// Summarize a histogram. An empty histogram gives the all-zero summary.
    #[must_use]
    pub fn from_histogram(hist: &WeightedHistogram) -> Self {
        if hist.is_empty() {
            return Self::default();
        }
        let q = |fraction: f64| hist.quantile(fraction).unwrap_or_default();
        let (mean, std_dev) = hist.mean_std_dev();

        Self {
            min: hist.min_value().unwrap_or_default(),
            p25: q(0.25),
            p50: q(0.50),
            p75: q(0.75),
            p90: q(0.90),
            p95: q(0.95),
            p99: q(0.99),
            max: hist.max_value().unwrap_or_default(),
            mean,
            std_dev,
        }
    }

    /// The percentile columns in report order, with labels.
    #[must_use]
    pub fn percentiles(&self) -> [(&'static str, u32); 6] {
        [
            ("25th", self.p25),
            ("50th", self.p50),
            ("75th", self.p75),
            ("90th", self.p90),
            ("95th", self.p95),
            ("99th", self.p99),
        ]
    }
}

/// Visit count for one square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularityEntry {
    /// Board index.
    pub square: usize,
    /// Landings, including offset re-landings.
    pub count: u64,
}

/// Rank squares by visit count, busiest first.
///
/// Ties keep ascending square order so identical counts always rank the same way.
#[must_use]
pub fn rank_popularity(counts: &[u64]) -> Vec<PopularityEntry> {
    let mut ranked: Vec<_> = counts
        .iter()
        .enumerate()
        .map(|(square, &count)| PopularityEntry { square, count })
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}
