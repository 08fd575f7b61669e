//! Integer-weighted histograms over a bounded domain.

use serde::{Deserialize, Serialize};

use crate::core::config::OverflowPolicy;
use crate::core::error::{Result, SimError};

/// Occurrence weights for buckets `0..=bound`.
///
/// Weights are integers, so merging is exact and order-independent. The
/// total weight always equals the number of recorded samples.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedHistogram {
    weights: Vec<u64>,
}

impl WeightedHistogram {
    /// Create an empty histogram covering `0..=bound`.
    #[must_use]
    pub fn new(bound: u32) -> Self {
        Self {
            weights: vec![0; bound as usize + 1],
        }
    }

    /// Largest representable bucket.
    #[must_use]
    pub fn bound(&self) -> u32 {
        (self.weights.len() - 1) as u32
    }

    /// Record one sample.
    ///
    /// Samples above the bound are handled by `policy`: clamped into the last
    /// bucket (returns `Ok(true)`) or rejected with `SimError::BoundExceeded`.
    pub fn record(&mut self, value: u32, policy: OverflowPolicy) -> Result<bool> {
        let bound = self.bound();
        if value <= bound {
            self.weights[value as usize] += 1;
            return Ok(false);
        }
        match policy {
            OverflowPolicy::Clamp => {
                self.weights[bound as usize] += 1;
                Ok(true)
            }
            OverflowPolicy::Fail => Err(SimError::BoundExceeded { value, bound }),
        }
    }

    /// Check that `value` fits under the bound without recording it.
    pub fn check_bound(&self, value: u32) -> Result<()> {
        let bound = self.bound();
        if value > bound {
            return Err(SimError::BoundExceeded { value, bound });
        }
        Ok(())
    }

    /// Add `weight` to an in-range bucket.
    pub fn add(&mut self, value: u32, weight: u64) {
        self.weights[value as usize] += weight;
    }

    /// Fold another histogram into this one, bucket by bucket.
    pub fn merge(&mut self, other: &Self) {
        assert_eq!(
            self.weights.len(),
            other.weights.len(),
            "Cannot merge histograms with different bounds"
        );
        for (mine, theirs) in self.weights.iter_mut().zip(&other.weights) {
            *mine += theirs;
        }
    }

    /// Weight in one bucket (0 outside the domain).
    #[must_use]
    pub fn weight(&self, value: u32) -> u64 {
        self.weights.get(value as usize).copied().unwrap_or(0)
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.weights.iter().sum()
    }

    /// True if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.iter().all(|&w| w == 0)
    }

    /// Iterate over `(value, weight)` for populated buckets, ascending.
    pub fn populated(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter(|(_, &w)| w > 0)
            .map(|(v, &w)| (v as u32, w))
    }

    /// Lowest populated bucket.
    #[must_use]
    pub fn min_value(&self) -> Option<u32> {
        self.populated().next().map(|(v, _)| v)
    }

    /// Highest populated bucket.
    #[must_use]
    pub fn max_value(&self) -> Option<u32> {
        self.populated().last().map(|(v, _)| v)
    }

    /// Weighted empirical quantile: the smallest populated value whose
    /// cumulative weight reaches `fraction` of the total.
    #[must_use]
    pub fn quantile(&self, fraction: f64) -> Option<u32> {
        let target = fraction.clamp(0.0, 1.0) * self.total_weight() as f64;
        let mut cumulative = 0u64;
        let mut last = None;
        for (value, weight) in self.populated() {
            cumulative += weight;
            last = Some(value);
            if cumulative as f64 >= target {
                return last;
            }
        }
        last
    }

    /// Weighted mean and unbiased standard deviation.
    ///
    /// Returns `(0.0, 0.0)` when empty; the deviation is 0 for a single sample.
    #[must_use]
    pub fn mean_std_dev(&self) -> (f64, f64) {
        let total = self.total_weight() as f64;
        if total == 0.0 {
            return (0.0, 0.0);
        }
        let mean = self
            .populated()
            .map(|(v, w)| f64::from(v) * w as f64)
            .sum::<f64>()
            / total;
        if total <= 1.0 {
            return (mean, 0.0);
        }
        let squares: f64 = self
            .populated()
            .map(|(v, w)| {
                let d = f64::from(v) - mean;
                d * d * w as f64
            })
            .sum();
        (mean, (squares / (total - 1.0)).sqrt())
    }
}
