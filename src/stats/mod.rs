//! Statistics: weighted histograms and the summaries derived from them.
//!
//! Workers never keep raw samples. Every distribution is an integer-weighted
//! histogram, and percentiles, mean, and deviation are read off it after the
//! merge.

pub mod histogram;
pub mod summary;

pub use histogram::WeightedHistogram;
pub use summary::{rank_popularity, PopularityEntry, StatSummary};
