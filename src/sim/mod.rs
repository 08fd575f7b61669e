//! Batch simulation: worker pool, per-worker totals, and merged summaries.

pub mod accumulators;
pub mod pool;
pub mod summary;

pub use accumulators::Accumulators;
pub use pool::WorkerPool;
pub use summary::TrialSummary;
