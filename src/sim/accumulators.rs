//! Running totals for a batch of games.
//!
//! Each worker fills a private `Accumulators` and folds it into the shared
//! one exactly once. Every field merges with integer addition or min/max, so
//! the fold order never changes the result.

use serde::{Deserialize, Serialize};

use crate::core::config::OverflowPolicy;
use crate::core::error::Result;
use crate::stats::WeightedHistogram;

/// Totals collected over many games of one configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accumulators {
    /// Completed games.
    pub games: u64,
    /// Sum of winner turn counts.
    pub total_turns: u64,
    /// Fewest turns any winner needed (`u32::MAX` until a game is recorded).
    pub min_turns: u32,
    /// Most turns any winner needed, unclamped.
    pub max_turns: u32,
    /// Winner turn counts that were clamped into the last bucket.
    pub clamped_turns: u64,
    /// Capture counts that were clamped into the last bucket.
    pub clamped_captures: u64,
    /// Winner turn counts.
    pub turns: WeightedHistogram,
    /// Final capture count of every player in every game.
    pub captures: WeightedHistogram,
    /// Landings per board index.
    pub popularity: Vec<u64>,
}

impl Accumulators {
    /// Empty totals for a histogram bound and board size.
    #[must_use]
    pub fn new(give_up_bound: u32, squares: usize) -> Self {
        Self {
            games: 0,
            total_turns: 0,
            min_turns: u32::MAX,
            max_turns: 0,
            clamped_turns: 0,
            clamped_captures: 0,
            turns: WeightedHistogram::new(give_up_bound),
            captures: WeightedHistogram::new(give_up_bound),
            popularity: vec![0; squares],
        }
    }

    /// Record the end of one game.
    ///
    /// Visits are counted separately, as they happen, through [`Self::visit`].
    /// Under [`OverflowPolicy::Fail`] every sample is checked before anything
    /// is recorded, so a rejected game leaves the totals unchanged.
    pub fn record_game<I>(&mut self, winner_turns: u32, captures: I, policy: OverflowPolicy) -> Result<()>
    where
        I: IntoIterator<Item = u32>,
        I::IntoIter: Clone,
    {
        let captures = captures.into_iter();
        if policy == OverflowPolicy::Fail {
            self.turns.check_bound(winner_turns)?;
            for captured in captures.clone() {
                self.captures.check_bound(captured)?;
            }
        }

        if self.turns.record(winner_turns, policy)? {
            self.clamped_turns += 1;
        }
        for captured in captures {
            if self.captures.record(captured, policy)? {
                self.clamped_captures += 1;
            }
        }
        self.games += 1;
        self.total_turns += u64::from(winner_turns);
        self.min_turns = self.min_turns.min(winner_turns);
        self.max_turns = self.max_turns.max(winner_turns);
        Ok(())
    }

    /// Count one landing on `square`.
    pub fn visit(&mut self, square: usize) {
        self.popularity[square] += 1;
    }

    /// Fold another set of totals into this one.
    pub fn merge(&mut self, other: &Self) {
        self.games += other.games;
        self.total_turns += other.total_turns;
        self.min_turns = self.min_turns.min(other.min_turns);
        self.max_turns = self.max_turns.max(other.max_turns);
        self.clamped_turns += other.clamped_turns;
        self.clamped_captures += other.clamped_captures;
        self.turns.merge(&other.turns);
        self.captures.merge(&other.captures);
        for (mine, theirs) in self.popularity.iter_mut().zip(&other.popularity) {
            *mine += theirs;
        }
    }

    /// Total landings across all squares.
    #[must_use]
    pub fn total_visits(&self) -> u64 {
        self.popularity.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SimError;

    #[test]
    fn test_record_game() {
        let mut acc = Accumulators::new(50, 5);
        acc.record_game(12, [0, 2, 1], OverflowPolicy::Clamp).unwrap();
        acc.record_game(20, [1, 0, 0], OverflowPolicy::Clamp).unwrap();

        assert_eq!(acc.games, 2);
        assert_eq!(acc.total_turns, 32);
        assert_eq!(acc.min_turns, 12);
        assert_eq!(acc.max_turns, 20);
        assert_eq!(acc.turns.total_weight(), 2);
        assert_eq!(acc.captures.total_weight(), 6);
        assert_eq!(acc.captures.weight(0), 3);
    }

    #[test]
    fn test_clamped_turns_are_counted() {
        let mut acc = Accumulators::new(10, 3);
        acc.record_game(15, [0], OverflowPolicy::Clamp).unwrap();
        assert_eq!(acc.clamped_turns, 1);
        assert_eq!(acc.max_turns, 15);
        assert_eq!(acc.turns.weight(10), 1);
    }

    #[test]
    fn test_fail_policy_leaves_totals_untouched() {
        let mut acc = Accumulators::new(10, 3);
        let err = acc.record_game(15, [0], OverflowPolicy::Fail).unwrap_err();
        assert!(matches!(err, SimError::BoundExceeded { value: 15, bound: 10 }));
        assert_eq!(acc.games, 0);
        assert_eq!(acc.total_turns, 0);
    }

    #[test]
    fn test_fail_on_late_capture_records_nothing() {
        let mut acc = Accumulators::new(10, 3);
        let err = acc.record_game(5, [0, 11], OverflowPolicy::Fail).unwrap_err();
        assert!(matches!(err, SimError::BoundExceeded { value: 11, bound: 10 }));
        assert_eq!(acc.games, 0);
        assert_eq!(acc.turns.total_weight(), 0);
        assert_eq!(acc.captures.total_weight(), 0);
        assert_eq!(acc, Accumulators::new(10, 3));
    }

    #[test]
    fn test_clamped_captures_are_counted() {
        let mut acc = Accumulators::new(2, 3);
        acc.record_game(1, [5, 0], OverflowPolicy::Clamp).unwrap();
        assert_eq!(acc.clamped_captures, 1);
        assert_eq!(acc.clamped_turns, 0);
        assert_eq!(acc.captures.weight(2), 1);
    }

    #[test]
    fn test_merge_is_order_independent() {
        let mut a = Accumulators::new(30, 4);
        a.record_game(8, [0, 1], OverflowPolicy::Clamp).unwrap();
        a.visit(1);
        a.visit(3);

        let mut b = Accumulators::new(30, 4);
        b.record_game(5, [2, 0], OverflowPolicy::Clamp).unwrap();
        b.visit(3);

        let mut ab = Accumulators::new(30, 4);
        ab.merge(&a);
        ab.merge(&b);

        let mut ba = Accumulators::new(30, 4);
        ba.merge(&b);
        ba.merge(&a);

        assert_eq!(ab, ba);
        assert_eq!(ab.games, 2);
        assert_eq!(ab.min_turns, 5);
        assert_eq!(ab.max_turns, 8);
        assert_eq!(ab.popularity, vec![0, 1, 0, 2]);
        assert_eq!(ab.total_visits(), 3);
    }

    #[test]
    fn test_merging_empty_keeps_sentinel() {
        let mut acc = Accumulators::new(10, 2);
        acc.merge(&Accumulators::new(10, 2));
        assert_eq!(acc.min_turns, u32::MAX);
        assert_eq!(acc.games, 0);
    }
}
