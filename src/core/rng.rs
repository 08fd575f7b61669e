//! Seedable dice for the simulation workers.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical roll sequence
//! - **Forkable**: Derive independent per-worker streams from one seed
//! - **Entropy by default**: Unseeded runs draw their seed from the OS
//!
//! ## Usage
//!
//! ```
//! use nellie_sim::core::{Die, RollSource};
//!
//! let mut die = Die::seeded(6, 42);
//! let roll = die.roll();
//! assert!((1..=6).contains(&roll));
//! ```

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::error::{Result, SimError};

/// Something that produces die rolls in `[1, sides]`.
///
/// Every worker owns its own instance; implementations are never shared.
pub trait RollSource {
    /// Roll once.
    fn roll(&mut self) -> u32;
}

/// Deterministic RNG with forking for per-worker streams.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system's entropy source.
    pub fn from_entropy() -> Result<Self> {
        let mut bytes = [0u8; 8];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self::new(u64::from_le_bytes(bytes)))
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[1, sides]`.
    pub fn roll(&mut self, sides: u32) -> u32 {
        self.inner.gen_range(1..=sides)
    }
}

/// An n-sided die backed by a `GameRng`.
#[derive(Clone, Debug)]
pub struct Die {
    sides: u32,
    rng: GameRng,
}

impl Die {
    /// Create a die from an existing RNG stream.
    ///
    /// `sides` must be at least 1; `SimulationConfig::validate` checks this
    /// before any worker builds a die.
    #[must_use]
    pub fn new(sides: u32, rng: GameRng) -> Self {
        debug_assert!(sides >= 1, "die needs at least one side");
        Self { sides, rng }
    }

    /// Create a die with an explicit seed, for reproducible runs.
    #[must_use]
    pub fn seeded(sides: u32, seed: u64) -> Self {
        Self::new(sides, GameRng::new(seed))
    }

    /// Create a die seeded from OS entropy.
    pub fn from_entropy(sides: u32) -> Result<Self> {
        if sides == 0 {
            return Err(SimError::InvalidDieSides(sides));
        }
        Ok(Self::new(sides, GameRng::from_entropy()?))
    }

    /// Number of faces.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }
}

impl RollSource for Die {
    fn roll(&mut self) -> u32 {
        self.rng.roll(self.sides)
    }
}

/// A fixed roll sequence, replayed in order and then cycled.
///
/// Used to force specific game situations in tests.
#[derive(Clone, Debug)]
pub struct ScriptedRolls {
    rolls: Vec<u32>,
    cursor: usize,
}

impl ScriptedRolls {
    /// Create a scripted source. Panics if `rolls` is empty or holds a zero.
    pub fn new(rolls: impl Into<Vec<u32>>) -> Self {
        let rolls = rolls.into();
        assert!(!rolls.is_empty(), "Scripted rolls must not be empty");
        assert!(rolls.iter().all(|&r| r >= 1), "Rolls start at 1");
        Self { rolls, cursor: 0 }
    }

    /// How many rolls have been consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self) -> u32 {
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut die1 = Die::seeded(6, 42);
        let mut die2 = Die::seeded(6, 42);

        for _ in 0..100 {
            assert_eq!(die1.roll(), die2.roll());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut die1 = Die::seeded(6, 1);
        let mut die2 = Die::seeded(6, 2);

        let seq1: Vec<_> = (0..20).map(|_| die1.roll()).collect();
        let seq2: Vec<_> = (0..20).map(|_| die2.roll()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_rolls_in_range() {
        let mut die = Die::seeded(6, 7);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            let roll = die.roll();
            assert!((1..=6).contains(&roll));
            seen[roll as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s), "every face should come up");
    }

    #[test]
    fn test_one_sided_die() {
        let mut die = Die::seeded(1, 3);
        assert!((0..10).all(|_| die.roll() == 1));
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.roll(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.roll(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let a = rng1.fork();
        let b = rng2.fork();
        assert_eq!(a.seed(), b.seed());

        let c = rng1.fork();
        assert_ne!(a.seed(), c.seed());
    }

    #[test]
    fn test_from_entropy() {
        let die = Die::from_entropy(6).unwrap();
        assert_eq!(die.sides(), 6);
        assert!(matches!(Die::from_entropy(0), Err(SimError::InvalidDieSides(0))));
    }

    #[test]
    fn test_scripted_rolls_cycle() {
        let mut rolls = ScriptedRolls::new(vec![1, 2, 3]);
        let seq: Vec<_> = (0..7).map(|_| rolls.roll()).collect();
        assert_eq!(seq, vec![1, 2, 3, 1, 2, 3, 1]);
        assert_eq!(rolls.consumed(), 7);
    }

    #[test]
    #[should_panic(expected = "Scripted rolls must not be empty")]
    fn test_scripted_rolls_empty() {
        ScriptedRolls::new(Vec::new());
    }
}
