//! Board definition: an immutable, ordered track of squares.
//!
//! Index 0 is the start, the last index is the finish. A `Board` is built
//! once, validated, and then shared by reference with every worker.

mod nellie;
pub mod space;

pub use space::Space;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// An ordered, validated sequence of squares.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    spaces: Vec<Space>,
}

impl Board {
    /// Build a board, checking that it has a start and a finish and that
    /// every offset lands on the board.
    pub fn new(spaces: Vec<Space>) -> Result<Self> {
        if spaces.len() < 2 {
            return Err(SimError::InvalidBoard(format!(
                "need at least 2 squares, got {}",
                spaces.len()
            )));
        }
        let last = spaces.len() as i64 - 1;
        for (ix, space) in spaces.iter().enumerate() {
            let target = ix as i64 + i64::from(space.offset);
            if !(0..=last).contains(&target) {
                return Err(SimError::InvalidBoard(format!(
                    "square {} ({}) offsets to {}, outside 0..={}",
                    ix, space.name, target, last
                )));
            }
        }
        Ok(Self { spaces })
    }

    /// Build a board from `(name, offset, turns)` rows, numbering days from 1.
    pub fn from_rows(rows: &[(&str, i32, i32)]) -> Result<Self> {
        let spaces = rows
            .iter()
            .enumerate()
            .map(|(ix, &(name, offset, turns))| Space::new(name, offset, turns, ix as u32 + 1))
            .collect();
        Self::new(spaces)
    }

    /// The 74-square Nellie Bly board.
    #[must_use]
    pub fn nellie_bly() -> Self {
        let spaces = nellie::NELLIE_BLY
            .iter()
            .enumerate()
            .map(|(ix, &(name, offset, turns))| Space::new(name, offset, turns, ix as u32 + 1))
            .collect();
        Self { spaces }
    }

    /// Check that a player rolling a `sides`-faced die can always still
    /// finish, from every square they can come to rest on.
    ///
    /// Without this, a board whose offsets form a closed loop would never
    /// produce a winner.
    pub fn check_finish_reachable(&self, sides: u32) -> Result<()> {
        let n = self.len();
        let max_roll = (sides as usize).min(n);
        let resting = |from: usize, roll: usize| -> Option<usize> {
            let landing = from + roll;
            (landing < n).then(|| (landing as i64 + i64::from(self.spaces[landing].offset)) as usize)
        };

        let mut reached = vec![false; n];
        reached[0] = true;
        let mut frontier = vec![0];
        while let Some(from) = frontier.pop() {
            for roll in 1..=max_roll {
                if let Some(to) = resting(from, roll) {
                    if !reached[to] {
                        reached[to] = true;
                        frontier.push(to);
                    }
                }
            }
        }

        let mut can_finish = vec![false; n];
        can_finish[self.finish()] = true;
        let mut changed = true;
        while changed {
            changed = false;
            for from in 0..n {
                if !can_finish[from]
                    && (1..=max_roll).any(|roll| resting(from, roll).is_some_and(|to| can_finish[to]))
                {
                    can_finish[from] = true;
                    changed = true;
                }
            }
        }

        match (0..n).find(|&ix| reached[ix] && !can_finish[ix]) {
            Some(stuck) => Err(SimError::InvalidBoard(format!(
                "finish unreachable from square {} ({}) with a {}-sided die",
                stuck, self.spaces[stuck].name, sides
            ))),
            None => Ok(()),
        }
    }

    /// Number of squares, including start and finish.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Always false; a valid board has at least two squares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Index of the finish square.
    #[must_use]
    pub fn finish(&self) -> usize {
        self.spaces.len() - 1
    }

    /// Get a square by index.
    #[must_use]
    pub fn get(&self, ix: usize) -> Option<&Space> {
        self.spaces.get(ix)
    }

    /// All squares in track order.
    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }
}

impl std::ops::Index<usize> for Board {
    type Output = Space;

    fn index(&self, ix: usize) -> &Self::Output {
        &self.spaces[ix]
    }
}
