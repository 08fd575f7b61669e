//! A single square on the board.

use serde::{Deserialize, Serialize};

/// One square of the race track.
///
/// `offset` moves a player who lands here, once. `turns` is a skip
/// directive: positive values cost the lander that many turns, negative
/// values cost every other player `|turns|` turns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    /// Display label.
    pub name: String,
    /// Signed shift applied once on landing.
    pub offset: i32,
    /// Signed skip directive.
    pub turns: i32,
    /// Ordinal shown in reports (1-based).
    pub day: u32,
}

impl Space {
    /// Create a new square.
    pub fn new(name: impl Into<String>, offset: i32, turns: i32, day: u32) -> Self {
        Self {
            name: name.into(),
            offset,
            turns,
            day,
        }
    }

    /// A square with no offset and no skip directive. Safe squares never
    /// trigger captures.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.offset == 0 && self.turns == 0
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Day {} ({})", self.day, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_safe() {
        assert!(Space::new("Fair Sailing", 0, 0, 7).is_safe());
        assert!(!Space::new("Clear", 3, 0, 2).is_safe());
        assert!(!Space::new("Amiens", 0, 1, 9).is_safe());
        assert!(!Space::new("Suez Canal", 0, -1, 13).is_safe());
    }

    #[test]
    fn test_display() {
        let space = Space::new("Colombo", 0, 0, 26);
        assert_eq!(format!("{}", space), "Day 26 (Colombo)");
    }
}
