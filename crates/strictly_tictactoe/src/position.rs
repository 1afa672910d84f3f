//! Board coordinates.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells along each side of the board.
pub const SIDE: usize = 3;

/// A `(column, row)` coordinate, origin at the upper-left cell.
///
/// Any coordinates can be represented; board operations reject the ones that
/// fall outside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Position {
    /// Column, left to right.
    pub x: usize,
    /// Row, top to bottom.
    pub y: usize,
}

impl Position {
    /// The center cell.
    pub const CENTER: Position = Position { x: 1, y: 1 };

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { x: 0, y: 0 },
        Position { x: 1, y: 0 },
        Position { x: 2, y: 0 },
        Position { x: 0, y: 1 },
        Position { x: 1, y: 1 },
        Position { x: 2, y: 1 },
        Position { x: 0, y: 2 },
        Position { x: 1, y: 2 },
        Position { x: 2, y: 2 },
    ];

    /// Returns true if both coordinates lie on the board.
    pub fn in_bounds(self) -> bool {
        self.x < SIDE && self.y < SIDE
    }

    /// Converts to a cell index (`x + y * 3`), or `None` when off the board.
    #[instrument]
    pub fn to_index(self) -> Option<usize> {
        self.in_bounds().then_some(self.x + self.y * SIDE)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), Some(i));
        }
    }

    #[test]
    fn test_out_of_bounds_has_no_index() {
        assert_eq!(Position::new(3, 0).to_index(), None);
        assert_eq!(Position::new(0, 3).to_index(), None);
        assert!(!Position::new(7, 7).in_bounds());
    }

    #[test]
    fn test_center() {
        assert_eq!(Position::CENTER.to_index(), Some(4));
    }
}
