//! Immutable 3x3 board.

use super::error::{RulesErrorKind, RulesResult};
use super::{Mark, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Boards are values: [`Board::mark_cell_with`] returns a new board and
/// leaves the receiver untouched. Marks are only ever added, never removed
/// or overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order, indexed by `x + y * 3`.
    cells: [Option<Mark>; 9],
}

impl Board {
    /// Creates a board with every cell empty.
    pub fn new() -> Self {
        Self { cells: [None; 9] }
    }

    /// Returns every empty position in row-major order.
    ///
    /// The order is fixed so that seeded random selection over the result is
    /// reproducible.
    #[instrument(skip(self))]
    pub fn open_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.contents_at(pos).is_none())
            .collect()
    }

    /// Gets the contents of the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either coordinate is outside the grid.
    #[track_caller]
    pub fn cell_contents(&self, pos: Position) -> RulesResult<Option<Mark>> {
        let index = pos.to_index().ok_or(RulesErrorKind::OutOfBounds(pos))?;
        Ok(self.cells[index])
    }

    /// Checks if the cell at `pos` holds any mark.
    #[track_caller]
    pub fn is_cell_occupied(&self, pos: Position) -> RulesResult<bool> {
        Ok(self.cell_contents(pos)?.is_some())
    }

    /// Checks if the cell at `pos` holds `mark`.
    #[track_caller]
    pub fn is_cell_occupied_with(&self, pos: Position, mark: Mark) -> RulesResult<bool> {
        Ok(self.cell_contents(pos)? == Some(mark))
    }

    /// Returns a new board with `mark` placed at `pos`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for coordinates off the grid and `CellOccupied`
    /// if the cell already holds a mark.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn mark_cell_with(&self, pos: Position, mark: Mark) -> RulesResult<Board> {
        let index = pos.to_index().ok_or(RulesErrorKind::OutOfBounds(pos))?;
        if self.cells[index].is_some() {
            return Err(RulesErrorKind::CellOccupied(pos).into());
        }

        let mut cells = self.cells;
        cells[index] = Some(mark);
        debug!(%pos, %mark, "Cell marked");
        Ok(Board { cells })
    }

    /// Returns the mark owning a complete line, X first.
    pub fn check_for_winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Option<Mark>; 9] {
        &self.cells
    }

    /// Cell contents, treating off-board positions as empty.
    pub(crate) fn contents_at(&self, pos: Position) -> Option<Mark> {
        pos.to_index().and_then(|index| self.cells[index])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders three rows of `X`, `O`, or `_`, separated by newlines.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                f.write_str(cell.map_or("_", Mark::label))?;
            }
        }
        Ok(())
    }
}
