//! Win detection for tic-tac-toe.
//!
//! Rules are pure functions over a [`Board`], kept apart from board storage
//! so the table of winning lines can be inspected on its own.

use super::{Board, Mark, Position};
use tracing::instrument;

/// Three positions that win when owned by a single mark.
pub type WinLine = [Position; 3];

const fn at(x: usize, y: usize) -> Position {
    Position { x, y }
}

/// Every winning line, in evaluation order.
pub static WIN_LINES: [WinLine; 8] = [
    // Rows
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Columns
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(2, 0), at(1, 1), at(0, 2)],
];

/// Returns true if `mark` occupies every position of `line`.
fn owns_line(board: &Board, line: &WinLine, mark: Mark) -> bool {
    line.iter().all(|&pos| board.contents_at(pos) == Some(mark))
}

/// Checks if there is a winner on the board.
///
/// All of X's lines are checked before any of O's, so X is reported if both
/// marks somehow own a line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    Mark::all().find(|&mark| WIN_LINES.iter().any(|line| owns_line(board, line, mark)))
}
