//! Rules violation errors.

use super::Position;
use derive_more::{Display, Error};

/// Specific rules violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RulesErrorKind {
    /// A coordinate lies outside the 3x3 grid.
    #[display("Position {} is out of bounds", _0)]
    OutOfBounds(Position),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The winner was requested before anyone completed a line.
    #[display("No winner yet")]
    NoWinnerYet,

    /// An auto move was requested after the game was won.
    #[display("Game is already won")]
    GameAlreadyWon,

    /// An auto move was requested on a full board.
    #[display("No open cells remain")]
    NoOpenCells,
}

/// Rules error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Rules error: {} at {}:{}", kind, file, line)]
pub struct RulesError {
    /// What went wrong.
    pub kind: RulesErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RulesError {
    /// Creates a new rules error with caller location tracking.
    #[track_caller]
    pub fn new(kind: RulesErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the violation kind.
    pub fn kind(&self) -> RulesErrorKind {
        self.kind
    }
}

impl From<RulesErrorKind> for RulesError {
    #[track_caller]
    fn from(kind: RulesErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result alias for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;
