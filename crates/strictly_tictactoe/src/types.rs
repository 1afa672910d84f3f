//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A player's mark.
///
/// Declaration order matters: iteration yields `X` before `O`, which is the
/// tie-break order used by winner detection.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Uppercase label used when rendering a board.
    pub fn label(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }

    /// Both marks, X first.
    pub fn all() -> impl Iterator<Item = Mark> {
        Mark::iter()
    }
}

/// Read-only classification of a game.
///
/// `Draw` is reported for a full board without a winner. It is a view over
/// the game, not a state the move operations enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Cells remain and nobody has completed a line.
    #[display("in progress")]
    InProgress,
    /// A line was completed by the given mark.
    #[display("{} won", _0)]
    Won(Mark),
    /// The board is full and nobody completed a line.
    #[display("draw")]
    Draw,
}
