//! Game values and move application.

use super::error::{RulesErrorKind, RulesResult};
use super::{Board, GameStatus, Mark, Move, MoveKind, Position};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A board paired with its winner.
///
/// The winner is computed once, when the game value is built from its board,
/// and never recomputed. Move operations return a new game; the receiver is
/// never modified, so a failed move cannot corrupt it.
///
/// Serializes as its board; the winner is recomputed when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Board", into = "Board")]
pub struct Game {
    board: Board,
    winner: Option<Mark>,
}

impl Game {
    /// Creates a new game with an empty board and no winner.
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Builds a game around `board`, caching its winner.
    #[instrument(skip(board))]
    pub fn from_board(board: Board) -> Self {
        let winner = board.check_for_winner();
        Self { board, winner }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Checks if some mark has completed a line.
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns the winning mark.
    ///
    /// # Errors
    ///
    /// Returns `NoWinnerYet` if nobody has completed a line.
    #[track_caller]
    pub fn winner(&self) -> RulesResult<Mark> {
        match self.winner {
            Some(mark) => Ok(mark),
            None => Err(RulesErrorKind::NoWinnerYet.into()),
        }
    }

    /// Classifies the game as in progress, won, or drawn.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(mark) => GameStatus::Won(mark),
            None if self.board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Places `mark` at `pos` and returns the resulting game.
    ///
    /// Only the board's own checks apply; playing on after a win is not
    /// rejected here.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` or `CellOccupied` from the board.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn make_explicit_move(&self, pos: Position, mark: Mark) -> RulesResult<Game> {
        let board = self.board.mark_cell_with(pos, mark)?;
        let game = Game::from_board(board);
        if let Some(winner) = game.winner {
            debug!(%winner, "Line completed");
        }
        Ok(game)
    }

    /// Lets the engine choose a cell for `mark` and returns the resulting game.
    ///
    /// The center is always taken first when empty. Otherwise one of the open
    /// cells is picked uniformly with a generator seeded from `seed`, so the
    /// same seed on the same board always picks the same cell.
    ///
    /// # Errors
    ///
    /// Returns `GameAlreadyWon` if the game has a winner and `NoOpenCells` if
    /// the board is full.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn make_auto_move(&self, mark: Mark, seed: u64) -> RulesResult<Game> {
        if self.has_winner() {
            return Err(RulesErrorKind::GameAlreadyWon.into());
        }

        let pos = self.choose_auto_cell(seed)?;
        debug!(%pos, "Auto move selected");
        self.make_explicit_move(pos, mark)
    }

    /// Applies a move value.
    #[track_caller]
    pub fn apply(&self, mv: Move) -> RulesResult<Game> {
        match mv.kind {
            MoveKind::Explicit(pos) => self.make_explicit_move(pos, mv.mark),
            MoveKind::Auto { seed } => self.make_auto_move(mv.mark, seed),
        }
    }

    #[track_caller]
    fn choose_auto_cell(&self, seed: u64) -> RulesResult<Position> {
        if self.board.contents_at(Position::CENTER).is_none() {
            return Ok(Position::CENTER);
        }

        let open = self.board.open_cells();
        if open.is_empty() {
            return Err(RulesErrorKind::NoOpenCells.into());
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        // Sample in u64 so the pick does not depend on the width of usize.
        let index = rng.random_range(0..open.len() as u64) as usize;
        Ok(open[index])
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Board> for Game {
    fn from(board: Board) -> Self {
        Self::from_board(board)
    }
}

impl From<Game> for Board {
    fn from(game: Game) -> Self {
        game.board
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.board, f)
    }
}
