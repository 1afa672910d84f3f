//! Game history for undo and replay.

use super::error::RulesResult;
use super::{Game, Move};
use tracing::{debug, instrument};

/// Every game value produced since a fresh game, with the moves between them.
///
/// `games()[i + 1]` is `games()[i]` with `moves()[i]` applied. The fresh game
/// at index 0 is never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    games: Vec<Game>,
    moves: Vec<Move>,
}

impl GameHistory {
    /// Creates a history holding only a fresh game.
    pub fn new() -> Self {
        Self {
            games: vec![Game::new()],
            moves: Vec::new(),
        }
    }

    /// Builds a history by applying `moves` in order to a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first rules violation encountered.
    #[instrument(skip(moves))]
    pub fn replay(moves: impl IntoIterator<Item = Move>) -> RulesResult<Self> {
        let mut history = Self::new();
        for mv in moves {
            history.play(mv)?;
        }
        Ok(history)
    }

    /// Returns the latest game.
    pub fn current(&self) -> &Game {
        // `games` always holds the fresh game.
        &self.games[self.games.len() - 1]
    }

    /// Applies `mv` to the latest game and records the result.
    ///
    /// # Errors
    ///
    /// Returns the rules violation; the history is left unchanged.
    #[instrument(skip(self), fields(turn = self.moves.len()))]
    pub fn play(&mut self, mv: Move) -> RulesResult<&Game> {
        let next = self.current().apply(mv)?;
        debug!(%mv, "Move recorded");
        self.games.push(next);
        self.moves.push(mv);
        Ok(self.current())
    }

    /// Removes and returns the latest game, or `None` if only the fresh game
    /// remains.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Option<Game> {
        if self.moves.is_empty() {
            return None;
        }
        self.moves.pop();
        self.games.pop()
    }

    /// Moves applied so far.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Every game value, starting with the fresh game.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Number of moves applied.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Checks if no moves have been applied.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
