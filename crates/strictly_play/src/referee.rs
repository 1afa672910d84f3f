//! Drives games against the rules engine and reports the result.

use crate::Playbook;
use strictly_tictactoe::{
    Game, GameHistory, GameStatus, Mark, Move, Position, RulesError, RulesResult,
};
use tracing::{info, instrument, warn};

/// The reference opening: X, O, X, O auto moves, then X at the top-right.
pub fn demo_moves(seed_base: u64) -> Vec<Move> {
    vec![
        Move::auto(Mark::X, seed_base),
        Move::auto(Mark::O, seed_base.wrapping_add(1)),
        Move::auto(Mark::X, seed_base.wrapping_add(2)),
        Move::auto(Mark::O, seed_base.wrapping_add(3)),
        Move::explicit(Mark::X, Position::new(2, 0)),
    ]
}

/// Result of refereeing a move list that may stop early.
#[derive(Debug)]
pub struct Refereed {
    /// Games played up to the stopping point.
    pub history: GameHistory,
    /// The move the engine refused, if any, and why.
    pub rejected: Option<(Move, RulesError)>,
}

/// Plays the reference opening, stopping at the first refused move.
#[instrument]
pub fn run_demo(seed_base: u64) -> Refereed {
    let mut history = GameHistory::new();
    for mv in demo_moves(seed_base) {
        if let Err(e) = history.play(mv) {
            warn!(%mv, error = %e, "Demo move rejected");
            return Refereed {
                history,
                rejected: Some((mv, e)),
            };
        }
    }
    Refereed {
        history,
        rejected: None,
    }
}

/// Plays auto moves for both sides, X first, until the game is decided.
///
/// Move `n` (counting from zero) uses seed `seed + n`.
#[instrument]
pub fn run_auto(seed: u64) -> RulesResult<GameHistory> {
    let mut history = GameHistory::new();
    let mut mark = Mark::X;
    let mut next_seed = seed;
    while history.current().status() == GameStatus::InProgress {
        history.play(Move::auto(mark, next_seed))?;
        mark = mark.opponent();
        next_seed = next_seed.wrapping_add(1);
    }
    info!(status = %history.current().status(), moves = history.len(), "Auto game finished");
    Ok(history)
}

/// Applies every move in the playbook.
///
/// # Errors
///
/// Returns the first rules violation.
#[instrument(skip(playbook), fields(name = ?playbook.name()))]
pub fn run_playbook(playbook: &Playbook) -> RulesResult<GameHistory> {
    let history = GameHistory::replay(playbook.moves().iter().copied())?;
    info!(status = %history.current().status(), "Playbook finished");
    Ok(history)
}

/// Renders the board followed by the outcome line, if any.
pub fn report(game: &Game) -> String {
    match game.status() {
        GameStatus::Won(mark) => format!("{}\n\nPlayer {} won!", game.board(), mark),
        GameStatus::Draw => format!("{}\n\nDraw.", game.board()),
        GameStatus::InProgress => game.board().to_string(),
    }
}
