//! Tests for undo and replay over game values.

use strictly_tictactoe::{Game, GameHistory, Mark, Move, Position, RulesErrorKind};

fn opening() -> Vec<Move> {
    vec![
        Move::auto(Mark::X, 0),
        Move::explicit(Mark::O, Position::new(0, 0)),
        Move::explicit(Mark::X, Position::new(2, 2)),
    ]
}

#[test]
fn test_new_history_holds_fresh_game() {
    let history = GameHistory::new();
    assert!(history.is_empty());
    assert_eq!(history.games(), &[Game::new()]);
    assert_eq!(*history.current(), Game::new());
}

#[test]
fn test_replay_matches_direct_play() {
    let history = GameHistory::replay(opening()).unwrap();

    let direct = opening()
        .into_iter()
        .try_fold(Game::new(), |game, mv| game.apply(mv))
        .unwrap();

    assert_eq!(history.len(), 3);
    assert_eq!(*history.current(), direct);
    assert_eq!(history.moves(), opening().as_slice());
}

#[test]
fn test_earlier_games_are_preserved() {
    let history = GameHistory::replay(opening()).unwrap();
    let games = history.games();

    assert_eq!(games.len(), 4);
    for (i, mv) in history.moves().iter().enumerate() {
        assert_eq!(games[i].apply(*mv).unwrap(), games[i + 1]);
        assert_eq!(games[i].board().open_cells().len(), 9 - i);
    }
}

#[test]
fn test_undo_restores_previous_game() {
    let mut history = GameHistory::replay(opening()).unwrap();
    let before_last = history.games()[2];

    let undone = history.undo().unwrap();
    assert_eq!(undone.board().cell_contents(Position::new(2, 2)).unwrap(), Some(Mark::X));
    assert_eq!(*history.current(), before_last);
    assert_eq!(history.len(), 2);
}

#[test]
fn test_undo_never_removes_fresh_game() {
    let mut history = GameHistory::new();
    history.play(Move::auto(Mark::X, 1)).unwrap();

    assert!(history.undo().is_some());
    assert!(history.undo().is_none());
    assert_eq!(*history.current(), Game::new());
}

#[test]
fn test_failed_play_leaves_history_unchanged() {
    let mut history = GameHistory::replay(opening()).unwrap();
    let snapshot = history.clone();

    let err = history
        .play(Move::explicit(Mark::O, Position::new(0, 0)))
        .unwrap_err();
    assert_eq!(err.kind(), RulesErrorKind::CellOccupied(Position::new(0, 0)));
    assert_eq!(history, snapshot);
}

#[test]
fn test_replay_stops_at_first_violation() {
    let moves = vec![
        Move::explicit(Mark::X, Position::new(1, 1)),
        Move::explicit(Mark::O, Position::new(5, 1)),
        Move::explicit(Mark::X, Position::new(0, 0)),
    ];
    let err = GameHistory::replay(moves).unwrap_err();
    assert_eq!(err.kind(), RulesErrorKind::OutOfBounds(Position::new(5, 1)));
}
