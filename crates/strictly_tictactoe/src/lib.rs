//! Strictly Tic-Tac-Toe - a pure rules engine for 3x3 tic-tac-toe.
//!
//! Every value in this crate is immutable. Making a move never changes the
//! board or game it was made on; it returns a brand-new value instead, so
//! keeping old values around is all it takes to undo or replay a game.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of optional marks with occupancy and win queries
//! - **Rules**: the fixed win-line table and winner detection
//! - **Game**: a board paired with its cached winner, plus move operations
//! - **History**: the sequence of games produced by a list of moves
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, Mark, Position};
//!
//! # fn example() -> Result<(), strictly_tictactoe::RulesError> {
//! let game = Game::new()
//!     .make_auto_move(Mark::X, 0)?
//!     .make_explicit_move(Position::new(0, 0), Mark::O)?;
//!
//! assert!(!game.has_winner());
//! println!("{}", game.board());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod game;
mod history;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveKind};
pub use board::Board;
pub use error::{RulesError, RulesErrorKind, RulesResult};
pub use game::Game;
pub use history::GameHistory;
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, check_winner};
pub use types::{GameStatus, Mark};
