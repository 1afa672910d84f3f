//! First-class move values.
//!
//! A move records a player's intent independently of the game it is applied
//! to, so lists of moves can be stored, replayed, and loaded from files.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// How the target cell of a move is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// The caller names the cell.
    Explicit(Position),
    /// The engine picks the cell, center first, then seeded random.
    Auto {
        /// Seed for the random pick.
        seed: u64,
    },
}

/// A mark together with how its cell is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// How the target cell is chosen.
    pub kind: MoveKind,
}

impl Move {
    /// Creates an explicit move to `pos`.
    pub fn explicit(mark: Mark, pos: Position) -> Self {
        Self::new(mark, MoveKind::Explicit(pos))
    }

    /// Creates an auto move with the given seed.
    pub fn auto(mark: Mark, seed: u64) -> Self {
        Self::new(mark, MoveKind::Auto { seed })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            MoveKind::Explicit(pos) => write!(f, "{} -> {}", self.mark, pos),
            MoveKind::Auto { seed } => write!(f, "{} -> auto (seed {})", self.mark, seed),
        }
    }
}
