//! TOML playbooks: scripted move lists.
//!
//! ```toml
//! name = "corner opening"
//!
//! [[moves]]
//! mark = "X"
//! auto = { seed = 0 }
//!
//! [[moves]]
//! mark = "O"
//! at = { x = 2, y = 0 }
//! ```

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use strictly_tictactoe::{Mark, Move, Position};
use tracing::{debug, info, instrument};

/// A named list of moves loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Playbook {
    /// Optional display name.
    name: Option<String>,
    /// Moves in the order they are applied.
    moves: Vec<Move>,
}

/// On-disk shape of a playbook.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaybookFile {
    name: Option<String>,
    #[serde(default)]
    moves: Vec<PlaybookEntry>,
}

/// One `[[moves]]` table: a mark plus exactly one of `auto` or `at`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaybookEntry {
    mark: Mark,
    auto: Option<AutoSpec>,
    at: Option<Position>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AutoSpec {
    seed: u64,
}

impl PlaybookEntry {
    #[track_caller]
    fn into_move(self, index: usize) -> Result<Move, ConfigError> {
        match (self.auto, self.at) {
            (Some(auto), None) => Ok(Move::auto(self.mark, auto.seed)),
            (None, Some(pos)) => Ok(Move::explicit(self.mark, pos)),
            (Some(_), Some(_)) => Err(ConfigError::new(format!(
                "Move {} has both `auto` and `at`",
                index + 1
            ))),
            (None, None) => Err(ConfigError::new(format!(
                "Move {} needs either `auto` or `at`",
                index + 1
            ))),
        }
    }
}

impl Playbook {
    /// Creates a playbook from moves.
    pub fn new(name: Option<String>, moves: Vec<Move>) -> Self {
        Self { name, moves }
    }

    /// Parses a playbook from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: PlaybookFile = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse playbook: {}", e)))?;

        let moves = file
            .moves
            .into_iter()
            .enumerate()
            .map(|(i, entry)| entry.into_move(i))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = moves.len(), "Playbook parsed");
        Ok(Self::new(file.name, moves))
    }

    /// Loads a playbook from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading playbook from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read playbook file: {}", e)))?;

        let playbook = Self::parse(&content)?;
        info!(name = ?playbook.name, moves = playbook.moves.len(), "Playbook loaded");
        Ok(playbook)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
