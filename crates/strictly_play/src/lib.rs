//! Strictly Play - command-line referee for the strictly_tictactoe engine.
//!
//! The rules live in `strictly_tictactoe`; this crate sequences moves
//! (hardcoded, fully automatic, or loaded from a TOML playbook) and prints
//! the resulting boards.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod playbook;
mod referee;

pub use cli::{Cli, Command};
pub use playbook::{ConfigError, Playbook};
pub use referee::{Refereed, demo_moves, report, run_auto, run_demo, run_playbook};
