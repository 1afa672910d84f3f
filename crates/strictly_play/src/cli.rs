//! Command-line interface for strictly_play.

use clap::{Parser, Subcommand};

/// Strictly Play - referee scripted tic-tac-toe games
#[derive(Parser, Debug)]
#[command(name = "strictly_play")]
#[command(about = "Plays tic-tac-toe games against the strictly_tictactoe rules engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the reference opening: three auto moves each, then an explicit one
    Demo {
        /// Added to every auto-move seed
        #[arg(long, default_value = "0")]
        seed_base: u64,
    },

    /// Let the engine play both sides until someone wins or the board fills
    Auto {
        /// Seed for X's first move; later moves use the following seeds
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },

    /// Apply the moves listed in a TOML playbook
    Play {
        /// Path to the playbook file
        playbook: std::path::PathBuf,
    },
}
