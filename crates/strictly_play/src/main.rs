//! Strictly Play - Unified CLI
//!
//! Referees tic-tac-toe games against the rules engine.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_play::{Cli, Command, Playbook, report, run_auto, run_demo, run_playbook};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Demo { seed_base } => demo(seed_base),
        Command::Auto { seed } => auto(seed),
        Command::Play { playbook } => play(playbook),
    }
}

/// Play the reference opening
#[instrument]
fn demo(seed_base: u64) -> Result<()> {
    info!("Starting demo game");
    let refereed = run_demo(seed_base);

    if let Some((mv, err)) = &refereed.rejected {
        println!("Move {} rejected: {}\n", mv, err);
    }
    println!("{}", report(refereed.history.current()));
    Ok(())
}

/// Play a fully automatic game
#[instrument]
fn auto(seed: u64) -> Result<()> {
    info!("Starting auto game");
    let history = run_auto(seed)?;

    for (mv, game) in history.moves().iter().zip(&history.games()[1..]) {
        println!("{}\n{}\n", mv, game.board());
    }
    println!("{}", report(history.current()));
    Ok(())
}

/// Play the moves from a playbook file
#[instrument]
fn play(path: std::path::PathBuf) -> Result<()> {
    let playbook = Playbook::from_file(&path)?;
    if let Some(name) = playbook.name() {
        println!("{}\n", name);
    }

    let history = run_playbook(&playbook)?;
    println!("{}", report(history.current()));
    Ok(())
}
