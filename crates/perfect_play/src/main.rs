//! Perfect Play - self-play CLI
//!
//! Runs alpha-beta tic-tac-toe agents against each other.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use perfect_play::{MatchConfig, run_selfplay, solve_openings};
use perfect_tictactoe::GameStatus;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();

    match cli.command {
        Command::Selfplay { first, no_pruning } => {
            let mut config = config;
            if let Some(first) = first {
                config = config.with_first_player(first);
            }
            if no_pruning {
                config = config.with_pruning(false);
            }
            selfplay(&config)
        }
        Command::Solve { first } => {
            let config = match first {
                Some(first) => config.with_first_player(first),
                None => config,
            };
            solve(&config)
        }
    }
}

/// Play one game and fail unless perfect play drew it.
fn selfplay(config: &MatchConfig) -> Result<()> {
    info!(first = %config.first_player(), pruning = config.pruning(), "Starting self-play");

    let status = run_selfplay(config)?;
    if status != GameStatus::Draw {
        warn!(%status, "Perfect play should always draw");
        bail!("Self-play ended with {status}, expected a draw");
    }

    info!(%status, "Self-play finished");
    Ok(())
}

/// Evaluate and log every opening.
fn solve(config: &MatchConfig) -> Result<()> {
    info!(first = %config.first_player(), "Solving openings");

    let reports = solve_openings(config)?;
    let drawn = reports.iter().filter(|r| r.reply.value() == 0).count();

    info!(openings = reports.len(), drawn, "All openings solved");
    Ok(())
}
