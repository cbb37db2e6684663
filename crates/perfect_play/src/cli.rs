//! Command-line interface for perfect_play.

use clap::{Parser, Subcommand};
use perfect_tictactoe::Player;
use std::path::PathBuf;

/// Perfect Play - alpha-beta tic-tac-toe self-play
#[derive(Parser, Debug)]
#[command(name = "perfect_play")]
#[command(about = "Run perfect-play tic-tac-toe agents against each other", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML match config (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one agent-vs-agent game and fail unless it is drawn
    Selfplay {
        /// Side that moves first (x or o)
        #[arg(long)]
        first: Option<Player>,

        /// Disable alpha-beta cutoffs
        #[arg(long)]
        no_pruning: bool,
    },

    /// Evaluate every opening move for the first player
    Solve {
        /// Side that moves first (x or o)
        #[arg(long)]
        first: Option<Player>,
    },
}
