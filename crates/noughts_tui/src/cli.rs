//! Command-line interface for noughts_tui.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts_tui")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "noughts.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Play a sequence of cells headlessly and print the final board
    Replay {
        /// Cell indices (0-8, row-major) in the order they are selected
        #[arg(required = true)]
        cells: Vec<usize>,

        /// Print the result as JSON instead of a grid
        #[arg(long)]
        json: bool,
    },
}
