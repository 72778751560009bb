//! Command-line interface for scalable_pentago.

use clap::{Parser, Subcommand};

/// Scalable Pentago - Pentago on boards up to 26x26 with up to 26 players
#[derive(Parser, Debug)]
#[command(name = "scalable_pentago")]
#[command(about = "Pentago with configurable board, sub-boards and players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Path to settings file
        #[arg(short, long, default_value = "pentago.toml")]
        config: std::path::PathBuf,

        /// Side length of each sub-board (greater than 1)
        #[arg(long)]
        sub_board_side: Option<usize>,

        /// X in 4^X sub-boards (greater than 0)
        #[arg(long)]
        power: Option<u32>,

        /// Markers in a row needed to win
        #[arg(short, long)]
        winning_length: Option<usize>,

        /// Number of players (A, B, C, ...)
        #[arg(short, long)]
        players: Option<usize>,
    },

    /// Print the default settings file
    DefaultConfig,
}
