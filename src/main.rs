//! Scalable Pentago - terminal game.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use pentago_engine::GameEngine;
use scalable_pentago::{BoardOverrides, Session, SessionOutcome, Settings};
use std::path::Path;
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
        Command::Play {
            config,
            sub_board_side,
            power,
            winning_length,
            players,
        } => run_play(
            &config,
            BoardOverrides {
                sub_board_side,
                sub_board_power: power,
                winning_length,
                player_count: players,
            },
        ),
        Command::DefaultConfig => {
            print!("{}", Settings::default_toml()?);
            Ok(())
        }
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config, overrides), fields(config = %config.display()))]
fn run_play(config: &Path, overrides: BoardOverrides) -> Result<()> {
    let settings = Settings::load_or_default(config)?.with_overrides(overrides);
    let board = settings.board_config()?;
    info!(
        board_side = *board.board_side(),
        sub_boards = board.sub_board_count(),
        "Starting game"
    );

    println!("Welcome to Scalable Pentago!");
    println!(
        "Board {0}x{0}, {1} sub-boards numbered left to right then top to bottom (starting at 1).",
        board.board_side(),
        board.sub_board_count()
    );
    println!(
        "{} in a row wins. Enter moves as: ROW COLUMN SUB-BOARD DIRECTION (c or a), e.g. 2 c 1 c",
        board.winning_length()
    );

    let stdin = std::io::stdin();
    let mut session = Session::new(GameEngine::new(board), stdin.lock(), std::io::stdout());
    match session.run()? {
        SessionOutcome::Finished(status) => info!(?status, "Game finished"),
        SessionOutcome::Abandoned => info!("Game abandoned"),
    }
    Ok(())
}
