//! Interactive turn sequencing over a line-based terminal.

use crate::input::parse_turn;
use crate::render::render_board;
use anyhow::Result;
use pentago_engine::{GameEngine, GameStatus, PlayerId};
use std::io::{BufRead, ErrorKind, Write};
use tracing::{debug, info, instrument, warn};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The game reached a terminal state.
    Finished(GameStatus),
    /// Input ran out before the game ended.
    Abandoned,
}

/// Plays one game, reading turns from `input` and writing to `output`.
pub struct Session<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session for a fresh engine.
    pub fn new(engine: GameEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs turns until someone wins, the board fills, or input ends.
    ///
    /// Rejected input is reported and asked for again without passing the turn.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionOutcome> {
        let Some(&first) = self.engine.players().first() else {
            return Ok(SessionOutcome::Abandoned);
        };
        let mut current = first;
        self.show_turn(current)?;

        let mut line = String::new();
        loop {
            write!(self.output, "Move (row column sub-board c|a): ")?;
            self.output.flush()?;

            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    info!(turns = self.engine.turns_played(), "Input ended before the game did");
                    writeln!(self.output)?;
                    return Ok(SessionOutcome::Abandoned);
                }
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    warn!(error = %e, "Turn is not valid UTF-8");
                    writeln!(self.output, "ERROR : Input is not valid text")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }

            let mov = match parse_turn(&line) {
                Ok(mov) => mov,
                Err(e) => {
                    warn!(error = %e, "Unreadable turn");
                    writeln!(self.output, "ERROR : {}", e)?;
                    continue;
                }
            };

            let result = match self.engine.apply_move(current, mov) {
                Ok(result) => result,
                Err(e) => {
                    warn!(error = %e, %mov, "Turn rejected");
                    writeln!(self.output, "ERROR : {}", e)?;
                    continue;
                }
            };
            debug!(%current, %mov, "Turn applied");

            if result.is_terminal() {
                self.show_board()?;
                for winner in result.winners().players() {
                    writeln!(self.output, "Player {} is a winner!", winner)?;
                }
                if result.winners().is_empty() {
                    writeln!(self.output, "The board is full.  Nobody won.")?;
                } else {
                    writeln!(self.output, "The game is now over!")?;
                }
                return Ok(SessionOutcome::Finished(self.engine.status().clone()));
            }

            current = self.engine.next_player(current)?;
            self.show_turn(current)?;
        }
    }

    fn show_board(&mut self) -> Result<()> {
        let board = render_board(self.engine.grid(), *self.engine.config().sub_board_side());
        writeln!(self.output, "{}", board)?;
        Ok(())
    }

    fn show_turn(&mut self, player: PlayerId) -> Result<()> {
        self.show_board()?;
        writeln!(self.output, "PLAYER {}'S TURN", player)?;
        Ok(())
    }
}
