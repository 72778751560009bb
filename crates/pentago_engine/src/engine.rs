//! Turn application for scalable Pentago.

use crate::config::BoardConfig;
use crate::error::{ConfigError, EngineError};
use crate::grid::Grid;
use crate::quadrant::QuadrantIndexer;
use crate::rotation::Rotator;
use crate::rules::{WinDetector, is_full};
use crate::types::{Cell, Direction, GameStatus, Move, PlayerId, TurnResult};
use tracing::{debug, info, instrument};

/// Owns the board of one game and applies turns to it.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: BoardConfig,
    grid: Grid,
    indexer: QuadrantIndexer,
    rotator: Rotator,
    detector: WinDetector,
    players: Vec<PlayerId>,
    status: GameStatus,
    turns_played: usize,
}

impl GameEngine {
    /// Creates a game with an empty board.
    #[instrument]
    pub fn new(config: BoardConfig) -> Self {
        Self {
            grid: Grid::new(*config.board_side()),
            indexer: QuadrantIndexer::new(&config),
            rotator: Rotator::new(*config.sub_board_side()),
            detector: WinDetector::new(*config.winning_length(), *config.player_count()),
            players: PlayerId::roster(*config.player_count()),
            status: GameStatus::InProgress,
            turns_played: 0,
            config,
        }
    }

    /// Creates a game from an existing board, e.g. to resume a position.
    ///
    /// The status is `InProgress`; the next turn evaluates the board.
    pub fn with_grid(config: BoardConfig, grid: Grid) -> Result<Self, ConfigError> {
        if grid.side() != *config.board_side() {
            return Err(ConfigError::new(format!(
                "grid side {} does not match board side {}",
                grid.side(),
                config.board_side()
            )));
        }
        let mut engine = Self::new(config);
        engine.grid = grid;
        Ok(engine)
    }

    /// Returns the board configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the sub-board indexer.
    pub fn indexer(&self) -> &QuadrantIndexer {
        &self.indexer
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Players in turn order.
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// Number of turns applied so far.
    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// The player after `current`, wrapping back to the first.
    pub fn next_player(&self, current: PlayerId) -> Result<PlayerId, EngineError> {
        let position = self
            .players
            .iter()
            .position(|&p| p == current)
            .ok_or(EngineError::UnknownPlayer {
                player: current.letter(),
            })?;
        let next = (position + 1) % self.players.len();
        Ok(self.players[next])
    }

    /// Places `player`'s marker, rotates `sub_board`, then evaluates the board.
    ///
    /// All input is checked before the board changes, so a rejected turn
    /// leaves the board and status as they were.
    ///
    /// # Errors
    ///
    /// [`EngineError::GameOver`] after a terminal state,
    /// [`EngineError::UnknownPlayer`], [`EngineError::OutOfBounds`],
    /// [`EngineError::PositionOccupied`], or
    /// [`EngineError::InvalidSubBoardIndex`].
    #[instrument(skip(self), fields(turn = self.turns_played))]
    pub fn apply_turn(
        &mut self,
        player: PlayerId,
        row: usize,
        col: usize,
        sub_board: usize,
        direction: Direction,
    ) -> Result<TurnResult, EngineError> {
        if self.status.is_terminal() {
            return Err(EngineError::GameOver);
        }
        if !self.players.contains(&player) {
            return Err(EngineError::UnknownPlayer {
                player: player.letter(),
            });
        }
        if !self.grid.get(row, col)?.is_empty() {
            return Err(EngineError::PositionOccupied { row, col });
        }
        let corner = self.indexer.corner_of(sub_board)?;
        let placed_sub_board = self.indexer.sub_board_of(row, col)?;

        self.grid.set(row, col, Cell::Owned(player))?;
        self.rotator.rotate(&mut self.grid, corner, direction)?;
        self.turns_played += 1;
        debug!(%player, placed_sub_board, ?corner, "Marker placed and sub-board rotated");

        let winners = self
            .detector
            .detect(&self.grid, &self.indexer, &[placed_sub_board, sub_board])?;
        let board_full = is_full(&self.grid);

        if !winners.is_empty() {
            let won = winners.players();
            info!(winners = ?won, "Game won");
            self.status = GameStatus::Won(won);
        } else if board_full {
            info!("Board full with no winner");
            self.status = GameStatus::Drawn;
        }

        Ok(TurnResult::new(winners, board_full))
    }

    /// Applies a [`Move`] for `player`.
    pub fn apply_move(&mut self, player: PlayerId, mov: Move) -> Result<TurnResult, EngineError> {
        self.apply_turn(player, mov.row, mov.col, mov.sub_board, mov.direction)
    }
}
