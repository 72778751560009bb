//! Validated board parameters.

use crate::error::ConfigError;
use crate::types::MAX_IDENTITIES;
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// Largest supported board side.
pub const MAX_BOARD_SIDE: usize = MAX_IDENTITIES;

/// Board geometry, winning length and player count, checked together.
///
/// The board splits into `4^X` square sub-boards of side `sub_board_side`,
/// `2^X` per row, so `board_side = sub_board_side * 2^X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct BoardConfig {
    sub_board_side: usize,
    sub_board_power: u32,
    board_side: usize,
    winning_length: usize,
    player_count: usize,
}

impl BoardConfig {
    /// Validates a configuration given the sub-board power X.
    #[instrument]
    pub fn new(
        sub_board_side: usize,
        sub_board_power: u32,
        winning_length: usize,
        player_count: usize,
    ) -> Result<Self, ConfigError> {
        if sub_board_side < 2 {
            return Err(ConfigError::new(format!(
                "sub-board side must be greater than 1 (got {sub_board_side})"
            )));
        }
        if sub_board_power < 1 {
            return Err(ConfigError::new("sub-board power X must be greater than 0"));
        }

        let board_side = 2usize
            .checked_pow(sub_board_power)
            .and_then(|divisions| divisions.checked_mul(sub_board_side))
            .filter(|&side| side <= MAX_BOARD_SIDE)
            .ok_or_else(|| {
                ConfigError::new(format!(
                    "board side {sub_board_side} * 2^{sub_board_power} exceeds {MAX_BOARD_SIDE}"
                ))
            })?;

        if winning_length < 2 {
            return Err(ConfigError::new(format!(
                "winning length must be at least 2 (got {winning_length})"
            )));
        }
        if winning_length > board_side {
            return Err(ConfigError::new(format!(
                "winning length {winning_length} exceeds board side {board_side}"
            )));
        }

        let player_maximum = board_side * board_side / winning_length;
        if player_count < 2 {
            return Err(ConfigError::new(format!(
                "player count must be at least 2 (got {player_count})"
            )));
        }
        if player_count > MAX_IDENTITIES {
            return Err(ConfigError::new(format!(
                "player count must not exceed {MAX_IDENTITIES} (got {player_count})"
            )));
        }
        if player_count > player_maximum {
            return Err(ConfigError::new(format!(
                "player count {player_count} exceeds the player maximum {player_maximum} \
                 (cells on the board divided by the winning length)"
            )));
        }

        debug!(board_side, "Board configuration accepted");
        Ok(Self {
            sub_board_side,
            sub_board_power,
            board_side,
            winning_length,
            player_count,
        })
    }

    /// Validates a configuration given the board side directly.
    ///
    /// `board_side / sub_board_side` must be a power of two of at least 2.
    #[instrument]
    pub fn from_sides(
        board_side: usize,
        sub_board_side: usize,
        winning_length: usize,
        player_count: usize,
    ) -> Result<Self, ConfigError> {
        if sub_board_side < 2 || board_side % sub_board_side != 0 {
            return Err(ConfigError::new(format!(
                "board side {board_side} is not a multiple of sub-board side {sub_board_side}"
            )));
        }
        let divisions = board_side / sub_board_side;
        if divisions < 2 || !divisions.is_power_of_two() {
            return Err(ConfigError::new(format!(
                "board side {board_side} must be sub-board side {sub_board_side} times a power of two"
            )));
        }
        Self::new(
            sub_board_side,
            divisions.trailing_zeros(),
            winning_length,
            player_count,
        )
    }

    /// Sub-boards along one row or column of the board.
    pub fn divisions(&self) -> usize {
        self.board_side / self.sub_board_side
    }

    /// Total number of sub-boards.
    pub fn sub_board_count(&self) -> usize {
        self.divisions() * self.divisions()
    }

    /// Cells on the board.
    pub fn cell_count(&self) -> usize {
        self.board_side * self.board_side
    }
}
