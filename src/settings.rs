//! Game settings loaded from TOML.

use derive_getters::Getters;
use pentago_engine::{BoardConfig, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Top-level settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board geometry and players.
    board: BoardSettings,
}

/// The `[board]` table. Defaults give classic Pentago.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Cells along one side of a sub-board.
    sub_board_side: usize,

    /// X in `4^X` sub-boards.
    sub_board_power: u32,

    /// Markers in a row needed to win.
    winning_length: usize,

    /// Number of players.
    player_count: usize,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            sub_board_side: 3,
            sub_board_power: 1,
            winning_length: 5,
            player_count: 2,
        }
    }
}

/// Command-line values that replace file values when present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardOverrides {
    /// Replaces `sub_board_side`.
    pub sub_board_side: Option<usize>,
    /// Replaces `sub_board_power`.
    pub sub_board_power: Option<u32>,
    /// Replaces `winning_length`.
    pub winning_length: Option<usize>,
    /// Replaces `player_count`.
    pub player_count: Option<usize>,
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        settings.board_config()?;
        info!(board = ?settings.board, "Settings loaded successfully");
        Ok(settings)
    }

    /// Loads settings, falling back to defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            warn!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Default settings as a TOML document.
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| ConfigError::new(format!("Failed to serialize settings: {}", e)))
    }

    /// Replaces board values with any overrides given.
    pub fn with_overrides(mut self, overrides: BoardOverrides) -> Self {
        let board = &mut self.board;
        if let Some(side) = overrides.sub_board_side {
            board.sub_board_side = side;
        }
        if let Some(power) = overrides.sub_board_power {
            board.sub_board_power = power;
        }
        if let Some(length) = overrides.winning_length {
            board.winning_length = length;
        }
        if let Some(count) = overrides.player_count {
            board.player_count = count;
        }
        self
    }

    /// Validates the board table into an engine configuration.
    #[instrument(skip(self))]
    pub fn board_config(&self) -> Result<BoardConfig, ConfigError> {
        let b = &self.board;
        BoardConfig::new(
            b.sub_board_side,
            b.sub_board_power,
            b.winning_length,
            b.player_count,
        )
    }
}
