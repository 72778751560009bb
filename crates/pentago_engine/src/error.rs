//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// A rejected engine operation.
///
/// Every variant is recoverable: the board is left exactly as it was before
/// the failing call, and the caller is expected to ask for new input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A coordinate lies outside `[0, side)`.
    #[display("Position ({row}, {col}) is outside the {side}x{side} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        side: usize,
    },

    /// The target cell already holds a marker.
    #[display("Position ({row}, {col}) is already filled")]
    PositionOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A sub-board number outside `[1, count]`.
    #[display("Sub-board {index} does not exist (valid: 1-{count})")]
    InvalidSubBoardIndex {
        /// Requested sub-board number.
        index: usize,
        /// Number of sub-boards on the board.
        count: usize,
    },

    /// A rotation token that is neither clockwise nor counter-clockwise.
    #[display("Rotation direction '{token}' is neither clockwise nor counter-clockwise")]
    InvalidDirection {
        /// The rejected token.
        token: String,
    },

    /// A player identity that is not part of the configured roster.
    #[display("Player {player} is not playing this game")]
    UnknownPlayer {
        /// The rejected player letter.
        player: char,
    },

    /// A turn was attempted after the game reached a terminal state.
    #[display("Game is already over")]
    GameOver,
}

/// Board configuration error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
