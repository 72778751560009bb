//! Board engine for scalable Pentago.
//!
//! Players place a marker on an empty cell, then turn one sub-board a
//! quarter turn. The board side, sub-board side, number of sub-boards,
//! winning run length and player count are all configurable.
//!
//! # Example
//!
//! ```
//! use pentago_engine::{BoardConfig, Direction, GameEngine};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BoardConfig::new(3, 1, 5, 2)?;
//! let mut engine = GameEngine::new(config);
//! let first = engine.players()[0];
//! let result = engine.apply_turn(first, 2, 2, 4, Direction::Clockwise)?;
//! assert!(!result.is_terminal());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod engine;
mod error;
mod grid;
mod quadrant;
mod rotation;
pub mod rules;
mod types;

pub use config::{BoardConfig, MAX_BOARD_SIDE};
pub use engine::GameEngine;
pub use error::{ConfigError, EngineError};
pub use grid::Grid;
pub use quadrant::QuadrantIndexer;
pub use rotation::Rotator;
pub use rules::{WinDetector, is_full};
pub use types::{
    Cell, Direction, GameStatus, Heading, MAX_IDENTITIES, Move, PlayerId, TurnResult, Winners,
};
