//! Scalable Pentago - terminal front end for the Pentago board engine.
//!
//! # Architecture
//!
//! - **Settings**: TOML game settings validated into a board configuration
//! - **Input**: parsing of typed turns (`ROW COLUMN SUB_BOARD DIRECTION`)
//! - **Render**: text board with sub-board separators
//! - **Session**: turn sequencing until a win, a draw, or end of input
//!
//! # Example
//!
//! ```
//! use scalable_pentago::{Session, SessionOutcome, Settings};
//! use pentago_engine::GameEngine;
//! use std::io::Cursor;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Settings::default().board_config()?;
//! let input = Cursor::new(b"2 c 1 c\n".to_vec());
//! let mut session = Session::new(GameEngine::new(config), input, Vec::new());
//! assert_eq!(session.run()?, SessionOutcome::Abandoned);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod input;
mod render;
mod session;
mod settings;

pub use input::{InputError, column_index, column_letter, parse_direction, parse_turn};
pub use render::render_board;
pub use session::{Session, SessionOutcome};
pub use settings::{BoardOverrides, BoardSettings, Settings};
