//! Parsing of typed turn input.
//!
//! A turn is one line: `ROW COLUMN SUB_BOARD DIRECTION`, for example
//! `2 c 1 cw`. Rows are numbers, columns are letters.

use derive_more::{Display, Error};
use pentago_engine::{Direction, EngineError, Move};
use tracing::instrument;

/// A line that could not be read as a turn.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Wrong number of fields.
    #[display("Expected ROW COLUMN SUB_BOARD DIRECTION, got {found} field(s)")]
    FieldCount {
        /// Fields found on the line.
        found: usize,
    },

    /// Row or sub-board that is not a non-negative integer.
    #[display("Please input an integer value for the {field} (got '{token}')")]
    NotAnInteger {
        /// Which field was wrong.
        field: &'static str,
        /// The rejected text.
        token: String,
    },

    /// Column that is not a single letter.
    #[display("Please input a letter for the column (got '{token}')")]
    NotALetter {
        /// The rejected text.
        token: String,
    },

    /// Direction that is not recognised.
    #[display("{source}. Use 'c' for clockwise or 'a' for counter clockwise")]
    Direction {
        /// The engine's rejection.
        source: EngineError,
    },
}

/// Converts a column letter to its zero-based index, ignoring case.
pub fn column_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| (letter.to_ascii_uppercase() as u8 - b'A') as usize)
}

/// Letter shown for zero-based column `index`.
pub fn column_letter(index: usize) -> char {
    char::from(b'A' + (index % 26) as u8)
}

/// Reads a direction, accepting the shorthands `c`/`cw` and `a`/`ccw`.
#[instrument]
pub fn parse_direction(token: &str) -> Result<Direction, InputError> {
    let expanded = match token.trim().to_ascii_lowercase().as_str() {
        "c" | "cw" => "clockwise".to_string(),
        "a" | "ccw" | "anti-clockwise" => "counter-clockwise".to_string(),
        other => other.to_string(),
    };
    Direction::from_token(&expanded).map_err(|_| InputError::Direction {
        source: EngineError::InvalidDirection {
            token: token.trim().to_string(),
        },
    })
}

/// Reads one turn line.
///
/// Only the shape of the input is checked here; the engine checks bounds,
/// occupancy and the sub-board number.
#[instrument]
pub fn parse_turn(line: &str) -> Result<Move, InputError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [row, column, sub_board, direction] = fields.as_slice() else {
        return Err(InputError::FieldCount {
            found: fields.len(),
        });
    };

    let row = parse_integer("row", row)?;

    let mut letters = column.chars();
    let col = match (letters.next(), letters.next()) {
        (Some(letter), None) => column_index(letter),
        _ => None,
    }
    .ok_or_else(|| InputError::NotALetter {
        token: column.to_string(),
    })?;

    let sub_board = parse_integer("sub-board", sub_board)?;
    let direction = parse_direction(direction)?;

    Ok(Move::new(row, col, sub_board, direction))
}

fn parse_integer(field: &'static str, token: &str) -> Result<usize, InputError> {
    token.parse().map_err(|_| InputError::NotAnInteger {
        field,
        token: token.to_string(),
    })
}
