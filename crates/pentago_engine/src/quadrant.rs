//! Mapping between sub-board numbers and grid coordinates.
//!
//! Sub-boards are numbered from 1, left to right along the top row of
//! sub-boards, then continuing on the next row down.

use crate::config::BoardConfig;
use crate::error::EngineError;

/// Converts between one-based sub-board numbers and cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantIndexer {
    sub_board_side: usize,
    divisions: usize,
}

impl QuadrantIndexer {
    /// Creates an indexer for the given board geometry.
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            sub_board_side: *config.sub_board_side(),
            divisions: config.divisions(),
        }
    }

    /// Side length of every sub-board.
    pub fn sub_board_side(&self) -> usize {
        self.sub_board_side
    }

    /// Number of sub-boards.
    pub fn count(&self) -> usize {
        self.divisions * self.divisions
    }

    /// Checks that `index` names an existing sub-board.
    pub fn validate(&self, index: usize) -> Result<(), EngineError> {
        if index == 0 || index > self.count() {
            return Err(EngineError::InvalidSubBoardIndex {
                index,
                count: self.count(),
            });
        }
        Ok(())
    }

    /// Top-left corner `(row, col)` of sub-board `index`.
    ///
    /// An index that is a multiple of the divisions is the last sub-board of
    /// its row, not the first of the next.
    pub fn corner_of(&self, index: usize) -> Result<(usize, usize), EngineError> {
        self.validate(index)?;
        let zero_based = index - 1;
        let row_mult = zero_based / self.divisions;
        let col_mult = zero_based % self.divisions;
        Ok((row_mult * self.sub_board_side, col_mult * self.sub_board_side))
    }

    /// Number of the sub-board containing (`row`, `col`).
    pub fn sub_board_of(&self, row: usize, col: usize) -> Result<usize, EngineError> {
        let side = self.divisions * self.sub_board_side;
        if row >= side || col >= side {
            return Err(EngineError::OutOfBounds { row, col, side });
        }
        let row_mult = row / self.sub_board_side;
        let col_mult = col / self.sub_board_side;
        Ok(row_mult * self.divisions + col_mult + 1)
    }
}
