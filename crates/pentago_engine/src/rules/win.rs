//! Win detection for scalable Pentago.

use crate::error::EngineError;
use crate::grid::Grid;
use crate::quadrant::QuadrantIndexer;
use crate::types::{Cell, Heading, PlayerId, Winners};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Finds players holding a straight run of `winning_length` markers.
///
/// Only runs that start on a cell of the scanned sub-boards are found. A
/// turn changes at most the placed and the rotated sub-board, so scanning
/// those two is enough to see every run the turn could have created, as long
/// as the run has a cell inside one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinDetector {
    winning_length: usize,
    player_count: usize,
}

impl WinDetector {
    /// Creates a detector for the given run length and roster size.
    pub fn new(winning_length: usize, player_count: usize) -> Self {
        Self {
            winning_length,
            player_count,
        }
    }

    /// Evaluates every player over the listed sub-boards.
    ///
    /// Duplicate sub-board numbers are scanned once.
    #[instrument(skip(self, grid, indexer))]
    pub fn detect(
        &self,
        grid: &Grid,
        indexer: &QuadrantIndexer,
        sub_boards: &[usize],
    ) -> Result<Winners, EngineError> {
        let mut winners = Winners::none(self.player_count);
        let side = indexer.sub_board_side();

        let mut scanned: Vec<usize> = Vec::with_capacity(sub_boards.len());
        for &sub_board in sub_boards {
            if scanned.contains(&sub_board) {
                continue;
            }
            scanned.push(sub_board);

            let (top, left) = indexer.corner_of(sub_board)?;
            for row in top..top + side {
                for col in left..left + side {
                    let Cell::Owned(player) = grid.get(row, col)? else {
                        continue;
                    };
                    if player.index() >= self.player_count || winners.has_won(player) {
                        continue;
                    }
                    if Heading::iter().any(|h| self.run_from(grid, row, col, h, player)) {
                        debug!(%player, row, col, sub_board, "Winning run found");
                        winners.record(player);
                    }
                }
            }
        }
        Ok(winners)
    }

    /// Checks whether `player` owns `winning_length` cells starting at
    /// (`row`, `col`) and stepping along `heading`.
    pub fn run_from(
        &self,
        grid: &Grid,
        row: usize,
        col: usize,
        heading: Heading,
        player: PlayerId,
    ) -> bool {
        let (dr, dc) = heading.delta();
        (0..self.winning_length).all(|step| {
            let step = step as isize;
            let r = row as isize + dr * step;
            let c = col as isize + dc * step;
            if r < 0 || c < 0 {
                return false;
            }
            matches!(grid.get(r as usize, c as usize), Ok(Cell::Owned(owner)) if owner == player)
        })
    }
}
