//! Board-full detection.

use crate::grid::Grid;
use tracing::instrument;

/// Checks if every cell of the board holds a marker.
///
/// A full board with no winner is a draw.
#[instrument(skip(grid), fields(side = grid.side()))]
pub fn is_full(grid: &Grid) -> bool {
    let filled = grid.cells().iter().filter(|cell| !cell.is_empty()).count();
    filled == grid.side() * grid.side()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, PlayerId};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Grid::new(4)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut grid = Grid::new(4);
        grid.set(1, 1, Cell::Owned(PlayerId::new(0).unwrap())).unwrap();
        assert!(!is_full(&grid));
    }

    #[test]
    fn test_full_board() {
        let mut grid = Grid::new(4);
        for r in 0..4 {
            for c in 0..4 {
                let player = PlayerId::new((r + c) % 2).unwrap();
                grid.set(r, c, Cell::Owned(player)).unwrap();
            }
        }
        assert!(is_full(&grid));
    }
}
