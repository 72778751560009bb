//! In-place quarter-turn rotation of a square sub-board.
//!
//! The region is treated as concentric rings. Each ring is turned by cycling
//! four cells at a time (top, right, bottom, left), carrying a single
//! displaced cell between steps. An odd side leaves the centre cell alone.

use crate::error::EngineError;
use crate::grid::Grid;
use crate::types::Direction;
use tracing::{instrument, trace};

/// Rotates square regions of a [`Grid`] by a quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotator {
    side: usize,
}

impl Rotator {
    /// Creates a rotator for regions of `side x side` cells.
    pub fn new(side: usize) -> Self {
        Self { side }
    }

    /// Where the cell at local (`row`, `col`) lands after one quarter turn.
    fn destination(&self, row: usize, col: usize, direction: Direction) -> (usize, usize) {
        let last = self.side - 1;
        match direction {
            Direction::Clockwise => (col, last - row),
            Direction::CounterClockwise => (last - col, row),
        }
    }

    /// Rotates the region whose top-left corner is `corner`.
    ///
    /// Fails with [`EngineError::OutOfBounds`] before touching the grid if the
    /// region does not fit.
    #[instrument(skip(self, grid), fields(side = self.side))]
    pub fn rotate(
        &self,
        grid: &mut Grid,
        corner: (usize, usize),
        direction: Direction,
    ) -> Result<(), EngineError> {
        let (top, left) = corner;
        if self.side == 0 {
            return Ok(());
        }
        let reach = self.side - 1;
        let far = top.checked_add(reach).zip(left.checked_add(reach));
        if !far.is_some_and(|(row, col)| grid.contains(row, col)) {
            let (row, col) = far.unwrap_or(corner);
            return Err(EngineError::OutOfBounds {
                row,
                col,
                side: grid.side(),
            });
        }

        for ring in 0..self.side / 2 {
            let span = self.side - 1 - 2 * ring;
            for step in 0..span {
                let start = (ring, ring + step);
                let mut carried = grid.get(top + start.0, left + start.1)?;
                let mut at = start;
                for _ in 0..4 {
                    at = self.destination(at.0, at.1, direction);
                    carried = grid.replace(top + at.0, left + at.1, carried)?;
                }
                debug_assert_eq!(at, start);
            }
            trace!(ring, span, "Ring rotated");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, PlayerId};

    fn owned(i: usize) -> Cell {
        Cell::Owned(PlayerId::new(i).unwrap())
    }

    /// Fills a `side x side` grid with cell `r * side + c` owned by distinct letters.
    fn numbered(side: usize) -> Grid {
        let mut grid = Grid::new(side);
        for r in 0..side {
            for c in 0..side {
                grid.set(r, c, owned(r * side + c)).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_two_by_two_clockwise() {
        let mut grid = numbered(2);
        Rotator::new(2)
            .rotate(&mut grid, (0, 0), Direction::Clockwise)
            .unwrap();
        // [0 1; 2 3] -> [2 0; 3 1]
        assert_eq!(grid.cells(), &[owned(2), owned(0), owned(3), owned(1)]);
    }

    #[test]
    fn test_two_by_two_counter_clockwise() {
        let mut grid = numbered(2);
        Rotator::new(2)
            .rotate(&mut grid, (0, 0), Direction::CounterClockwise)
            .unwrap();
        // [0 1; 2 3] -> [1 3; 0 2]
        assert_eq!(grid.cells(), &[owned(1), owned(3), owned(0), owned(2)]);
    }

    #[test]
    fn test_odd_side_keeps_centre() {
        let mut grid = numbered(5);
        let centre = grid.get(2, 2).unwrap();
        Rotator::new(5)
            .rotate(&mut grid, (0, 0), Direction::Clockwise)
            .unwrap();
        assert_eq!(grid.get(2, 2), Ok(centre));
        // left column, read bottom to top, becomes the top row
        for c in 0..5 {
            assert_eq!(grid.get(0, c), Ok(owned((4 - c) * 5)));
        }
    }

    #[test]
    fn test_three_by_three_clockwise() {
        let mut grid = numbered(3);
        Rotator::new(3)
            .rotate(&mut grid, (0, 0), Direction::Clockwise)
            .unwrap();
        let expected: Vec<Cell> = [6, 3, 0, 7, 4, 1, 8, 5, 2].into_iter().map(owned).collect();
        assert_eq!(grid.cells(), expected.as_slice());
    }

    #[test]
    fn test_region_stays_inside_corner() {
        let mut grid = numbered(4);
        let before = grid.clone();
        Rotator::new(2)
            .rotate(&mut grid, (2, 2), Direction::Clockwise)
            .unwrap();
        for r in 0..4 {
            for c in 0..4 {
                if r < 2 || c < 2 {
                    assert_eq!(grid.get(r, c), before.get(r, c));
                }
            }
        }
        assert_eq!(grid.get(2, 2), before.get(3, 2));
    }

    #[test]
    fn test_rejects_region_off_the_board() {
        let mut grid = numbered(4);
        let before = grid.clone();
        let err = Rotator::new(3).rotate(&mut grid, (2, 0), Direction::Clockwise);
        assert!(matches!(err, Err(EngineError::OutOfBounds { .. })));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_rejects_corner_past_usize_range() {
        let mut grid = numbered(4);
        let before = grid.clone();
        let err = Rotator::new(2).rotate(&mut grid, (usize::MAX, 0), Direction::Clockwise);
        assert_eq!(
            err,
            Err(EngineError::OutOfBounds {
                row: usize::MAX,
                col: 0,
                side: 4
            })
        );
        assert_eq!(grid, before);
    }
}
