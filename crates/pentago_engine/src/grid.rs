//! Square cell grid with bounds-checked access.

use crate::config::MAX_BOARD_SIDE;
use crate::error::{ConfigError, EngineError};
use crate::types::Cell;
use serde::{Deserialize, Serialize};

/// An `L x L` grid of cells, stored row-major.
///
/// The side length is fixed at construction. Deserialized grids must hold
/// exactly `side * side` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridData")]
pub struct Grid {
    side: usize,
    cells: Vec<Cell>,
}

/// Unchecked grid as read from a serialized document.
#[derive(Deserialize)]
struct GridData {
    side: usize,
    cells: Vec<Cell>,
}

impl TryFrom<GridData> for Grid {
    type Error = ConfigError;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        if data.side > MAX_BOARD_SIDE {
            return Err(ConfigError::new(format!(
                "grid side {} exceeds {MAX_BOARD_SIDE}",
                data.side
            )));
        }
        let expected = data.side * data.side;
        if data.cells.len() != expected {
            return Err(ConfigError::new(format!(
                "grid of side {} needs {expected} cells, found {}",
                data.side,
                data.cells.len()
            )));
        }
        Ok(Self {
            side: data.side,
            cells: data.cells,
        })
    }
}

impl Grid {
    /// Creates an empty grid.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![Cell::Empty; side * side],
        }
    }

    /// Side length.
    pub fn side(&self) -> usize {
        self.side
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, EngineError> {
        if row >= self.side || col >= self.side {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                side: self.side,
            });
        }
        Ok(row * self.side + col)
    }

    /// Checks whether (`row`, `col`) is on the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.side && col < self.side
    }

    /// Gets the cell at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        let i = self.offset(row, col)?;
        Ok(self.cells[i])
    }

    /// Sets the cell at (`row`, `col`).
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), EngineError> {
        let i = self.offset(row, col)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Stores `cell` at (`row`, `col`) and hands back what was there.
    pub fn replace(&mut self, row: usize, col: usize, cell: Cell) -> Result<Cell, EngineError> {
        let i = self.offset(row, col)?;
        Ok(std::mem::replace(&mut self.cells[i], cell))
    }

    /// Iterates one row of cells.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .chunks(self.side.max(1))
            .nth(row)
            .into_iter()
            .flatten()
            .copied()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlayerId;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.cells().len(), 16);
        assert!(grid.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(6);
        let b = Cell::Owned(PlayerId::new(1).unwrap());
        grid.set(5, 0, b).unwrap();
        assert_eq!(grid.get(5, 0), Ok(b));
        assert_eq!(grid.get(0, 5), Ok(Cell::Empty));
        assert_eq!(grid.row(5).next(), Some(b));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(6);
        assert_eq!(
            grid.get(6, 0),
            Err(EngineError::OutOfBounds {
                row: 6,
                col: 0,
                side: 6
            })
        );
        assert!(grid.set(0, 6, Cell::Empty).is_err());
        assert!(!grid.contains(0, 6));
    }

    #[test]
    fn test_replace_returns_previous() {
        let mut grid = Grid::new(2);
        let a = Cell::Owned(PlayerId::new(0).unwrap());
        assert_eq!(grid.replace(1, 1, a), Ok(Cell::Empty));
        assert_eq!(grid.replace(1, 1, Cell::Empty), Ok(a));
    }

    #[test]
    fn test_deserialize_checks_cell_count() {
        let err = serde_json::from_str::<Grid>(r#"{"side":6,"cells":[]}"#).unwrap_err();
        assert!(err.to_string().contains("needs 36 cells, found 0"));

        let grid = serde_json::from_str::<Grid>(r#"{"side":1,"cells":["Empty"]}"#).unwrap();
        assert_eq!(grid.get(0, 0), Ok(Cell::Empty));
    }

    #[test]
    fn test_deserialize_rejects_oversized_side() {
        let json = serde_json::to_string(&Grid::new(27)).unwrap();
        let err = serde_json::from_str::<Grid>(&json).unwrap_err();
        assert!(err.to_string().contains("grid side 27 exceeds 26"));
    }

    #[test]
    fn test_serialized_grid_reads_back() {
        let mut grid = Grid::new(4);
        grid.set(2, 1, Cell::Owned(PlayerId::new(3).unwrap())).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), grid);
    }
}
