use alloc::collections::BTreeSet;
use core::fmt;
use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Fixed-size grid of cells addressed by `(row, col)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    bomb_count: CellCount,
}

impl Board {
    /// Builds a board with bombs at exactly the given coordinates, duplicates are merged.
    pub fn from_bomb_coords(size: Coord2, bomb_coords: &[Coord2]) -> Result<Self> {
        GameConfig::new(size, 0)?;

        let bombs: BTreeSet<Coord2> = bomb_coords.iter().copied().collect();
        let mut cells: Array2<Cell> = Array2::default(size.to_nd_index());
        for &coords in &bombs {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            cells[coords.to_nd_index()] = Cell::bomb();
        }

        // `bombs.len()` is bounded by the board area here
        let config = GameConfig::new(size, bombs.len() as CellCount)?;
        log::debug!("Board {:?} built with {} bombs", size, config.bombs);

        Ok(Self {
            cells,
            bomb_count: config.bombs,
        })
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.bomb_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn height(&self) -> Coord {
        self.size().0
    }

    pub fn width(&self) -> Coord {
        self.size().1
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.height(), self.width())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.bomb_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// Neighbors of a cell in unspecified order, clipped to the grid edges.
    pub fn neighbors_of(&self, coords: Coord2) -> Result<NeighborIter> {
        let coords = self.validate_coords(coords)?;
        Ok(self.iter_neighbors(coords))
    }

    /// Number of bombs among the neighbors of `coords`.
    pub fn adjacent_bomb_count(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.count_adjacent_bombs(coords))
    }

    /// All coordinates in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn bomb_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter_coords().filter(|&coords| self[coords].is_bomb())
    }

    pub fn exposed_safe_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_exposed() && !cell.is_bomb())
            .count() as CellCount
    }

    pub fn flagged_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_flagged()).count() as CellCount
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub(crate) fn count_adjacent_bombs(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_bomb())
            .count() as u8
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{}", cell.display_state().glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
