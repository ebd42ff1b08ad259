use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square board of [`Cell`]s addressed by `(row, col)`.
///
/// The side length is fixed at construction. Checked accessors report [`GameError::IndexOutOfBounds`];
/// the `Index` impls are for coordinates that were already validated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    side: Coord,
    cells: Array2<Cell>,
}

impl Grid {
    pub fn new(side: Coord) -> Self {
        Self {
            side,
            cells: Array2::default((usize::from(side), usize::from(side))),
        }
    }

    pub const fn size(&self) -> Coord {
        self.side
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.side, self.side)
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        row < self.side && col < self.side
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::IndexOutOfBounds {
                row: coords.0,
                col: coords.1,
                size: self.side,
            })
        }
    }

    pub fn at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn at_mut(&mut self, coords: Coord2) -> Result<&mut Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&mut self[coords])
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.side)
    }

    /// Counts mines around `coords` by looking at the neighbors directly.
    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        let count = self
            .iter_neighbors(coords)
            .filter(|&pos| self[pos].has_mine)
            .count();
        // at most 8 neighbors
        count as u8
    }

    /// Iterates all cells in row-major order together with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }
}

fn nd_index((row, col): Coord2) -> [usize; 2] {
    [row.into(), col.into()]
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[nd_index(coords)]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[nd_index(coords)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_hidden() {
        let grid = Grid::new(4);

        assert_eq!(grid.size(), 4);
        assert_eq!(grid.total_cells(), 16);
        assert!(grid.iter().all(|(_, cell)| *cell == Cell::default()));
    }

    #[test]
    fn at_rejects_out_of_bounds() {
        let grid = Grid::new(3);

        assert_eq!(
            grid.at((3, 0)),
            Err(GameError::IndexOutOfBounds {
                row: 3,
                col: 0,
                size: 3
            })
        );
        assert!(grid.at((0, 3)).is_err());
        assert!(grid.at((2, 2)).is_ok());
    }

    #[test]
    fn at_mut_writes_through() {
        let mut grid = Grid::new(2);

        grid.at_mut((1, 0)).unwrap().flagged = true;

        assert!(grid.at((1, 0)).unwrap().flagged);
        assert!(!grid.at((0, 1)).unwrap().flagged);
    }

    #[test]
    fn counts_adjacent_mines() {
        let mut grid = Grid::new(3);
        grid[(0, 0)].has_mine = true;
        grid[(2, 2)].has_mine = true;

        assert_eq!(grid.count_adjacent_mines((1, 1)), 2);
        assert_eq!(grid.count_adjacent_mines((0, 1)), 1);
        assert_eq!(grid.count_adjacent_mines((2, 0)), 0);
    }

    #[test]
    fn iter_is_row_major() {
        let grid = Grid::new(2);
        let coords: alloc::vec::Vec<_> = grid.iter().map(|(coords, _)| coords).collect();

        assert_eq!(coords, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
