/// Single coordinate axis used for the board side length and for row/column positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount).saturating_mul(b as CellCount)
}

/// Iterates the up-to-8 positions around `center` in row-major order.
///
/// Walks the 3x3 block clamped to the board edges and skips the center itself.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    first_col: Coord,
    last: Coord2,
    cursor: Option<Coord2>,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, side: Coord) -> Self {
        let (row, col) = center;
        let Some(edge) = side.checked_sub(1) else {
            return Self {
                center,
                first_col: 0,
                last: center,
                cursor: None,
            };
        };

        let first = (row.saturating_sub(1), col.saturating_sub(1));
        let last = (row.saturating_add(1).min(edge), col.saturating_add(1).min(edge));
        Self {
            center,
            first_col: first.1,
            last,
            cursor: Some(first),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let pos @ (row, col) = self.cursor?;
            self.cursor = if col < self.last.1 {
                Some((row, col + 1))
            } else if row < self.last.0 {
                Some((row + 1, self.first_col))
            } else {
                None
            };

            if pos != self.center {
                return Some(pos);
            }
        }
    }
}
