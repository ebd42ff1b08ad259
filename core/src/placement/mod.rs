use alloc::vec::Vec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of mine positions.
///
/// Implementations pick `count` distinct indices from `0..candidates`. The indices address every
/// board cell in row-major order with the protected first-reveal cell skipped.
pub trait MineSelector {
    fn select(&mut self, candidates: CellCount, count: CellCount) -> Vec<CellCount>;
}

impl<S: MineSelector + ?Sized> MineSelector for &mut S {
    fn select(&mut self, candidates: CellCount, count: CellCount) -> Vec<CellCount> {
        (**self).select(candidates, count)
    }
}

impl Grid {
    /// Places exactly `count` mines anywhere except `exclude` and updates adjacency counts.
    ///
    /// Indices from the selector that are out of range or repeated are dropped with a warning.
    /// If that leaves the board short, the first free candidates in row-major order are mined.
    /// `count` must leave at least the excluded cell free.
    pub fn place_mines(
        &mut self,
        count: CellCount,
        exclude: Coord2,
        selector: &mut impl MineSelector,
    ) -> CellCount {
        let candidates = self.total_cells() - 1;
        let count = count.min(candidates);

        let mut placed = 0;
        for index in selector.select(candidates, count) {
            if placed == count {
                log::warn!("Selector returned more than {} indices, rest ignored", count);
                break;
            }
            if index >= candidates {
                log::warn!("Mine index {} out of range, only {} candidates", index, candidates);
                continue;
            }
            if self.try_place_mine(self.candidate_coords(index, exclude)) {
                placed += 1;
            } else {
                log::warn!("Mine index {} selected twice, ignored", index);
            }
        }

        if placed < count {
            log::warn!(
                "Selector placed {} of {} mines, filling the rest in order",
                placed,
                count
            );
            for index in 0..candidates {
                if placed == count {
                    break;
                }
                if self.try_place_mine(self.candidate_coords(index, exclude)) {
                    placed += 1;
                }
            }
        }

        log::debug!("Placed {} mines around protected cell {:?}", placed, exclude);
        placed
    }

    /// Maps a candidate index to board coordinates, skipping over `exclude`.
    fn candidate_coords(&self, index: CellCount, (ex_row, ex_col): Coord2) -> Coord2 {
        let side = CellCount::from(self.size());
        let excluded = CellCount::from(ex_row) * side + CellCount::from(ex_col);
        let linear = if index < excluded { index } else { index + 1 };
        ((linear / side) as Coord, (linear % side) as Coord)
    }

    fn try_place_mine(&mut self, coords: Coord2) -> bool {
        if self[coords].has_mine {
            return false;
        }

        self[coords].has_mine = true;
        for neighbor in self.iter_neighbors(coords) {
            self[neighbor].adjacent_mines += 1;
        }
        true
    }
}
