use serde::{Deserialize, Serialize};

use crate::*;

/// Board side length and mine count for one game.
///
/// A valid config always leaves at least one safe cell, so the first reveal can be kept safe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    /// Pulls arbitrary user input into the valid range instead of rejecting it.
    ///
    /// A 1x1 board cannot hold a mine and a safe cell, so the side is raised to at least 2.
    pub fn clamped(size: Coord, mines: CellCount) -> Self {
        let size = size.clamp(2, Coord::MAX);
        let mines = mines.clamp(1, mult(size, size) - 1);
        Self::new_unchecked(size, mines)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size >= 1 && self.mines >= 1 && self.mines < self.total_cells() {
            Ok(())
        } else {
            Err(GameError::InvalidConfiguration {
                size: self.size,
                mines: self.mines,
            })
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boards_with_a_safe_cell() {
        let config = GameConfig::new(10, 10).unwrap();

        assert_eq!(config.total_cells(), 100);
        assert_eq!(config.safe_cells(), 90);
        assert!(GameConfig::new(2, 3).is_ok());
    }

    #[test]
    fn rejects_bad_counts() {
        for (size, mines) in [(3, 9), (3, 10), (3, 0), (0, 1), (1, 1), (0, 0)] {
            assert_eq!(
                GameConfig::new(size, mines),
                Err(GameError::InvalidConfiguration { size, mines }),
                "size {size} mines {mines}"
            );
        }
    }

    #[test]
    fn clamped_always_validates() {
        assert_eq!(GameConfig::clamped(10, 0), GameConfig::new_unchecked(10, 1));
        assert_eq!(GameConfig::clamped(10, 500), GameConfig::new_unchecked(10, 99));
        assert_eq!(GameConfig::clamped(0, 7), GameConfig::new_unchecked(2, 3));
        assert_eq!(GameConfig::clamped(1, 1), GameConfig::new_unchecked(2, 1));

        for size in [0, 1, 2, 16, Coord::MAX] {
            for mines in [0, 1, 50, CellCount::MAX] {
                assert!(GameConfig::clamped(size, mines).validate().is_ok());
            }
        }
    }
}
