use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No reveal yet, mines are not placed
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::NotStarted
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell was open already, nothing changed
    AlreadyRevealed,
    /// A mine was revealed and the game is lost
    Exploded,
    /// One or more safe cells were opened
    Opened,
    /// The game had already ended, nothing changed
    GameOver,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Exploded | Self::Opened)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
}

/// One round of play, from the first reveal until a win or a loss.
///
/// Mines are placed lazily on the first [`Game::reveal`], never on the revealed cell. A finished
/// game is not reset; start a new one instead.
#[derive(Clone, Debug)]
pub struct Game<S = RandomSelector> {
    grid: Grid,
    selector: S,
    mine_count: CellCount,
    mines_placed: bool,
    exploded: bool,
    remaining_safe_cells: CellCount,
    flagged_count: CellCount,
}

impl Game {
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        let config = GameConfig::new(size, mines)?;
        Self::with_selector(config, RandomSelector::from_entropy_clock())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_selector(config, RandomSelector::seed_from_u64(seed))
    }
}

impl<S: MineSelector> Game<S> {
    /// Builds a game that draws its mine positions from `selector`.
    pub fn with_selector(config: GameConfig, selector: S) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            grid: Grid::new(config.size),
            selector,
            mine_count: config.mines,
            mines_placed: false,
            exploded: false,
            remaining_safe_cells: config.safe_cells(),
            flagged_count: 0,
        })
    }

    pub fn state(&self) -> GameState {
        if self.exploded {
            GameState::Lost
        } else if !self.mines_placed {
            GameState::NotStarted
        } else if self.remaining_safe_cells == 0 {
            GameState::Won
        } else {
            GameState::InProgress
        }
    }

    pub fn board_size(&self) -> Coord {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn remaining_safe_cells(&self) -> CellCount {
        self.remaining_safe_cells
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn mines_remaining(&self) -> isize {
        (self.mine_count as isize) - (self.flagged_count as isize)
    }

    pub fn is_exploded(&self) -> bool {
        self.exploded
    }

    pub fn is_won(&self) -> bool {
        !self.exploded && self.remaining_safe_cells == 0
    }

    pub fn is_game_over(&self) -> bool {
        self.exploded || self.remaining_safe_cells == 0
    }

    pub fn cell_display_state(&self, coords: Coord2) -> Result<DisplayState> {
        Ok(self.grid.at(coords)?.display_state())
    }

    pub fn is_revealed(&self, coords: Coord2) -> Result<bool> {
        Ok(self.grid.at(coords)?.revealed)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let cell = self.grid.at_mut(coords)?;
        cell.flagged = !cell.flagged;

        Ok(if cell.flagged {
            self.flagged_count += 1;
            FlagOutcome::Flagged
        } else {
            self.flagged_count -= 1;
            FlagOutcome::Unflagged
        })
    }

    /// Opens a cell, flood-filling through zero-count cells.
    ///
    /// The first call places the mines. Flags do not protect a cell: an opened cell loses its
    /// flag. Once the game is won or lost, hidden cells answer [`RevealOutcome::GameOver`] and
    /// stay hidden.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        if self.is_game_over() {
            return Ok(if self.grid[coords].revealed {
                RevealOutcome::AlreadyRevealed
            } else {
                RevealOutcome::GameOver
            });
        }

        if !self.mines_placed {
            let placed = self
                .grid
                .place_mines(self.mine_count, coords, &mut self.selector);
            debug_assert_eq!(placed, self.mine_count);
            self.mines_placed = true;
            log::debug!("started at {:?}", coords);
        }

        if self.grid[coords].revealed {
            return Ok(RevealOutcome::AlreadyRevealed);
        }

        if self.open_cell(coords) {
            self.grid[coords].exploded = true;
            self.exploded = true;
            log::debug!("Mine hit at {:?}, game lost", coords);
            return Ok(RevealOutcome::Exploded);
        }

        if self.grid[coords].adjacent_mines == 0 {
            self.flood_fill(coords);
        }

        if self.remaining_safe_cells == 0 {
            log::debug!("All safe cells open, game won");
        }
        Ok(RevealOutcome::Opened)
    }

    /// Marks a hidden cell revealed, returning whether it holds a mine.
    fn open_cell(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.grid[coords];
        cell.revealed = true;
        if cell.flagged {
            cell.flagged = false;
            self.flagged_count -= 1;
        }

        if cell.has_mine {
            true
        } else {
            self.remaining_safe_cells -= 1;
            false
        }
    }

    /// Opens every hidden cell reachable from `origin` through zero-count cells.
    fn flood_fill(&mut self, origin: Coord2) {
        let mut to_visit: Vec<Coord2> = self
            .grid
            .iter_neighbors(origin)
            .filter(|&pos| !self.grid[pos].revealed)
            .collect();
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            origin,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop() {
            if self.grid[visit_coords].revealed {
                continue;
            }

            // neighbors of a zero cell never hold a mine
            let hit_mine = self.open_cell(visit_coords);
            debug_assert!(!hit_mine, "flood-fill reached a mine at {:?}", visit_coords);

            let visit_count = self.grid[visit_coords].adjacent_mines;
            log::trace!(
                "Flood opened cell at {:?}, mine count: {}",
                visit_coords,
                visit_count
            );

            if visit_count == 0 {
                to_visit.extend(
                    self.grid
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| !self.grid[pos].revealed),
                );
            }
        }
    }

    /// Shows the whole board, for use once the game is over. Counts and flags are left alone.
    pub fn reveal_all(&mut self) {
        for cell in self.grid.cells_mut() {
            cell.revealed = true;
        }
    }
}

/// Text board, one row per line, using [`DisplayState::glyph`].
impl<S> fmt::Display for Game<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for ((_, col), cell) in self.grid.iter() {
            f.write_char(cell.display_state().glyph())?;
            if col + 1 == self.grid.size() {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}
