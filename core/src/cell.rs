use core::fmt;
use serde::{Deserialize, Serialize};

/// One board position with its hidden and visible state.
///
/// `adjacent_mines` is the raw count of neighboring mines and is only shown for cells without a
/// mine. `exploded` is only ever set on a revealed mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub has_mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    pub exploded: bool,
    pub adjacent_mines: u8,
}

impl Cell {
    pub const fn display_state(self) -> DisplayState {
        use DisplayState::*;

        match self {
            Cell {
                revealed: true,
                exploded: true,
                ..
            } => ExplodedMine,
            Cell {
                revealed: true,
                has_mine: true,
                ..
            } => RevealedMine,
            Cell {
                revealed: true,
                adjacent_mines,
                ..
            } => Revealed(adjacent_mines),
            Cell { flagged: true, .. } => Flagged,
            _ => Hidden,
        }
    }
}

/// What a presentation layer should draw for a cell.
///
/// Revealed state always wins over the flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayState {
    Hidden,
    Flagged,
    Revealed(u8),
    RevealedMine,
    ExplodedMine,
}

impl DisplayState {
    pub const fn is_revealed(self) -> bool {
        !matches!(self, Self::Hidden | Self::Flagged)
    }

    /// Single character used by the text board. Counts above 8 cannot occur on a real board and
    /// draw as `#`.
    pub const fn glyph(self) -> char {
        use DisplayState::*;

        match self {
            Hidden => '?',
            Flagged => '!',
            ExplodedMine => 'X',
            RevealedMine => '*',
            Revealed(0) => ' ',
            Revealed(count @ 1..=8) => (b'0' + count) as char,
            Revealed(_) => '#',
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::Hidden
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        f.write_char(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn flag_shows_only_while_hidden() {
        let mut cell = Cell {
            flagged: true,
            adjacent_mines: 2,
            ..Default::default()
        };
        assert_eq!(cell.display_state(), DisplayState::Flagged);

        cell.revealed = true;
        assert_eq!(cell.display_state(), DisplayState::Revealed(2));
    }

    #[test]
    fn mines_distinguish_exploded_from_revealed() {
        let mut cell = Cell {
            has_mine: true,
            ..Default::default()
        };
        assert_eq!(cell.display_state(), DisplayState::Hidden);

        cell.revealed = true;
        assert_eq!(cell.display_state(), DisplayState::RevealedMine);

        cell.exploded = true;
        assert_eq!(cell.display_state(), DisplayState::ExplodedMine);
    }

    #[test]
    fn glyphs_match_board_symbols() {
        use DisplayState::*;

        let rendered: alloc::string::String = [
            Hidden,
            Flagged,
            Revealed(0),
            Revealed(3),
            Revealed(8),
            RevealedMine,
            ExplodedMine,
        ]
        .iter()
        .map(|state| state.to_string())
        .collect();

        assert_eq!(rendered, "?! 38*X");
    }

    #[test]
    fn impossible_counts_do_not_overflow() {
        assert_eq!(DisplayState::Revealed(9).glyph(), '#');
        assert_eq!(DisplayState::Revealed(208).glyph(), '#');
        assert_eq!(DisplayState::Revealed(u8::MAX).glyph(), '#');
    }
}
