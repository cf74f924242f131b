use serde::{Deserialize, Serialize};

/// State of a single square on the board.
///
/// A cell is never flagged and exposed at the same time, exposure is never
/// undone, and the bomb bit is fixed once the board is built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    is_bomb: bool,
    is_flagged: bool,
    is_exposed: bool,
    adjacent_bombs: Option<u8>,
}

impl Cell {
    pub(crate) const fn bomb() -> Self {
        Self {
            is_bomb: true,
            is_flagged: false,
            is_exposed: false,
            adjacent_bombs: None,
        }
    }

    pub const fn is_bomb(self) -> bool {
        self.is_bomb
    }

    pub const fn is_flagged(self) -> bool {
        self.is_flagged
    }

    pub const fn is_exposed(self) -> bool {
        self.is_exposed
    }

    /// Whether a reveal may act on this cell.
    pub const fn is_revealable(self) -> bool {
        !self.is_flagged && !self.is_exposed
    }

    /// Adjacent bomb count, only known once a safe cell was exposed.
    pub const fn adjacent_bombs(self) -> Option<u8> {
        self.adjacent_bombs
    }

    pub(crate) fn expose(&mut self, adjacent_bombs: Option<u8>) {
        debug_assert!(self.is_revealable(), "exposing a flagged or exposed cell");
        self.is_exposed = true;
        self.adjacent_bombs = adjacent_bombs;
    }

    /// Flips the flag and returns the new value.
    pub(crate) fn toggle_flag(&mut self) -> bool {
        debug_assert!(!self.is_exposed, "flagging an exposed cell");
        self.is_flagged = !self.is_flagged;
        self.is_flagged
    }

    pub fn display_state(self) -> DisplayState {
        use DisplayState::*;

        match self {
            Cell {
                is_flagged: true, ..
            } => Flagged,
            Cell {
                is_exposed: false, ..
            } => Hidden,
            Cell { is_bomb: true, .. } => ExposedBomb,
            Cell {
                adjacent_bombs: None | Some(0),
                ..
            } => ExposedBlank,
            Cell {
                adjacent_bombs: Some(count),
                ..
            } => ExposedNumber(count),
        }
    }
}

/// What the presentation layer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayState {
    Hidden,
    Flagged,
    ExposedBlank,
    ExposedNumber(u8),
    ExposedBomb,
}

impl DisplayState {
    // whether the cell is visually open
    pub const fn is_exposed(self) -> bool {
        use DisplayState::*;
        match self {
            Hidden => false,
            Flagged => false,
            ExposedBlank => true,
            ExposedNumber(_) => true,
            ExposedBomb => true,
        }
    }

    pub const fn glyph(self) -> char {
        use DisplayState::*;
        match self {
            Hidden => '.',
            Flagged => 'F',
            ExposedBlank => ' ',
            ExposedNumber(count) => (b'0' + count) as char,
            ExposedBomb => '*',
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_cells_do_not_leak_contents() {
        assert_eq!(Cell::default().display_state(), DisplayState::Hidden);
        assert_eq!(Cell::bomb().display_state(), DisplayState::Hidden);
    }

    #[test]
    fn exposed_cells_show_count_or_bomb() {
        let mut blank = Cell::default();
        blank.expose(Some(0));
        assert_eq!(blank.display_state(), DisplayState::ExposedBlank);

        let mut numbered = Cell::default();
        numbered.expose(Some(3));
        assert_eq!(numbered.display_state(), DisplayState::ExposedNumber(3));
        assert_eq!(numbered.display_state().glyph(), '3');

        let mut bomb = Cell::bomb();
        bomb.expose(None);
        assert_eq!(bomb.display_state(), DisplayState::ExposedBomb);
    }

    #[test]
    fn toggle_flag_twice_restores_cell() {
        let mut cell = Cell::default();
        assert!(cell.toggle_flag());
        assert_eq!(cell.display_state(), DisplayState::Flagged);
        assert!(!cell.is_revealable());
        assert!(!cell.toggle_flag());
        assert_eq!(cell, Cell::default());
    }
}
