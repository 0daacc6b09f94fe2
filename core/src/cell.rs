use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of a single cell.
///
/// Valid transitions:
/// - Closed -> Open
/// - Closed -> Flagged
/// - Flagged -> Closed
///
/// `Open` is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Closed,
    Open,
    Flagged,
}

impl CellState {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Closed
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Closed => "closed",
            Self::Open => "open",
            Self::Flagged => "flagged",
        })
    }
}

/// One grid position. Bounds are never checked here, the board owns that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    position: Coord2,
    state: CellState,
    is_mine: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub(crate) const fn new(position: Coord2) -> Self {
        Self {
            position,
            state: CellState::Closed,
            is_mine: false,
            adjacent_mines: 0,
        }
    }

    pub const fn position(&self) -> Coord2 {
        self.position
    }

    pub const fn state(&self) -> CellState {
        self.state
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    /// Number of mines among the in-bounds 8-neighbours.
    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub const fn is_flagged(&self) -> bool {
        self.state.is_flagged()
    }

    pub const fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    pub(crate) fn plant_mine(&mut self) {
        self.is_mine = true;
    }

    pub(crate) fn increment_adjacent(&mut self) {
        self.adjacent_mines += 1;
    }

    /// Single character used by the text rendering of a board.
    pub const fn symbol(&self) -> char {
        match self.state {
            CellState::Closed => '.',
            CellState::Flagged => 'F',
            CellState::Open if self.is_mine => 'X',
            // at most 8 neighbours, always a single digit
            CellState::Open => (b'0' + self.adjacent_mines) as char,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
