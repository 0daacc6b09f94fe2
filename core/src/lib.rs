#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Board dimensions and mine count, validated once before a board is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: Coord,
    /// Number of rows.
    pub height: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub(crate) const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// Fails unless both dimensions are positive and at least one cell stays safe, so the first
    /// reveal can never hit a mine.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(width, height, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.mines >= self.total_cells() {
            Err(GameError::InvalidConfiguration)
        } else {
            Ok(())
        }
    }

    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// No mine was hit; `opened` cells changed to open.
    Safe { opened: CellCount },
    /// The revealed cell was a mine. Only that cell was opened.
    HitMine,
}

impl RevealOutcome {
    pub const fn is_mine_hit(self) -> bool {
        matches!(self, Self::HitMine)
    }
}
