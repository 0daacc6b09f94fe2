use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

/// Picks where mines go once the first cell has been chosen.
pub trait MinePlacer {
    /// Returns `config.mines` distinct positions, none of which is `exclude`.
    fn place(&mut self, config: BoardConfig, exclude: Coord2) -> Result<Vec<Coord2>>;
}
