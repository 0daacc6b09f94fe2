use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Uniform placement without replacement over every cell except the excluded one.
#[derive(Clone, Debug)]
pub struct RandomMinePlacer {
    rng: SmallRng,
}

impl RandomMinePlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place(&mut self, config: BoardConfig, exclude: Coord2) -> Result<Vec<Coord2>> {
        let cols = usize::from(config.width);
        let eligible = usize::from(config.total_cells()).saturating_sub(1);
        let wanted = usize::from(config.mines);

        if wanted > eligible {
            log::warn!(
                "Cannot place mines, requested {} but only {} cells are free",
                wanted,
                eligible
            );
            return Err(GameError::InsufficientSpace);
        }

        let excluded = usize::from(exclude.0) * cols + usize::from(exclude.1);
        let positions = index::sample(&mut self.rng, eligible, wanted)
            .into_iter()
            // skip over the excluded cell so the pool stays contiguous
            .map(|i| if i >= excluded { i + 1 } else { i })
            .map(|i| ((i / cols) as Coord, (i % cols) as Coord))
            .collect();

        Ok(positions)
    }
}
