use alloc::vec::Vec;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Picks `config.bombs` distinct coordinates uniformly at random, sorted row-major.
///
/// The randomness source is injected so that callers control reproducibility.
pub fn place_bombs<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Vec<Coord2>> {
    config.validate()?;

    let width = usize::from(config.width());
    let mut picks = index::sample(
        rng,
        usize::from(config.total_cells()),
        usize::from(config.bombs),
    )
    .into_vec();
    picks.sort_unstable();

    // indices are below `height * width`, both components fit `Coord`
    Ok(picks
        .into_iter()
        .map(|i| ((i / width) as Coord, (i % width) as Coord))
        .collect())
}

/// Generation strategy that places bombs purely at random from a seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let bombs = place_bombs(config, &mut rng)?;
        let board = Board::from_bomb_coords(config.size, &bombs)?;

        // double check bomb count
        if board.bomb_count() != config.bombs {
            log::warn!(
                "Generated board count mismatch, actual: {}, requested: {}",
                board.bomb_count(),
                config.bombs
            );
        }
        log::debug!("Generated {:?} from seed {}", config, self.seed);
        Ok(board)
    }
}
