use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Uniformly random placement, every subset of `config.mines` cells is equally likely.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: BoardConfig) -> Result<MineLayout> {
        config.validate()?;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        Ok(place_mines(config, &mut rng))
    }
}

/// Samples `config.mines` distinct cells without replacement.
///
/// Expects a validated config; a mine count above the cell count fills the board.
pub fn place_mines<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> MineLayout {
    let total_cells = usize::from(config.total_cells());
    let requested = usize::from(config.mines);
    if requested > total_cells {
        log::warn!(
            "Minefield overfull, requested {} but only fits {}",
            requested,
            total_cells
        );
    }

    let cols = usize::from(config.cols);
    let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
    for index in rand::seq::index::sample(rng, total_cells, requested.min(total_cells)) {
        mine_mask[[index / cols, index % cols]] = true;
    }

    let layout = MineLayout::from_checked_mask(mine_mask);
    log::debug!(
        "Placed {} mines on a {}x{} board",
        layout.mine_count(),
        config.rows,
        config.cols
    );
    layout
}
