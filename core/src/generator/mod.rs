use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    fn generate(self, config: BoardConfig) -> Result<MineLayout>;
}

/// Places mines at explicit coordinates, for replays and deterministic setups.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, config: BoardConfig) -> Result<MineLayout> {
        let layout = MineLayout::from_mine_coords(config.size(), &self.mines)?;
        if layout.mine_count() != config.mines {
            log::warn!(
                "Fixed layout mine count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines
            );
        }
        Ok(layout)
    }
}
