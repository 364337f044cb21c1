#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use state::*;
pub use tile::*;
pub use timer::*;
pub use types::*;

mod board;
mod error;
mod generator;
mod layout;
mod state;
mod tile;
mod timer;
mod types;

/// Board dimensions and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    /// Checks `rows > 0`, `cols > 0` and `0 < mines < rows * cols`.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(BoardError::InvalidDimensions);
        }
        if self.mines == 0 {
            return Err(BoardError::NoMines);
        }
        let cells = self.total_cells();
        if self.mines >= cells {
            return Err(BoardError::TooManyMines {
                mines: self.mines,
                cells,
            });
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_count(self.size())
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

/// Classic presets plus a custom size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    /// 9x9, 10 mines
    Beginner,
    /// 16x16, 40 mines
    #[default]
    Intermediate,
    /// 16 rows by 30 columns, 99 mines
    Expert,
    Custom(BoardConfig),
}

impl Difficulty {
    pub const BEGINNER: BoardConfig = BoardConfig::new_unchecked(9, 9, 10);
    pub const INTERMEDIATE: BoardConfig = BoardConfig::new_unchecked(16, 16, 40);
    pub const EXPERT: BoardConfig = BoardConfig::new_unchecked(16, 30, 99);

    pub const fn config(self) -> BoardConfig {
        match self {
            Self::Beginner => Self::BEGINNER,
            Self::Intermediate => Self::INTERMEDIATE,
            Self::Expert => Self::EXPERT,
            Self::Custom(config) => config,
        }
    }
}

impl From<Difficulty> for BoardConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

/// Outcome of toggling a flag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Placed,
    Removed,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of revealing one or more tiles
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// Ordering used when merging, a lost game outranks everything else.
    const fn weight(self) -> u8 {
        match self {
            Self::NoChange => 0,
            Self::Revealed => 1,
            Self::Won => 2,
            Self::HitMine => 3,
        }
    }
}

/// Merges the outcomes of a chord reveal, keeping the most significant one
impl BitOr for RevealOutcome {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        if rhs.weight() > self.weight() { rhs } else { self }
    }
}
