use serde::{Deserialize, Serialize};

use crate::*;

/// What the player currently sees on top of a tile.
///
/// Keeping this as one value makes "revealed and flagged" unrepresentable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cover {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

/// One grid cell: fixed mine placement plus the player-controlled cover.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    coords: Coord2,
    mine: bool,
    adjacent_mines: u8,
    cover: Cover,
}

impl Tile {
    pub(crate) const fn new(coords: Coord2, mine: bool, adjacent_mines: u8) -> Self {
        Self {
            coords,
            mine,
            adjacent_mines,
            cover: Cover::Hidden,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn row(&self) -> Coord {
        self.coords.0
    }

    pub const fn col(&self) -> Coord {
        self.coords.1
    }

    pub const fn is_mine(&self) -> bool {
        self.mine
    }

    /// Mines among the up-to-eight surrounding tiles, fixed for the layout.
    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn cover(&self) -> Cover {
        self.cover
    }

    pub const fn is_hidden(&self) -> bool {
        matches!(self.cover, Cover::Hidden)
    }

    pub const fn is_flagged(&self) -> bool {
        matches!(self.cover, Cover::Flagged)
    }

    pub const fn is_revealed(&self) -> bool {
        matches!(self.cover, Cover::Revealed)
    }

    pub(crate) fn set_cover(&mut self, cover: Cover) {
        self.cover = cover;
    }

    pub const fn view(&self) -> TileView {
        match self.cover {
            Cover::Hidden => TileView::Hidden,
            Cover::Flagged => TileView::Flagged,
            Cover::Revealed => TileView::Revealed {
                mine: self.mine,
                adjacent_mines: self.adjacent_mines,
            },
        }
    }
}

/// Player-visible projection of a tile, what a renderer draws.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    Hidden,
    Flagged,
    Revealed { mine: bool, adjacent_mines: u8 },
}

impl Default for TileView {
    fn default() -> Self {
        Self::Hidden
    }
}
