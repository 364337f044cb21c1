use alloc::collections::VecDeque;
use core::ops::BitOr;
use core::time::Duration;
use ndarray::Array2;
use rand::prelude::*;

use crate::*;

/// A game board: mine layout, tile covers and the lifecycle they drive.
///
/// Player actions never fail. Anything that does not apply (out of bounds, finished game, wrong
/// tile cover) is reported as a `NoChange` outcome and leaves the board untouched.
#[derive(Clone, Debug)]
pub struct Board {
    layout: MineLayout,
    tiles: Array2<Tile>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: GameState,
    triggered_mine: Option<Coord2>,
    stopwatch: Stopwatch,
    rng: SmallRng,
}

impl Board {
    /// Random board seeded from OS entropy.
    pub fn create(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        Self::new(BoardConfig::new(rows, cols, mines)?)
    }

    pub fn new(config: BoardConfig) -> Result<Self> {
        Self::with_rng(config, SmallRng::from_os_rng())
    }

    /// Reproducible board, the seed also drives every later reset.
    pub fn with_seed(config: BoardConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: BoardConfig, mut rng: SmallRng) -> Result<Self> {
        config.validate()?;
        let layout = place_mines(config, &mut rng);
        Ok(Self::assemble(layout, rng))
    }

    /// Board over a prepared layout. Resets draw fresh random layouts.
    pub fn from_layout(layout: MineLayout) -> Result<Self> {
        layout.config().validate()?;
        Ok(Self::assemble(layout, SmallRng::from_os_rng()))
    }

    pub fn from_generator<G: MineGenerator>(config: BoardConfig, generator: G) -> Result<Self> {
        config.validate()?;
        Self::from_layout(generator.generate(config)?)
    }

    fn assemble(layout: MineLayout, rng: SmallRng) -> Self {
        let tiles = build_tiles(&layout);
        Self {
            layout,
            tiles,
            revealed_count: 0,
            flagged_count: 0,
            state: GameState::default(),
            triggered_mine: None,
            stopwatch: Stopwatch::default(),
            rng,
        }
    }

    pub fn status(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn config(&self) -> BoardConfig {
        self.layout.config()
    }

    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.layout.mine_count()
    }

    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Flags the player may still place, never negative since flags are capped at the mine count.
    pub fn remaining_flags(&self) -> CellCount {
        self.layout.mine_count().saturating_sub(self.flagged_count)
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn elapsed(&self) -> Duration {
        self.stopwatch.elapsed()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.layout.contains(coords)
    }

    pub fn tile(&self, coords: Coord2) -> Option<&Tile> {
        self.tiles.get(coords.to_nd_index())
    }

    pub fn tile_view(&self, coords: Coord2) -> Option<TileView> {
        self.tile(coords).map(Tile::view)
    }

    /// Every tile in row-major order.
    pub fn iter_views(&self) -> impl Iterator<Item = (Coord2, TileView)> + '_ {
        self.tiles.iter().map(|tile| (tile.coords(), tile.view()))
    }

    /// Whether a chord reveal at `coords` would open its neighbors.
    pub fn can_chord_reveal(&self, coords: Coord2) -> bool {
        if !self.state.accepts_moves() {
            return false;
        }

        match self.tile(coords) {
            Some(tile) if tile.is_revealed() => {
                tile.adjacent_mines() == self.count_flagged_neighbors(coords)
            }
            _ => false,
        }
    }

    /// Reveals a hidden tile, flooding out from it when it has no adjacent mines.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.contains(coords) {
            log::trace!("Ignoring reveal outside the board at {:?}", coords);
            return RevealOutcome::NoChange;
        }
        self.reveal_tile(coords)
    }

    /// Reveals every neighbor of a revealed tile once its flag count matches its mine count.
    ///
    /// Flags are trusted: a misplaced flag can send the chord into a mine.
    pub fn chord_reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.can_chord_reveal(coords) {
            return RevealOutcome::NoChange;
        }

        log::trace!("Chord reveal at {:?}", coords);
        self.layout
            .iter_neighbors(coords)
            .map(|neighbor_coords| self.reveal_tile(neighbor_coords))
            .fold(RevealOutcome::NoChange, BitOr::bitor)
    }

    /// Flags a hidden tile or clears an existing flag. Flags are capped at the mine count.
    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        if !self.state.accepts_moves() {
            return FlagOutcome::NoChange;
        }

        let at_cap = self.flagged_count >= self.layout.mine_count();
        let Some(tile) = self.tiles.get_mut(coords.to_nd_index()) else {
            return FlagOutcome::NoChange;
        };

        match tile.cover() {
            Cover::Flagged => {
                tile.set_cover(Cover::Hidden);
                self.flagged_count -= 1;
                FlagOutcome::Removed
            }
            Cover::Hidden if at_cap => {
                log::trace!("Flag cap reached, not flagging {:?}", coords);
                FlagOutcome::NoChange
            }
            Cover::Hidden => {
                tile.set_cover(Cover::Flagged);
                self.flagged_count += 1;
                FlagOutcome::Placed
            }
            Cover::Revealed => FlagOutcome::NoChange,
        }
    }

    /// Starts over with a freshly sampled layout of the same size and mine count.
    pub fn reset(&mut self) {
        let config = self.config();
        self.layout = place_mines(config, &mut self.rng);
        self.tiles = build_tiles(&self.layout);
        self.revealed_count = 0;
        self.flagged_count = 0;
        self.triggered_mine = None;
        self.raise(GameEvent::Reset);
        self.stopwatch.reset();
        log::debug!(
            "Board reset, {}x{} with {} mines",
            config.rows,
            config.cols,
            config.mines
        );
    }

    fn reveal_tile(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.state.accepts_moves() {
            return RevealOutcome::NoChange;
        }

        let tile = self.tiles[coords.to_nd_index()];
        if !tile.is_hidden() {
            return RevealOutcome::NoChange;
        }

        if self.state.is_not_started() {
            self.raise(GameEvent::Start);
        }

        if tile.is_mine() {
            self.tiles[coords.to_nd_index()].set_cover(Cover::Revealed);
            self.revealed_count += 1;
            self.triggered_mine = Some(coords);
            log::debug!("Revealed mine at {:?}", coords);
            self.raise(GameEvent::Lost);
            return RevealOutcome::HitMine;
        }

        self.flood_reveal(coords);

        if self.revealed_count == self.layout.safe_cell_count() {
            self.raise(GameEvent::Won);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Reveals `origin` and, through zero tiles, the connected region around it.
    fn flood_reveal(&mut self, origin: Coord2) {
        let mut to_visit = VecDeque::from([origin]);

        while let Some(visit_coords) = to_visit.pop_front() {
            let tile = &mut self.tiles[visit_coords.to_nd_index()];

            // flagged tiles stay put, revealed ones may be queued twice
            if !tile.is_hidden() {
                continue;
            }

            tile.set_cover(Cover::Revealed);
            let adjacent_mines = tile.adjacent_mines();
            self.revealed_count += 1;
            log::trace!(
                "Revealed tile at {:?}, adjacent mines: {}",
                visit_coords,
                adjacent_mines
            );

            if adjacent_mines == 0 {
                to_visit.extend(
                    self.layout
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| self.tiles[pos.to_nd_index()].is_hidden()),
                );
            }
        }
    }

    fn raise(&mut self, event: GameEvent) {
        if !self.state.apply(event) {
            return;
        }

        match self.state {
            GameState::Playing => self.stopwatch.start(),
            GameState::Won | GameState::Lost => self.stopwatch.stop(),
            GameState::NotStarted => self.stopwatch.reset(),
        }
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        // at most eight neighbors
        self.layout
            .iter_neighbors(coords)
            .filter(|&pos| self.tiles[pos.to_nd_index()].is_flagged())
            .count() as u8
    }
}

fn build_tiles(layout: &MineLayout) -> Array2<Tile> {
    Array2::from_shape_fn(layout.size().to_nd_index(), |index| {
        let coords = from_nd_index(index);
        Tile::new(
            coords,
            layout.contains_mine(coords),
            layout.adjacent_mine_count(coords),
        )
    })
}
