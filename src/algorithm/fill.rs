//! Fill-order strategies deciding which tile is painted next

use crate::io::configuration::MAX_RANDOM_DRAWS;
use crate::spatial::{TileGrid, TilePosition};
use clap::ValueEnum;
use rand::Rng;

/// Order in which tiles are claimed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FillOrder {
    /// Uniformly random unset tile
    #[default]
    Random,
    /// Row-major scan starting at the top-left tile
    Sequential,
}

/// Row-major scan position for sequential fill
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FillCursor {
    /// Row of the next tile to visit
    pub row: usize,
    /// Column of the next tile to visit
    pub col: usize,
    /// Set once the cursor has wrapped back to the origin
    pub exhausted: bool,
}

impl FillCursor {
    /// Step one column to the right, wrapping into the next row
    fn advance(&mut self, side: usize) {
        if side == 0 {
            self.exhausted = true;
            return;
        }
        self.col = (self.col + 1) % side;
        if self.col == 0 {
            self.row = (self.row + 1) % side;
        }
        if self.row == 0 && self.col == 0 {
            self.exhausted = true;
        }
    }
}

/// Tile chooser for one generation run
///
/// Every tile handed out is marked set on the grid before it is returned, so no
/// tile is ever produced twice.
#[derive(Clone, Debug)]
pub enum FillStrategy {
    /// Random choice among unset tiles
    Random,
    /// Row-major scan that skips tiles already claimed by mirroring
    Sequential(FillCursor),
}

impl FillStrategy {
    /// Create a fresh strategy for the given order
    pub fn new(order: FillOrder) -> Self {
        match order {
            FillOrder::Random => Self::Random,
            FillOrder::Sequential => Self::Sequential(FillCursor::default()),
        }
    }

    /// Check whether the strategy has nothing left to hand out
    pub fn is_exhausted(&self, grid: &TileGrid) -> bool {
        match self {
            Self::Random => grid.all_set(),
            Self::Sequential(cursor) => cursor.exhausted || grid.cell_count() == 0,
        }
    }

    /// Claim and return the next tile, or `None` once exhausted
    pub fn next_tile<R: Rng + ?Sized>(
        &mut self,
        grid: &mut TileGrid,
        rng: &mut R,
    ) -> Option<TilePosition> {
        match self {
            Self::Random => random_unset_tile(grid, rng),
            Self::Sequential(cursor) => next_sequential_tile(cursor, grid),
        }
    }
}

/// Draw a uniformly random unset tile and mark it set
///
/// Rejection sampling for up to `MAX_RANDOM_DRAWS` attempts, then a direct draw
/// from the remaining unset tiles. Both are uniform over unset tiles.
pub fn random_unset_tile<R: Rng + ?Sized>(
    grid: &mut TileGrid,
    rng: &mut R,
) -> Option<TilePosition> {
    if grid.all_set() {
        return None;
    }

    let side = grid.side();
    for _ in 0..MAX_RANDOM_DRAWS {
        let position = TilePosition::new(rng.random_range(0..side), rng.random_range(0..side));
        if grid.mark_set(position) {
            return Some(position);
        }
    }

    let remaining = grid.unset_positions();
    let position = remaining
        .get(rng.random_range(0..remaining.len()))
        .copied()?;
    grid.mark_set(position);
    Some(position)
}

/// Advance the cursor to the next unset tile and mark it set
pub fn next_sequential_tile(cursor: &mut FillCursor, grid: &mut TileGrid) -> Option<TilePosition> {
    let side = grid.side();
    while !cursor.exhausted {
        let position = TilePosition::new(cursor.row, cursor.col);
        cursor.advance(side);
        if grid.mark_set(position) {
            return Some(position);
        }
    }
    None
}
