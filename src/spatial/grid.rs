//! Fill-state bookkeeping for the square tile grid
//!
//! The grid records only whether a tile has been claimed. Colors live on the
//! canvas; a set cell is never revisited within a generation run.

use ndarray::Array2;

/// Grid coordinate of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TilePosition {
    /// Row index, grows downwards
    pub row: usize,
    /// Column index, grows to the right
    pub col: usize,
}

impl TilePosition {
    /// Create a tile position from grid indices
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Top-left pixel of the tile footprint as `(x, y)`
    pub const fn pixel_origin(self, tile_size: u32) -> (u32, u32) {
        (self.col as u32 * tile_size, self.row as u32 * tile_size)
    }
}

/// Square matrix of tile fill states
#[derive(Debug, Clone)]
pub struct TileGrid {
    /// `true` once a tile has been claimed
    cells: Array2<bool>,
    /// Number of claimed tiles, kept in step with `cells`
    set_count: usize,
}

impl TileGrid {
    /// Create a grid with `side * side` unset tiles
    pub fn new(side: usize) -> Self {
        Self {
            cells: Array2::from_elem((side, side), false),
            set_count: 0,
        }
    }

    /// Number of tiles along one side
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of tiles
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of tiles already claimed
    pub const fn set_count(&self) -> usize {
        self.set_count
    }

    /// Check whether a position lies on the grid
    pub fn contains(&self, position: TilePosition) -> bool {
        position.row < self.side() && position.col < self.side()
    }

    /// Claim a tile
    ///
    /// Returns `true` if the tile was unset before this call. Re-marking a set
    /// tile or marking an off-grid position leaves the grid unchanged.
    pub fn mark_set(&mut self, position: TilePosition) -> bool {
        match self.cells.get_mut([position.row, position.col]) {
            Some(cell) if !*cell => {
                *cell = true;
                self.set_count += 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether a tile has been claimed
    pub fn is_set(&self, position: TilePosition) -> bool {
        self.cells
            .get([position.row, position.col])
            .copied()
            .unwrap_or(false)
    }

    /// Check whether every tile has been claimed
    pub fn all_set(&self) -> bool {
        self.set_count == self.cell_count()
    }

    /// All unclaimed tiles in row-major order
    pub fn unset_positions(&self) -> Vec<TilePosition> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &set)| !set)
            .map(|((row, col), _)| TilePosition::new(row, col))
            .collect()
    }
}
