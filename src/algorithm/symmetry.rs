use crate::spatial::{TileGrid, TilePosition};
use clap::ValueEnum;

/// Reflection applied to every painted tile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Symmetry {
    /// No mirroring
    None,
    /// Reflect rows about the horizontal midline
    TopBottom,
    /// Reflect columns about the vertical midline
    #[default]
    LeftRight,
}

impl Symmetry {
    /// Mirrored counterpart of `position` on a grid with `side` tiles per side
    ///
    /// Returns `None` when no mirroring is configured. On odd grids a midline
    /// tile maps onto itself.
    pub const fn mirror(self, position: TilePosition, side: usize) -> Option<TilePosition> {
        match self {
            Self::None => None,
            Self::TopBottom => Some(TilePosition::new(
                reflect_index(position.row, side),
                position.col,
            )),
            Self::LeftRight => Some(TilePosition::new(
                position.row,
                reflect_index(position.col, side),
            )),
        }
    }

    /// Check whether a tile is its own mirror image
    pub const fn is_self_symmetric(self, position: TilePosition, side: usize) -> bool {
        match self.mirror(position, side) {
            Some(mirrored) => mirrored.row == position.row && mirrored.col == position.col,
            None => false,
        }
    }
}

/// Reflect an index about the center of `0..side`
pub const fn reflect_index(index: usize, side: usize) -> usize {
    side.saturating_sub(1).saturating_sub(index)
}

/// Claim the mirror of an already painted tile
///
/// Returns the mirror position only when it is a distinct tile that still needs
/// painting; self-symmetric tiles and disabled symmetry yield `None`.
pub fn claim_mirror(
    symmetry: Symmetry,
    position: TilePosition,
    grid: &mut TileGrid,
) -> Option<TilePosition> {
    let side = grid.side();
    if symmetry.is_self_symmetric(position, side) {
        return None;
    }
    let mirrored = symmetry.mirror(position, side)?;
    grid.mark_set(mirrored);
    Some(mirrored)
}
