//! Spatial data structures for the tile grid and the pixel canvas
//!
//! This module contains spatial-related functionality including:
//! - Tile fill-state tracking
//! - The canvas seam the painter writes pixels through

/// Pixel canvas trait and its `RgbaImage` implementation
pub mod canvas;
/// Tile grid fill-state management
pub mod grid;

pub use canvas::Canvas;
pub use grid::{TileGrid, TilePosition};
