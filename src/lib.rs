//! Procedural generator for square images built from uniformly colored tile frames
//!
//! Tiles on an N x N grid are claimed in random or row-major order, colored from
//! a random palette either round-robin or uniformly, and optionally mirrored
//! top-bottom or left-right so the result is symmetric.

#![forbid(unsafe_code)]

/// Fill orchestration, fill-order strategies and symmetry mapping
pub mod algorithm;
/// Palette generation and color selection
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Tile grid bookkeeping and the pixel canvas seam
pub mod spatial;

pub use io::error::{GenerationError, Result};
