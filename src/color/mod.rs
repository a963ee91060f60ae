//! Palette generation and per-tile color selection

/// Random grayscale or full-color palettes
pub mod palette;
/// Round-robin and uniform color-selection policies
pub mod selection;

pub use palette::{ColorMode, Palette};
pub use selection::{ColorSelector, ColorWeighting};
