//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Default canvas side length in pixels
pub const DEFAULT_SIDE_LENGTH: u32 = 250;

/// Default tile side length in pixels
pub const DEFAULT_TILE_SIZE: u32 = 50;

/// Default number of palette colors
pub const DEFAULT_COLOR_COUNT: usize = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas side length in pixels
pub const MAX_SIDE_LENGTH: u32 = 16_384;

// Past this many collisions the random fill samples from the remaining cells directly
/// Maximum random draws before falling back to sampling unset tiles
pub const MAX_RANDOM_DRAWS: usize = 64;

// Output settings
/// Default output image path
pub const DEFAULT_OUTPUT_PATH: &str = "image.png";
/// Suffix added to the output stem for the progression GIF
pub const VISUALIZATION_SUFFIX: &str = "_visualization";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 120;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Multiplier applied to the frame delay for the final, held frame
pub const FINAL_FRAME_HOLD_FACTOR: u32 = 25;
