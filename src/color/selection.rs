//! Color-selection policies over a palette

use clap::ValueEnum;
use rand::Rng;

/// How palette colors are chosen for successive tiles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorWeighting {
    /// Round-robin through the palette so every color is used equally often
    Weighted,
    /// Independent uniform choice for every tile
    #[default]
    Uniform,
}

/// Stateful color picker
///
/// The selection counter doubles as the round-robin index, so over any run of
/// `m * K` weighted selections each of the `K` colors is chosen exactly `m` times.
#[derive(Clone, Debug)]
pub struct ColorSelector {
    weighting: ColorWeighting,
    selections: usize,
}

impl ColorSelector {
    /// Create a selector that has made no selections yet
    pub const fn new(weighting: ColorWeighting) -> Self {
        Self {
            weighting,
            selections: 0,
        }
    }

    /// Pick the next palette index in `[0, palette_len)`
    ///
    /// A zero-length palette always yields index 0.
    pub fn next_index<R: Rng + ?Sized>(&mut self, palette_len: usize, rng: &mut R) -> usize {
        let index = match (self.weighting, palette_len) {
            (_, 0) => 0,
            (ColorWeighting::Weighted, len) => self.selections % len,
            (ColorWeighting::Uniform, len) => rng.random_range(0..len),
        };
        self.selections += 1;
        index
    }

    /// Number of selections made so far
    pub const fn selections(&self) -> usize {
        self.selections
    }

    /// Active weighting policy
    pub const fn weighting(&self) -> ColorWeighting {
        self.weighting
    }
}
