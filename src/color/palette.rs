//! Random palette generation

use crate::io::error::{Result, invalid_parameter};
use clap::ValueEnum;
use image::Rgb;
use rand::Rng;

/// Channel layout of generated palette colors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Equal red, green and blue intensity
    Grayscale,
    /// Independent red, green and blue channels
    #[default]
    FullColor,
}

/// Ordered, immutable set of candidate tile colors
///
/// Never empty: both constructors reject a zero-length palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb<u8>>,
}

impl Palette {
    /// Draw `count` uniformly random colors
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero
    pub fn generate<R: Rng + ?Sized>(count: usize, mode: ColorMode, rng: &mut R) -> Result<Self> {
        let colors = (0..count)
            .map(|_| match mode {
                ColorMode::Grayscale => {
                    let value = rng.random::<u8>();
                    Rgb([value, value, value])
                }
                ColorMode::FullColor => Rgb([rng.random(), rng.random(), rng.random()]),
            })
            .collect();
        Self::from_colors(colors)
    }

    /// Wrap an explicit list of colors
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` is empty
    pub fn from_colors(colors: Vec<Rgb<u8>>) -> Result<Self> {
        if colors.is_empty() {
            return Err(invalid_parameter(
                "colors",
                &0,
                &"a palette needs at least one color",
            ));
        }
        Ok(Self { colors })
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check whether the palette has no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, wrapping around the palette
    // Non-empty by construction, so the reduced index is always in range
    #[allow(clippy::indexing_slicing)]
    pub fn color_at(&self, index: usize) -> Rgb<u8> {
        self.colors[index % self.colors.len()]
    }

    /// All colors in palette order
    pub fn colors(&self) -> &[Rgb<u8>] {
        &self.colors
    }

    /// Channel-wise mean of all colors, used as the background of progression frames
    pub fn average(&self) -> Rgb<u8> {
        let mut sums = [0u64; 3];
        for color in &self.colors {
            for (sum, &channel) in sums.iter_mut().zip(color.0.iter()) {
                *sum += u64::from(channel);
            }
        }
        let count = self.colors.len().max(1) as u64;
        Rgb(sums.map(|sum| (sum / count) as u8))
    }
}
