//! Command-line interface for generating a single tile-frame image

use crate::algorithm::executor::{FillConfig, FrameFiller};
use crate::algorithm::fill::FillOrder;
use crate::algorithm::symmetry::Symmetry;
use crate::color::{ColorMode, ColorWeighting};
use crate::io::configuration::{
    DEFAULT_COLOR_COUNT, DEFAULT_OUTPUT_PATH, DEFAULT_SIDE_LENGTH, DEFAULT_TILE_SIZE,
    VISUALIZATION_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::export_canvas_as_png;
use crate::io::progress::ProgressManager;
use crate::spatial::canvas::new_canvas;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "framefill")]
#[command(
    author,
    version,
    about = "Generate a square image of randomly colored, optionally mirrored tiles"
)]
/// Command-line arguments for the image generator
pub struct Cli {
    /// Output PNG path
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Canvas side length in pixels
    #[arg(short, long, default_value_t = DEFAULT_SIDE_LENGTH)]
    pub size: u32,

    /// Tile side length in pixels (must divide the canvas size)
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Number of palette colors
    #[arg(short, long, default_value_t = DEFAULT_COLOR_COUNT)]
    pub colors: usize,

    /// Palette channel layout
    #[arg(short = 'm', long, value_enum, default_value_t = ColorMode::FullColor)]
    pub color_mode: ColorMode,

    /// Color selection policy
    #[arg(short, long, value_enum, default_value_t = ColorWeighting::Uniform)]
    pub weighting: ColorWeighting,

    /// Tile fill order
    #[arg(short, long, value_enum, default_value_t = FillOrder::Random)]
    pub fill_order: FillOrder,

    /// Mirror applied to every painted tile
    #[arg(short = 'y', long, value_enum, default_value_t = Symmetry::LeftRight)]
    pub symmetry: Symmetry,

    /// Stop after painting this many tiles (fills the whole grid when omitted)
    #[arg(short = 'n', long)]
    pub threshold: Option<usize>,

    /// Also export the fill progression as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the run configuration from the parsed flags
    pub const fn fill_config(&self) -> FillConfig {
        FillConfig {
            side_length: self.size,
            tile_size: self.tile_size,
            color_mode: self.color_mode,
            weighting: self.weighting,
            fill_order: self.fill_order,
            threshold: self.threshold,
            color_count: self.colors,
            symmetry: self.symmetry,
        }
    }
}

/// Runs one generation from parsed CLI arguments to files on disk
pub struct Generator {
    cli: Cli,
}

impl Generator {
    /// Create a generator for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the image and write all requested outputs
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or an export fails
    // Allow print for the run summary
    #[allow(clippy::print_stderr)]
    pub fn process(&self) -> Result<()> {
        let config = self.cli.fill_config();
        let rng = StdRng::seed_from_u64(wall_clock_seed());
        let mut filler = FrameFiller::new(config, rng)?;

        if self.cli.visualize {
            filler.enable_visualization();
        }

        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(&self.cli.output.display().to_string(), config.expected_tiles())
        } else {
            ProgressManager::hidden(config.expected_tiles())
        };

        let mut canvas = new_canvas(config.side_length);
        while filler.execute_iteration(&mut canvas) {
            progress.update(filler.tiles_painted);
        }
        progress.finish();

        export_canvas_as_png(&canvas, &self.cli.output)?;

        if self.cli.visualize {
            filler.export_visualization(&Self::get_visualization_path(&self.cli.output))?;
        }

        if !self.cli.quiet {
            let summary = filler.summary();
            eprintln!(
                "Wrote {} ({} of {} tiles, {} colors)",
                self.cli.output.display(),
                summary.tiles_painted,
                filler.grid().cell_count(),
                filler.palette().len()
            );
        }

        Ok(())
    }

    /// Path of the progression GIF that accompanies `output_path`
    pub fn get_visualization_path(output_path: &Path) -> PathBuf {
        let stem = output_path.file_stem().unwrap_or_default();
        let viz_name = format!("{}{VISUALIZATION_SUFFIX}.gif", stem.to_string_lossy());

        if let Some(parent) = output_path.parent() {
            parent.join(viz_name)
        } else {
            PathBuf::from(viz_name)
        }
    }
}

/// Seed derived from the current wall-clock time, so repeated runs differ
pub fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}
