use crate::{
    algorithm::fill::{FillOrder, FillStrategy},
    algorithm::symmetry::{Symmetry, claim_mirror},
    color::{ColorMode, ColorSelector, ColorWeighting, Palette},
    io::configuration::{
        DEFAULT_COLOR_COUNT, DEFAULT_SIDE_LENGTH, DEFAULT_TILE_SIZE, GIF_FRAME_DELAY_MS,
        MAX_SIDE_LENGTH,
    },
    io::error::{GenerationError, Result, invalid_parameter},
    io::visualization::VisualizationCapture,
    spatial::{Canvas, TileGrid, TilePosition},
};
use image::Rgb;
use rand::Rng;
use std::path::Path;

/// Parameters controlling a single generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillConfig {
    /// Canvas side length in pixels
    pub side_length: u32,
    /// Tile side length in pixels (must divide `side_length`)
    pub tile_size: u32,
    /// Grayscale or full-color palette
    pub color_mode: ColorMode,
    /// Round-robin or uniform color selection
    pub weighting: ColorWeighting,
    /// Random or row-major tile order
    pub fill_order: FillOrder,
    /// Maximum tiles to paint; `None` fills the whole grid
    pub threshold: Option<usize>,
    /// Number of palette colors
    pub color_count: usize,
    /// Mirror applied to every painted tile
    pub symmetry: Symmetry,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            side_length: DEFAULT_SIDE_LENGTH,
            tile_size: DEFAULT_TILE_SIZE,
            color_mode: ColorMode::default(),
            weighting: ColorWeighting::default(),
            fill_order: FillOrder::default(),
            threshold: None,
            color_count: DEFAULT_COLOR_COUNT,
            symmetry: Symmetry::default(),
        }
    }
}

impl FillConfig {
    /// Check configuration preconditions and return the grid side length in tiles
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The side length is zero or exceeds `MAX_SIDE_LENGTH`
    /// - The tile size is zero, larger than the canvas, or does not divide it
    /// - The palette would be empty
    pub fn validate(&self) -> Result<usize> {
        if self.side_length == 0 || self.side_length > MAX_SIDE_LENGTH {
            return Err(invalid_parameter(
                "side_length",
                &self.side_length,
                &format!("must be between 1 and {MAX_SIDE_LENGTH}"),
            ));
        }
        if self.tile_size == 0 || self.tile_size > self.side_length {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &format!("must be between 1 and the side length {}", self.side_length),
            ));
        }
        if self.side_length % self.tile_size != 0 {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &format!("must evenly divide the side length {}", self.side_length),
            ));
        }
        if self.color_count == 0 {
            return Err(invalid_parameter(
                "color_count",
                &self.color_count,
                &"at least one color is required",
            ));
        }
        Ok(self.grid_side())
    }

    /// Number of tiles along one side of the canvas
    pub const fn grid_side(&self) -> usize {
        match self.side_length.checked_div(self.tile_size) {
            Some(side) => side as usize,
            None => 0,
        }
    }

    /// Number of tiles a complete run will paint
    pub const fn expected_tiles(&self) -> usize {
        let total = self.grid_side() * self.grid_side();
        match self.threshold {
            Some(limit) if limit < total => limit,
            _ => total,
        }
    }
}

/// Outcome of one orchestrator iteration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintedTile {
    /// Tile chosen by the fill strategy
    pub position: TilePosition,
    /// Distinct mirror tile painted alongside, if any
    pub mirror: Option<TilePosition>,
    /// Palette index used for both tiles
    pub color_index: usize,
    /// Color used for both tiles
    pub color: Rgb<u8>,
}

/// Totals reported once a run has finished
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillSummary {
    /// Distinct tiles painted (progress measured against the threshold)
    pub tiles_painted: usize,
    /// Color selections made (one per iteration)
    pub selections: usize,
    /// Painted tiles per palette index
    pub color_usage: Vec<usize>,
    /// Whether every grid tile ended up set
    pub grid_complete: bool,
}

/// Frame-fill orchestrator owning all state of one generation run
///
/// Drives the fill strategy, color selection and symmetry mapping, painting each
/// chosen tile onto a caller-supplied canvas until the stop condition holds.
pub struct FrameFiller<R: Rng> {
    /// Validated run parameters
    pub config: FillConfig,
    /// Tile fill states
    pub grid: TileGrid,
    /// Colors available for this run
    pub palette: Palette,
    /// Tile order strategy
    pub strategy: FillStrategy,
    /// Color picker
    pub selector: ColorSelector,
    /// Random number generator for tile and color draws
    pub rng: R,
    /// Distinct tiles painted so far
    pub tiles_painted: usize,
    /// Painted tiles per palette index
    pub color_usage: Vec<usize>,
    /// Current orchestrator iteration
    pub iteration: usize,
    /// Optional visualization capture
    pub visualization: Option<VisualizationCapture>,
}

impl<R: Rng> FrameFiller<R> {
    /// Create a run with a freshly generated palette
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: FillConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let palette = Palette::generate(config.color_count, config.color_mode, &mut rng)?;
        Self::with_palette(config, palette, rng)
    }

    /// Create a run with an explicit palette
    ///
    /// `config.color_count` and `config.color_mode` are ignored in favor of the
    /// supplied palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn with_palette(config: FillConfig, palette: Palette, rng: R) -> Result<Self> {
        let config = FillConfig {
            color_count: palette.len(),
            ..config
        };
        let grid_side = config.validate()?;

        Ok(Self {
            config,
            grid: TileGrid::new(grid_side),
            color_usage: vec![0; palette.len()],
            palette,
            strategy: FillStrategy::new(config.fill_order),
            selector: ColorSelector::new(config.weighting),
            rng,
            tiles_painted: 0,
            iteration: 0,
            visualization: None,
        })
    }

    /// Access the tile grid
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Access the run palette
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Enable recording of every painted tile for GIF export
    pub fn enable_visualization(&mut self) {
        self.visualization = Some(VisualizationCapture::new(
            self.config.side_length,
            self.config.tile_size,
            self.palette.average(),
            self.config.expected_tiles(),
        ));
    }

    /// Export the fill progression as a GIF if visualization is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Visualization was not enabled
    /// - GIF export fails
    pub fn export_visualization(&self, output_path: &Path) -> Result<()> {
        self.visualization.as_ref().map_or_else(
            || {
                Err(GenerationError::InvalidParameter {
                    parameter: "visualization",
                    value: "disabled".to_string(),
                    reason: "Visualization was not enabled for this run".to_string(),
                })
            },
            |viz| viz.export_gif(output_path, GIF_FRAME_DELAY_MS),
        )
    }

    /// Check the stop condition
    ///
    /// Done once the threshold is reached or the strategy has no tiles left.
    pub fn is_done(&self) -> bool {
        self.config
            .threshold
            .is_some_and(|limit| self.tiles_painted >= limit)
            || self.strategy.is_exhausted(&self.grid)
    }

    /// Execute a single iteration of the fill loop
    ///
    /// Returns `false` once the run is done and nothing was painted.
    pub fn execute_iteration<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> bool {
        self.run_iteration(canvas).is_some()
    }

    /// Run a single iteration and report what was painted
    pub fn run_iteration<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> Option<PaintedTile> {
        // Phase 1: Check if we're already complete
        if self.is_done() {
            return None;
        }

        // Phase 2: Claim the next tile
        let position = self.strategy.next_tile(&mut self.grid, &mut self.rng)?;
        self.iteration += 1;

        // Phase 3: Pick its color
        let color_index = self
            .selector
            .next_index(self.palette.len(), &mut self.rng);
        let color = self.palette.color_at(color_index);

        // Phase 4: Paint the tile and its mirror
        self.paint(canvas, position, color_index, color);
        let mirror = claim_mirror(self.config.symmetry, position, &mut self.grid);
        if let Some(mirrored) = mirror {
            self.paint(canvas, mirrored, color_index, color);
        }

        Some(PaintedTile {
            position,
            mirror,
            color_index,
            color,
        })
    }

    /// Run until the stop condition holds
    pub fn run<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> FillSummary {
        while self.execute_iteration(canvas) {}
        self.summary()
    }

    /// Totals for the run so far
    pub fn summary(&self) -> FillSummary {
        FillSummary {
            tiles_painted: self.tiles_painted,
            selections: self.selector.selections(),
            color_usage: self.color_usage.clone(),
            grid_complete: self.grid.all_set(),
        }
    }

    fn paint<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        position: TilePosition,
        color_index: usize,
        color: Rgb<u8>,
    ) {
        canvas.fill_square(
            position.pixel_origin(self.config.tile_size),
            self.config.tile_size,
            color,
        );
        self.tiles_painted += 1;
        if let Some(usage) = self.color_usage.get_mut(color_index) {
            *usage += 1;
        }
        if let Some(ref mut viz) = self.visualization {
            viz.record_placement(position, color, self.iteration);
        }
    }
}
