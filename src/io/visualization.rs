//! Frame capture and GIF generation for fill progression

use crate::io::error::{GenerationError, Result};
use crate::spatial::{Canvas, TilePosition};
use image::{Delay, Frame, Rgb, RgbaImage};
use std::path::Path;

/// Represents a single tile paint event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePlacement {
    /// Grid position of the painted tile
    pub position: TilePosition,
    /// Color painted into the tile
    pub color: Rgb<u8>,
    /// Orchestrator iteration that painted the tile
    pub iteration: usize,
}

/// Captures tile placements for visualization
///
/// Records paint events during a run so the fill order can be replayed as an
/// animation after the image is complete. Frames are drawn one pixel per tile,
/// so their size depends on the grid and not on the canvas resolution.
pub struct VisualizationCapture {
    pub(crate) placements: Vec<TilePlacement>,
    grid_side: u32,
    empty_color: Rgb<u8>,
}

impl VisualizationCapture {
    /// Unpainted tiles are drawn in `empty_color`, normally the palette average
    pub fn new(side_length: u32, tile_size: u32, empty_color: Rgb<u8>, capacity: usize) -> Self {
        Self {
            placements: Vec::with_capacity(capacity),
            grid_side: side_length.checked_div(tile_size).unwrap_or(0),
            empty_color,
        }
    }

    /// Records a tile paint event
    pub fn record_placement(&mut self, position: TilePosition, color: Rgb<u8>, iteration: usize) {
        self.placements.push(TilePlacement {
            position,
            color,
            iteration,
        });
    }

    /// Returns all recorded placement events
    pub fn get_placements(&self) -> &[TilePlacement] {
        &self.placements
    }

    /// Returns the total number of placement events
    pub const fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Export the captured placements as a GIF with automatic frame skipping
    ///
    /// If `frame_delay_ms` is below what viewers honor, intermediate frames are
    /// dropped so the apparent speed of the animation is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No tile placements were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;

        if self.placements.is_empty() {
            return Err(GenerationError::NothingToExport {
                reason: "No tile placements captured for visualization".to_string(),
            });
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms)
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor as usize);

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| GenerationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| GenerationError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Build the frame sequence: empty grid, placements, then a held final frame
    ///
    /// Frames are produced lazily, so only the frame being encoded is held in
    /// memory. Every `skip_factor` placements yield one frame, and a trailing
    /// partial group still yields a frame.
    pub fn generate_frames(
        &self,
        delay_ms: u32,
        skip_factor: usize,
    ) -> impl Iterator<Item = Frame> + '_ {
        let mut canvas = RgbaImage::new(self.grid_side, self.grid_side);
        canvas.fill_square((0, 0), self.grid_side, self.empty_color);
        let initial = Self::snapshot(&canvas, delay_ms);

        // Final frame displays longer for better visibility
        let final_frame_delay =
            delay_ms.saturating_mul(crate::io::configuration::FINAL_FRAME_HOLD_FACTOR);
        let mut groups = self.placements.chunks(skip_factor.max(1));
        let mut held = false;

        std::iter::once(initial).chain(std::iter::from_fn(move || {
            if let Some(group) = groups.next() {
                for placement in group {
                    let (x, y) = placement.position.pixel_origin(1);
                    canvas.set_pixel(x, y, placement.color);
                }
                Some(Self::snapshot(&canvas, delay_ms))
            } else if held {
                None
            } else {
                held = true;
                Some(Self::snapshot(&canvas, final_frame_delay))
            }
        }))
    }

    fn snapshot(canvas: &RgbaImage, delay_ms: u32) -> Frame {
        Frame::from_parts(
            canvas.clone(),
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        )
    }
}
