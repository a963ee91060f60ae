//! PNG export of the painted canvas

use crate::io::error::{GenerationError, Result};
use image::RgbaImage;
use std::path::Path;

/// Export a painted canvas as a PNG image
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if:
/// - The canvas has zero area
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_as_png(canvas: &RgbaImage, output_path: &Path) -> Result<()> {
    if canvas.width() == 0 || canvas.height() == 0 {
        return Err(GenerationError::NothingToExport {
            reason: "The canvas has no pixels".to_string(),
        });
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
