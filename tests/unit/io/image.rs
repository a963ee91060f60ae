//! Tests for PNG export of the painted canvas

#[cfg(test)]
mod tests {
    use framefill::io::image::export_canvas_as_png;
    use framefill::spatial::Canvas;
    use framefill::spatial::canvas::new_canvas;
    use image::{Rgb, Rgba, RgbaImage};

    // Tests PNG file creation and pixel round trip
    // Verified by disabling file save operation
    #[test]
    fn test_export_canvas_creates_png() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be available");
        };
        let output_path = dir.path().join("deep").join("image.png");

        let mut canvas = new_canvas(20);
        canvas.fill_square((10, 0), 10, Rgb([200, 10, 10]));

        assert!(export_canvas_as_png(&canvas, &output_path).is_ok());
        assert!(output_path.exists(), "PNG file should be created");

        let Ok(reloaded) = image::open(&output_path) else {
            unreachable!("Exported PNG should decode");
        };
        let reloaded = reloaded.to_rgba8();
        assert_eq!(reloaded.dimensions(), (20, 20));
        assert_eq!(reloaded.get_pixel(15, 5), &Rgba([200, 10, 10, 255]));
        assert_eq!(reloaded.get_pixel(5, 5), &Rgba([0, 0, 0, 0]));
    }

    // Tests error when the canvas has no pixels
    // Verified by ignoring empty canvas check
    #[test]
    fn test_export_empty_canvas_error() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be available");
        };
        let canvas = RgbaImage::new(0, 0);

        assert!(export_canvas_as_png(&canvas, &dir.path().join("empty.png")).is_err());
    }

    // Tests an unwritable destination surfaces as an error
    #[test]
    fn test_export_into_file_parent_fails() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be available");
        };
        let blocker = dir.path().join("blocker");
        assert!(std::fs::write(&blocker, b"not a directory").is_ok());

        let canvas = new_canvas(4);
        assert!(export_canvas_as_png(&canvas, &blocker.join("image.png")).is_err());
    }
}
