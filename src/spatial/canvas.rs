//! Pixel canvas abstraction the painter draws onto

use image::{Rgb, Rgba, RgbaImage};

/// Square raster that accepts per-pixel color assignment
pub trait Canvas {
    /// Assign an opaque color to a single pixel
    ///
    /// Pixels outside the canvas are ignored.
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb<u8>);

    /// Paint a `size` x `size` square whose top-left corner is `origin`
    fn fill_square(&mut self, origin: (u32, u32), size: u32, color: Rgb<u8>) {
        let (x0, y0) = origin;
        for y in y0..y0.saturating_add(size) {
            for x in x0..x0.saturating_add(size) {
                self.set_pixel(x, y, color);
            }
        }
    }
}

impl Canvas for RgbaImage {
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb<u8>) {
        if let Some(pixel) = self.get_pixel_mut_checked(x, y) {
            let [r, g, b] = color.0;
            *pixel = Rgba([r, g, b, u8::MAX]);
        }
    }
}

/// Allocate a transparent square canvas
pub fn new_canvas(side_length: u32) -> RgbaImage {
    RgbaImage::new(side_length, side_length)
}
