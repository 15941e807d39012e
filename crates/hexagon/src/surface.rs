//! CPU pixel canvas - 8-bit RGBA storage

use hexagon_config::{BLANK_COLOR, Rgba};

/// Fully transparent black, the value of every pixel that was never set
pub const TRANSPARENT: Rgba = BLANK_COLOR;

/// An 8-bit RGBA canvas addressed by `(x, y)`
/// Stores pixels in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    /// Canvas dimensions
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelCanvas {
    /// Create a new canvas with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; pixel_count],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) is outside the {}x{} canvas",
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get a pixel at the given coordinates
    ///
    /// # Panics
    /// If the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.pixels[self.index(x, y)]
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn try_get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Set a pixel at the given coordinates
    ///
    /// # Panics
    /// If the coordinates are out of bounds. Every writer derives its
    /// coordinates from validated dimensions, so this is a bug, not input.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Number of pixels holding exactly `color`
    pub fn count(&self, color: Rgba) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Get raw pixel data as a flat RGBA byte slice
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas() {
        let canvas = PixelCanvas::new(12, 16);
        assert_eq!(canvas.width(), 12);
        assert_eq!(canvas.height(), 16);
        assert_eq!(canvas.pixel_count(), 192);
        assert_eq!(canvas.count(TRANSPARENT), 192);
    }

    #[test]
    fn test_get_set_pixel() {
        let mut canvas = PixelCanvas::new(10, 10);
        let color = [0, 0, 0, 255];

        canvas.set(5, 7, color);
        assert_eq!(canvas.get(5, 7), color);
        assert_eq!(canvas.get(7, 5), TRANSPARENT);

        // Out of bounds lookups are None
        assert_eq!(canvas.try_get(10, 0), None);
        assert_eq!(canvas.try_get(5, 7), Some(color));
    }

    #[test]
    #[should_panic(expected = "outside the 4x4 canvas")]
    fn test_set_out_of_bounds_panics() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.set(4, 0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_as_bytes_row_major() {
        let mut canvas = PixelCanvas::new(2, 2);
        canvas.set(1, 0, [1, 2, 3, 4]);
        canvas.set(0, 1, [5, 6, 7, 8]);
        let bytes = canvas.as_bytes();
        // 4 pixels * 4 channels
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[4..8], &[1, 2, 3, 4]);
        assert_eq!(&bytes[8..12], &[5, 6, 7, 8]);
    }
}
