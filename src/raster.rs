//! Output raster: a row-major grid of linear colors.

use crate::error::RenderError;
use crate::vector::Color;

/// Rendered image of `width × height` unclamped colors.
///
/// Pixel (x, y) lives at index `y * width + x`; row 0 is the top of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Raster {
    /// Create a raster filled with black.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidRaster { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major index of pixel (x, y).
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Color of pixel (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the raster.
    pub fn get(&self, x: u32, y: u32) -> Color {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
        self.pixels[self.index(x, y)]
    }

    /// Overwrite pixel (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the raster.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Mutable access to the pixel buffer, in row-major order.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }
}
