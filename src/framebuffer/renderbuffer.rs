//! Persistent pixel array backing a canvas

use crate::color::{self, RGBAu8Color};
use crate::error::{RenderError, RenderResult};
use crate::geometry::{Dimensions, HasDimensions};
use crate::pixels::{PixelBuffer, PixelRead, PixelWrite};

use super::Framebuffer;

/// Row-major RGBA pixel array.
///
/// Shaders write into this during rasterization, and the presentation layer
/// reads it back out once a frame is complete.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBuffer {
    dimensions: Dimensions,
    pub ( crate ) buffer: Vec<RGBAu8Color>,
}

impl RenderBuffer {
    /// Create a new empty `RenderBuffer` with no allocated pixels.
    pub fn new() -> RenderBuffer {
        RenderBuffer { dimensions: Dimensions::new(0, 0), buffer: Vec::new() }
    }

    /// Create a new `RenderBuffer` with the given dimensions, filled with transparent black.
    pub fn with_dimensions(dimensions: Dimensions) -> RenderBuffer {
        RenderBuffer::with_color(dimensions, color::transparent())
    }

    /// Create a new `RenderBuffer` with the given dimensions, filled with `color`.
    pub fn with_color(dimensions: Dimensions, color: RGBAu8Color) -> RenderBuffer {
        RenderBuffer { dimensions, buffer: vec![color; dimensions.area()] }
    }

    /// Wrap an existing row-major pixel vector.
    ///
    /// Returns `RenderError::InvalidDimensions` if the vector length does not match the dimensions.
    pub fn from_pixels(dimensions: Dimensions, pixels: Vec<RGBAu8Color>) -> RenderResult<RenderBuffer> {
        if pixels.len() != dimensions.area() {
            return Err(RenderError::InvalidDimensions(dimensions.width, dimensions.height, pixels.len()));
        }

        Ok(RenderBuffer { dimensions, buffer: pixels })
    }

    /// All pixels in row-major order
    #[inline]
    pub fn pixels(&self) -> &[RGBAu8Color] { &self.buffer }

    /// All pixels as `[r, g, b, a]` bytes in row-major order
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.buffer.len() * 4);

        for pixel in &self.buffer {
            bytes.extend_from_slice(&color::to_bytes(*pixel));
        }

        bytes
    }
}

impl Default for RenderBuffer {
    fn default() -> RenderBuffer { RenderBuffer::new() }
}

impl HasDimensions for RenderBuffer {
    #[inline]
    fn dimensions(&self) -> Dimensions { self.dimensions }
}

impl PixelBuffer for RenderBuffer {}

impl PixelRead for RenderBuffer {
    #[inline]
    unsafe fn get_pixel_unchecked(&self, index: usize) -> RGBAu8Color {
        *self.buffer.get_unchecked(index)
    }
}

impl PixelWrite for RenderBuffer {
    #[inline]
    unsafe fn set_pixel_unchecked(&mut self, index: usize, color: RGBAu8Color) {
        *self.buffer.get_unchecked_mut(index) = color;
    }
}

impl Framebuffer for RenderBuffer {
    fn clear(&mut self, color: RGBAu8Color) {
        for pixel in &mut self.buffer {
            *pixel = color;
        }
    }

    fn resize(&mut self, dimensions: Dimensions) {
        debug!("Resizing render buffer from {}x{} to {}x{}",
               self.dimensions.width, self.dimensions.height,
               dimensions.width, dimensions.height);

        self.dimensions = dimensions;
        self.buffer.clear();
        self.buffer.resize(dimensions.area(), color::transparent());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::color::rgb;
    use crate::geometry::Coordinate;

    #[test]
    fn test_put_and_get_pixel() {
        let mut buffer = RenderBuffer::with_dimensions(Dimensions::new(3, 2));

        buffer.put_pixel(Coordinate::new(2, 1), rgb(1, 2, 3));

        assert_eq!(buffer.get_pixel(Coordinate::new(2, 1)), Some(rgb(1, 2, 3)));
        assert_eq!(buffer.pixels()[5], rgb(1, 2, 3));
        assert_eq!(buffer.get_pixel(Coordinate::new(0, 0)), Some(color::transparent()));
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut buffer = RenderBuffer::with_dimensions(Dimensions::new(3, 2));
        let before = buffer.clone();

        buffer.put_pixel(Coordinate::new(3, 0), rgb(1, 2, 3));
        buffer.put_pixel(Coordinate::new(0, 2), rgb(1, 2, 3));

        assert_eq!(buffer, before);
        assert!(buffer.pixel_mut(Coordinate::new(3, 0)).is_err());
        assert_eq!(buffer.get_pixel(Coordinate::new(0, 2)), None);
    }

    #[test]
    fn test_checked_accessors_are_row_major() {
        let mut buffer = RenderBuffer::with_dimensions(Dimensions::new(3, 2));

        buffer.pixel_mut(Coordinate::new(1, 1)).unwrap().set(rgb(5, 5, 5));

        assert_eq!(buffer.pixel_ref(Coordinate::new(1, 1)).unwrap().get(), rgb(5, 5, 5));

        let mut iter = buffer.pixel_iter();
        assert_eq!(iter.size_hint(), (6, Some(6)));

        let lit: Vec<usize> = iter.by_ref()
                                  .enumerate()
                                  .filter(|&(_, p)| p.get() == rgb(5, 5, 5))
                                  .map(|(i, _)| i)
                                  .collect();

        assert_eq!(lit, vec![4]);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_clear_and_resize() {
        let mut buffer = RenderBuffer::with_color(Dimensions::new(2, 2), rgb(9, 9, 9));

        buffer.clear(rgb(4, 5, 6));
        assert!(buffer.pixel_iter().all(|p| p.get() == rgb(4, 5, 6)));

        buffer.resize(Dimensions::new(5, 1));
        assert_eq!(buffer.dimensions(), Dimensions::new(5, 1));
        assert_eq!(buffer.pixel_iter().len(), 5);
        assert!(buffer.pixels().iter().all(|p| *p == color::transparent()));
    }

    #[test]
    fn test_from_pixels_checks_length() {
        assert!(RenderBuffer::from_pixels(Dimensions::new(2, 2), vec![rgb(0, 0, 0); 3]).is_err());
        assert!(RenderBuffer::from_pixels(Dimensions::new(2, 2), vec![rgb(0, 0, 0); 4]).is_ok());
    }

    #[test]
    fn test_byte_export() {
        let buffer = RenderBuffer::with_color(Dimensions::new(2, 1), rgb(7, 8, 9));

        assert_eq!(buffer.to_bytes(), vec![7, 8, 9, 255, 7, 8, 9, 255]);
    }
}
