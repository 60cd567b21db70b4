//! Pixel buffer traits and safe pixel accessors

use crate::error::{RenderResult, RenderError};
use crate::color::RGBAu8Color;
use crate::geometry::{Coordinate, HasDimensions};

pub mod accessor;
pub mod iterator;

pub use self::accessor::{PixelRef, PixelMut};
pub use self::iterator::PixelBufferIter;

/// Generic buffer of row-major pixels with known dimensions.
///
/// This is the sink shaders write their colors into.
pub trait PixelBuffer: Sized + HasDimensions {}

/// Defines methods for reading raw pixel values.
pub trait PixelRead: PixelBuffer {
    /// Unsafely access a pixel at the given index without checking bounds.
    ///
    /// This is meant for internal use, do not attempt to use it directly. Please use
    /// `pixel_ref`, `get_pixel` or `pixel_iter` to access pixel values safely.
    unsafe fn get_pixel_unchecked(&self, index: usize) -> RGBAu8Color;

    /// Get a "reference" to the pixel at the given coordinate.
    ///
    /// Returns `RenderError::InvalidPixelCoordinate` on invalid pixel coordinates.
    fn pixel_ref(&self, coord: Coordinate) -> RenderResult<PixelRef<Self>> {
        let dim = self.dimensions();

        if dim.in_bounds(coord) {
            Ok(PixelRef::new(coord.into_index(dim), self))
        } else {
            Err(RenderError::InvalidPixelCoordinate)
        }
    }

    /// Get the pixel at the given coordinate, or `None` if out of bounds
    #[inline]
    fn get_pixel(&self, coord: Coordinate) -> Option<RGBAu8Color> {
        self.pixel_ref(coord).ok().map(|pixel| pixel.get())
    }

    /// Iterator over all pixels in the buffer, in row-major order.
    fn pixel_iter(&self) -> PixelBufferIter<Self> {
        PixelBufferIter {
            buffer: self,
            position: 0,
            max_len: self.dimensions().area(),
        }
    }
}

/// Defines methods for writing to raw pixel values.
pub trait PixelWrite: PixelRead {
    /// Unsafely set a pixel at the given index without checking bounds.
    ///
    /// This is meant for internal use, do not attempt to use it directly. Please use
    /// `pixel_mut` or `put_pixel` to write pixel values safely.
    unsafe fn set_pixel_unchecked(&mut self, index: usize, color: RGBAu8Color);

    /// Get a mutable "reference" to the pixel at the given coordinate.
    ///
    /// Returns `RenderError::InvalidPixelCoordinate` on invalid pixel coordinates.
    fn pixel_mut(&mut self, coord: Coordinate) -> RenderResult<PixelMut<Self>> {
        let dim = self.dimensions();

        if dim.in_bounds(coord) {
            Ok(PixelMut::new(coord.into_index(dim), self))
        } else {
            Err(RenderError::InvalidPixelCoordinate)
        }
    }

    /// Set the pixel at the given coordinate to `color`.
    ///
    /// Coordinates outside of the buffer are ignored.
    #[inline]
    fn put_pixel(&mut self, coord: Coordinate, color: RGBAu8Color) {
        if let Ok(mut pixel) = self.pixel_mut(coord) {
            pixel.set(color);
        }
    }
}
