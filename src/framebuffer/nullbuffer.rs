//! Black-hole Framebuffer

use crate::color::{self, RGBAu8Color};
use crate::geometry::{Dimensions, HasDimensions};
use crate::pixels::{PixelBuffer, PixelRead, PixelWrite};

use super::Framebuffer;

/// Black-hole Framebuffer that stores no pixels but still has dimensions.
///
/// Reading from this framebuffer always gives transparent black, and writes are dropped.
#[derive(Debug, Clone, Copy)]
pub struct NullFramebuffer {
    dimensions: Dimensions,
}

impl HasDimensions for NullFramebuffer {
    #[inline]
    fn dimensions(&self) -> Dimensions { self.dimensions }
}

impl PixelBuffer for NullFramebuffer {}

impl PixelRead for NullFramebuffer {
    #[inline(always)]
    unsafe fn get_pixel_unchecked(&self, _: usize) -> RGBAu8Color { color::transparent() }
}

impl PixelWrite for NullFramebuffer {
    #[inline(always)]
    unsafe fn set_pixel_unchecked(&mut self, _: usize, _: RGBAu8Color) {}
}

impl Framebuffer for NullFramebuffer {
    #[inline(always)]
    fn clear(&mut self, _: RGBAu8Color) {}

    #[inline]
    fn resize(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
    }
}

impl NullFramebuffer {
    /// Create a new `NullFramebuffer` with no size
    #[inline]
    pub fn new() -> NullFramebuffer {
        NullFramebuffer::with_dimensions(Dimensions::new(0, 0))
    }

    /// Create a new `NullFramebuffer` with the given dimensions
    pub fn with_dimensions(dimensions: Dimensions) -> NullFramebuffer {
        NullFramebuffer { dimensions }
    }
}
