use crate::color::RGBAu8Color;

use super::{PixelRead, PixelWrite};

/// Immutable reference to a pixel.
///
/// Provides a read-only accessor for the pixel at the coordinates given at creation.
pub struct PixelRef<'a, P: 'a>(pub(in crate::pixels) usize,
                               pub(in crate::pixels) &'a P) where P: PixelRead;

impl<'a, P: 'a> Clone for PixelRef<'a, P> where P: PixelRead {
    fn clone(&self) -> PixelRef<'a, P> {
        PixelRef(self.0, self.1)
    }
}

impl<'a, P: 'a> Copy for PixelRef<'a, P> where P: PixelRead {}

/// Mutable reference to a pixel
///
/// Provides a writable accessor for the pixel at the coordinates given at creation.
pub struct PixelMut<'a, P: 'a>(pub(in crate::pixels) usize,
                               pub(in crate::pixels) &'a mut P) where P: PixelWrite;

impl<'a, P: 'a> PixelRef<'a, P> where P: PixelRead {
    #[inline(always)]
    pub(in crate::pixels) fn new(index: usize, buffer: &'a P) -> PixelRef<'a, P> {
        PixelRef(index, buffer)
    }

    /// Get the pixel
    #[inline]
    pub fn get(&self) -> RGBAu8Color {
        unsafe { self.1.get_pixel_unchecked(self.0) }
    }
}

impl<'a, P: 'a> PixelMut<'a, P> where P: PixelWrite {
    #[inline(always)]
    pub(in crate::pixels) fn new(index: usize, buffer: &'a mut P) -> PixelMut<'a, P> {
        PixelMut(index, buffer)
    }

    /// Set the pixel
    #[inline]
    pub fn set(&mut self, color: RGBAu8Color) {
        unsafe { self.1.set_pixel_unchecked(self.0, color) }
    }
}
