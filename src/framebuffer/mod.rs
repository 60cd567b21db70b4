//! Framebuffers, the pixel sinks shaders write into

use crate::color::RGBAu8Color;
use crate::geometry::Dimensions;
use crate::pixels::PixelWrite;

pub mod renderbuffer;
pub mod nullbuffer;

pub use self::renderbuffer::RenderBuffer;
pub use self::nullbuffer::NullFramebuffer;

/// A pixel sink that can be cleared and resized along with the canvas it backs.
pub trait Framebuffer: PixelWrite {
    /// Set every pixel to `color`
    fn clear(&mut self, color: RGBAu8Color);

    /// Change the dimensions of the framebuffer.
    ///
    /// Existing pixel contents are not preserved.
    fn resize(&mut self, dimensions: Dimensions);
}
