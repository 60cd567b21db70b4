//! Color definitions
//!
//! Pixels are stored as 8-bit RGBA, the same layout the canvas is presented with.

use nalgebra::Vector4;

pub mod predefined;

pub use self::predefined::formats::RGBAu8Color;
pub use self::predefined::named;

/// Create an `RGBAu8Color` from its four channels
#[inline]
pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> RGBAu8Color {
    Vector4::new(r, g, b, a)
}

/// Create an opaque `RGBAu8Color`
#[inline]
pub fn rgb(r: u8, g: u8, b: u8) -> RGBAu8Color {
    rgba(r, g, b, 0xFF)
}

/// Fully transparent black, which is what a fresh framebuffer is filled with.
#[inline]
pub fn transparent() -> RGBAu8Color {
    rgba(0, 0, 0, 0)
}

/// Convert a color to the `[r, g, b, a]` byte layout
#[inline]
pub fn to_bytes(color: RGBAu8Color) -> [u8; 4] {
    [color.x, color.y, color.z, color.w]
}

/// Convert `[r, g, b, a]` bytes into a color
#[inline]
pub fn from_bytes(bytes: [u8; 4]) -> RGBAu8Color {
    rgba(bytes[0], bytes[1], bytes[2], bytes[3])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_byte_layout() {
        let c = rgba(0x55, 0x00, 0xFF, 0x80);

        assert_eq!(to_bytes(c), [0x55, 0x00, 0xFF, 0x80]);
        assert_eq!(from_bytes([0x55, 0x00, 0xFF, 0x80]), c);
        assert_eq!(rgb(1, 2, 3).w, 0xFF);
    }

    #[test]
    fn test_named_colors_are_opaque() {
        assert_eq!(to_bytes(named::violet()), [0x55, 0x00, 0xFF, 0xFF]);
        assert_eq!(named::black(), rgb(0, 0, 0));
        assert_eq!(named::white(), rgb(0xFF, 0xFF, 0xFF));
    }
}
