//! Predefined color formats and named colors

pub mod formats {
    use nalgebra::Vector4;

    /// RGBA 8-bit Unsigned Integer Color
    pub type RGBAu8Color = Vector4<u8>;
}

pub mod named {
    use super::formats::RGBAu8Color;
    use crate::color::rgb;

    pub fn black() -> RGBAu8Color { rgb(0x00, 0x00, 0x00) }
    pub fn white() -> RGBAu8Color { rgb(0xFF, 0xFF, 0xFF) }
    pub fn red() -> RGBAu8Color { rgb(0xFF, 0x00, 0x00) }
    pub fn green() -> RGBAu8Color { rgb(0x00, 0xFF, 0x00) }
    pub fn blue() -> RGBAu8Color { rgb(0x00, 0x00, 0xFF) }
    /// The violet used by the second stock shader
    pub fn violet() -> RGBAu8Color { rgb(0x55, 0x00, 0xFF) }
}
