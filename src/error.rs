//! Error types
//!
//! Rasterization and shader selection never fail; malformed input there simply draws nothing.
//! Errors only surface from checked pixel access, configuration loading and image export.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Pixel coordinate is outside the buffer")]
    InvalidPixelCoordinate,
    #[error("{0}x{1} does not match the pixel buffer length {2}")]
    InvalidDimensions(u32, u32, usize),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ::ron::error::SpannedError),
    #[cfg(feature = "image_compat")]
    #[error("Image error: {0}")]
    Image(#[from] ::image::ImageError),
}

pub type RenderResult<T> = Result<T, RenderError>;
