//! Canvas configuration
//!
//! Configuration can be built in code or loaded from [RON](https://github.com/ron-rs/ron):
//!
//! ```text
//! (
//!     width: 640,
//!     height: 480,
//!     clear_color: (0, 0, 0, 255),
//!     draw_mode: Fill,
//!     frame_interval: 16,
//! )
//! ```
//!
//! Missing fields take their default values.

use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::color::{self, RGBAu8Color};
use crate::error::RenderResult;
use crate::geometry::Dimensions;
use crate::raster::DrawMode;

/// Default canvas width
pub const DEFAULT_WIDTH: u32 = 1280;
/// Default canvas height
pub const DEFAULT_HEIGHT: u32 = 720;
/// Default minimum milliseconds between drawn frames
pub const DEFAULT_FRAME_INTERVAL: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Color the canvas is cleared to, as `(r, g, b, a)`
    pub clear_color: (u8, u8, u8, u8),
    /// Initial draw mode
    pub draw_mode: DrawMode,
    /// Minimum milliseconds between drawn frames
    pub frame_interval: u32,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            clear_color: (0, 0, 0, 0xFF),
            draw_mode: DrawMode::Fill,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

impl Config {
    /// Parse a configuration from a RON string
    pub fn from_ron_str(source: &str) -> RenderResult<Config> {
        Ok(::ron::from_str(source)?)
    }

    /// Load a configuration from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> RenderResult<Config> {
        let source = fs::read_to_string(path.as_ref())?;

        debug!("Loading configuration from {}", path.as_ref().display());

        Config::from_ron_str(&source)
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    #[inline]
    pub fn clear_color(&self) -> RGBAu8Color {
        let (r, g, b, a) = self.clear_color;
        color::rgba(r, g, b, a)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::error::RenderError;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.dimensions(), Dimensions::new(1280, 720));
        assert_eq!(config.clear_color(), color::rgb(0, 0, 0));
        assert_eq!(config.draw_mode, DrawMode::Fill);
    }

    #[test]
    fn test_parse_partial() {
        let config = Config::from_ron_str("(width: 64, height: 48, draw_mode: Line)").unwrap();

        assert_eq!(config.dimensions(), Dimensions::new(64, 48));
        assert_eq!(config.draw_mode, DrawMode::Line);
        assert_eq!(config.frame_interval, DEFAULT_FRAME_INTERVAL);
    }

    #[test]
    fn test_parse_full() {
        let config = Config::from_ron_str(
            "(width: 4, height: 4, clear_color: (1, 2, 3, 4), draw_mode: Fill, frame_interval: 33)"
        ).unwrap();

        assert_eq!(config.clear_color(), color::rgba(1, 2, 3, 4));
        assert_eq!(config.frame_interval, 33);
    }

    #[test]
    fn test_parse_error() {
        match Config::from_ron_str("(width: -1)") {
            Err(RenderError::Config(_)) => (),
            other => panic!("Expected a configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        match Config::load("/nonexistent/bluebird.ron") {
            Err(RenderError::Io(_)) => (),
            other => panic!("Expected an I/O error, got {:?}", other),
        }
    }
}
