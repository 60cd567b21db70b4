//! Rasterization

use serde::{Serialize, Deserialize};

pub mod triangle;

pub use self::triangle::rasterize_triangle;

/// How primitives are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawMode {
    /// Shade every covered pixel
    Fill,
    /// Outline only.
    ///
    /// Outlines are not rasterized yet, so drawing in this mode produces nothing.
    Line,
}

impl Default for DrawMode {
    fn default() -> DrawMode { DrawMode::Fill }
}
