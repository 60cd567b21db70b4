//! Geometry structures

pub mod dimension;
pub mod coordinate;
pub mod winding;
pub mod edge;
pub mod triangle;

pub use self::dimension::{Dimensions, HasDimensions};
pub use self::coordinate::Coordinate;
pub use self::winding::FaceWinding;
pub use self::edge::edge_function;
pub use self::triangle::Triangle;
