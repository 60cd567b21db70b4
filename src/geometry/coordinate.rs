use super::Dimensions;

/// Integer pixel coordinate, with `(0, 0)` being the first pixel of the first row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    #[inline]
    pub fn new(x: u32, y: u32) -> Coordinate {
        Coordinate { x, y }
    }

    /// Row-major index of the coordinate within a buffer of the given dimensions.
    ///
    /// Does not check bounds.
    #[inline]
    pub fn into_index(self, dimensions: Dimensions) -> usize {
        let Coordinate { x, y } = self;
        y as usize * dimensions.width as usize + x as usize
    }

    /// Inverse of `into_index`
    #[inline]
    pub fn from_index(index: usize, dimensions: Dimensions) -> Coordinate {
        let width = dimensions.width as usize;
        Coordinate::new((index % width) as u32, (index / width) as u32)
    }
}

impl From<(u32, u32)> for Coordinate {
    #[inline]
    fn from((x, y): (u32, u32)) -> Coordinate { Coordinate { x, y } }
}
