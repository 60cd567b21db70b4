use num_traits::{Zero, NumCast};

use nalgebra::Vector2;

use crate::numeric::FloatScalar;

use super::{Dimensions, FaceWinding, edge_function};

/// Triangle given by three vertices.
///
/// Triangles are usually built in normalized device coordinates, where `-1.0` and `1.0` are the
/// edges of the canvas, and transformed into pixel space right before rasterization
/// with [`to_pixel_space`](#method.to_pixel_space).
/// Values outside of `[-1.0, 1.0]` are allowed, they just land outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<N: FloatScalar> {
    pub v1: Vector2<N>,
    pub v2: Vector2<N>,
    pub v3: Vector2<N>,
}

impl<N: FloatScalar> Triangle<N> {
    #[inline]
    pub fn new(v1: Vector2<N>, v2: Vector2<N>, v3: Vector2<N>) -> Triangle<N> {
        Triangle { v1, v2, v3 }
    }

    /// Create a triangle from three `(x, y)` pairs
    #[inline]
    pub fn from_points(v1: (N, N), v2: (N, N), v3: (N, N)) -> Triangle<N> {
        Triangle::new(Vector2::new(v1.0, v1.1),
                      Vector2::new(v2.0, v2.1),
                      Vector2::new(v3.0, v3.1))
    }

    /// The same triangle with the vertex order reversed, which flips its winding
    #[inline]
    pub fn reversed(&self) -> Triangle<N> {
        Triangle::new(self.v3, self.v2, self.v1)
    }

    /// Maps each vertex from normalized device coordinates to pixel space with
    /// `((c + 1) * 0.5) * dimension`, using the width for `x` and the height for `y`.
    ///
    /// The result is not rounded. Vertices keep their fractional positions, and only the
    /// sample points tested against them are integral.
    pub fn to_pixel_space(&self, dimensions: Dimensions) -> Triangle<N> {
        let one = N::one();
        let half: N = NumCast::from(0.5).unwrap_or_else(|| one / (one + one));

        let width: N = NumCast::from(dimensions.width).unwrap_or_else(N::zero);
        let height: N = NumCast::from(dimensions.height).unwrap_or_else(N::zero);

        let transform = |v: &Vector2<N>| Vector2::new(((v.x + one) * half) * width,
                                                       ((v.y + one) * half) * height);

        Triangle::new(transform(&self.v1), transform(&self.v2), transform(&self.v3))
    }

    /// Winding of the pixel-space triangle as presented, with row zero at the bottom.
    pub fn winding(&self) -> FaceWinding {
        let area = edge_function(&self.v1, &self.v2, &self.v3);

        if area > Zero::zero() {
            FaceWinding::Clockwise
        } else if area < Zero::zero() {
            FaceWinding::CounterClockwise
        } else {
            FaceWinding::Degenerate
        }
    }
}
