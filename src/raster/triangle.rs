//! Edge-function triangle coverage

use num_traits::{Zero, One};

use nalgebra::Vector2;

use crate::numeric::FloatScalar;
use crate::geometry::{Coordinate, Dimensions, Triangle, edge_function};

/// Walks every pixel of a `dimensions` sized canvas and calls `visit` for each one
/// covered by `triangle`, which is given in normalized device coordinates.
///
/// The triangle is transformed to pixel space without rounding. Each pixel `(x, y)` is then
/// sampled at exactly `(x, y)`, its lower-left corner rather than its center, and counts as
/// covered when all three edge functions are non-negative:
///
/// ```text
/// w0 = edge(v2, v3, p)
/// w1 = edge(v3, v1, p)
/// w2 = edge(v1, v2, p)
/// ```
///
/// This only covers triangles that are clockwise on screen. Counter-clockwise triangles are not
/// flipped and cover nothing. Collinear triangles cover at most the pixels lying exactly on their
/// line, and a triangle whose vertices all coincide covers nothing.
///
/// Pixels are visited row by row from row zero, the bottom of the presented image, left to right.
/// Returns the number of covered pixels.
pub fn rasterize_triangle<N, F>(triangle: Triangle<N>, dimensions: Dimensions, mut visit: F) -> usize
    where N: FloatScalar,
          F: FnMut(Coordinate) {
    let Triangle { v1, v2, v3 } = triangle.to_pixel_space(dimensions);

    // With all three vertices on one point every edge function is zero everywhere,
    // which would otherwise cover the entire canvas.
    if v1 == v2 && v2 == v3 {
        trace!("Skipping triangle collapsed to a single point {:?}", v1);
        return 0;
    }

    let mut covered = 0;

    // Sample positions are accumulated instead of cast, which is exact for any realistic canvas
    let mut py = N::zero();

    for y in 0..dimensions.height {
        let mut px = N::zero();

        for x in 0..dimensions.width {
            let p = Vector2::new(px, py);

            let w0 = edge_function(&v2, &v3, &p);
            let w1 = edge_function(&v3, &v1, &p);
            let w2 = edge_function(&v1, &v2, &p);

            if w0 >= Zero::zero() && w1 >= Zero::zero() && w2 >= Zero::zero() {
                visit(Coordinate::new(x, y));
                covered += 1;
            }

            px = px + One::one();
        }

        py = py + One::one();
    }

    trace!("Rasterized {:?} on {}x{} canvas, {} pixels covered",
           triangle, dimensions.width, dimensions.height, covered);

    covered
}

#[cfg(test)]
mod test {
    use super::*;

    fn covered<N: FloatScalar>(triangle: Triangle<N>, dimensions: Dimensions) -> Vec<(u32, u32)> {
        let mut pixels = Vec::new();
        rasterize_triangle(triangle, dimensions, |c| pixels.push((c.x, c.y)));
        pixels
    }

    #[test]
    fn test_four_by_four_staircase() {
        let tri = Triangle::from_points((1.0f32, 1.0), (1.0, -1.0), (-1.0, -1.0));

        assert_eq!(covered(tri, Dimensions::new(4, 4)), vec![
            (0, 0), (1, 0), (2, 0), (3, 0),
            (1, 1), (2, 1), (3, 1),
            (2, 2), (3, 2),
            (3, 3),
        ]);
    }

    #[test]
    fn test_count_matches_visits() {
        let tri = Triangle::from_points((1.0f64, 1.0), (1.0, -1.0), (-1.0, -1.0));
        let mut visits = 0;

        let count = rasterize_triangle(tri, Dimensions::new(4, 4), |_| visits += 1);

        assert_eq!(count, 10);
        assert_eq!(visits, 10);
    }

    #[test]
    fn test_reversed_winding_is_empty() {
        let tri = Triangle::from_points((1.0f32, 1.0), (1.0, -1.0), (-1.0, -1.0));

        assert!(covered(tri.reversed(), Dimensions::new(4, 4)).is_empty());
        assert!(covered(tri.reversed(), Dimensions::new(64, 48)).is_empty());
    }

    #[test]
    fn test_zero_sized_canvas() {
        let tri = Triangle::from_points((1.0f32, 1.0), (1.0, -1.0), (-1.0, -1.0));

        assert!(covered(tri, Dimensions::new(0, 0)).is_empty());
        assert!(covered(tri, Dimensions::new(0, 16)).is_empty());
        assert!(covered(tri, Dimensions::new(16, 0)).is_empty());
    }

    #[test]
    fn test_single_point_triangle_is_empty() {
        let tri = Triangle::from_points((0.3f32, -0.2), (0.3, -0.2), (0.3, -0.2));

        assert!(covered(tri, Dimensions::new(32, 32)).is_empty());
    }

    #[test]
    fn test_collinear_triangle_covers_its_line() {
        let tri = Triangle::from_points((1.0f32, 1.0), (1.0, 1.0), (-1.0, -1.0));

        assert_eq!(covered(tri, Dimensions::new(4, 4)), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_samples_at_pixel_corner() {
        // Pixel triangle (2, 2), (2, 1), (1, 1). Sampling at pixel centers would only keep (1, 1).
        let tri = Triangle::from_points((0.0f32, 0.0), (0.0, -0.5), (-0.5, -0.5));

        assert_eq!(covered(tri, Dimensions::new(4, 4)), vec![(1, 1), (2, 1), (2, 2)]);
    }
}
