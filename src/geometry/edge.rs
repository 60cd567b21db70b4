//! Edge function

use nalgebra::Vector2;

use crate::numeric::FloatScalar;

/// Signed area of the parallelogram spanned by the directed edge `a -> b` and the point `p`.
///
/// Positive when `p` lies to the right of the edge in a y-up frame (left of it on screen),
/// negative on the other side and zero when `p` is exactly on the line through `a` and `b`.
#[inline]
pub fn edge_function<N: FloatScalar>(a: &Vector2<N>, b: &Vector2<N>, p: &Vector2<N>) -> N {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}
