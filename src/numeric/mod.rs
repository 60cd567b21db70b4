//! Numeric traits for vertex scalars

use nalgebra::Scalar;

pub use num_traits::Float;

/// Floating point scalar usable for vertex positions, such as `f32` or `f64`.
pub trait FloatScalar: Float + Scalar {}

impl<T> FloatScalar for T where T: Float + Scalar {}
