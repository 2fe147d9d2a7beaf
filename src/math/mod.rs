mod color;
mod matrix;
mod point;
mod ray;
mod transform;
mod vector;

pub use color::Color;
pub use matrix::{Axis, Matrix};
pub use point::{Direction3, Point3};
pub use ray::Ray;
pub use transform::{view_transform, Transform};
pub use vector::Vector;

/// Global tolerance for floating-point comparisons.
///
/// Also used as the plane parallel-ray threshold and as the offset that
/// nudges shadow-ray origins off a surface.
pub const TOLERANCE: f64 = 1e-5;

/// Returns `true` if `a` and `b` differ by at most [`TOLERANCE`].
///
/// Identical values, infinities included, always compare equal.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn approx_eq(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= TOLERANCE
}
