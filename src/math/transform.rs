use crate::error::Result;

use super::{Direction3, Matrix, Point3, Ray};

/// A 4x4 affine transform together with its inverse and inverse-transpose.
///
/// The shape is validated once on construction, so applying the transform
/// never fails. A singular matrix is accepted; its inverse then holds
/// infinite or NaN entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    matrix: Matrix,
    inverse: Matrix,
    inverse_transpose: Matrix,
}

impl Transform {
    /// Wraps `matrix`, precomputing its inverse and inverse-transpose.
    ///
    /// # Errors
    ///
    /// Returns an error if `matrix` is not 4x4.
    pub fn new(matrix: Matrix) -> Result<Self> {
        matrix.check_homogeneous("transform")?;
        let inverse = matrix.inverse()?;
        let inverse_transpose = inverse.transpose();
        Ok(Self {
            matrix,
            inverse,
            inverse_transpose,
        })
    }

    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix::identity(4),
            inverse: Matrix::identity(4),
            inverse_transpose: Matrix::identity(4),
        }
    }

    /// Returns the object-to-world matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Returns the world-to-object matrix.
    #[must_use]
    pub fn inverse(&self) -> &Matrix {
        &self.inverse
    }

    /// Returns the transposed inverse, used to carry normals to world space.
    #[must_use]
    pub fn inverse_transpose(&self) -> &Matrix {
        &self.inverse_transpose
    }

    /// Maps a world-space point into local space.
    #[must_use]
    pub fn to_local_point(&self, point: &Point3) -> Point3 {
        let [x, y, z, _] = self.inverse.apply_homogeneous(point.to_array());
        Point3::new(x, y, z)
    }

    /// Maps a world-space ray into local space.
    #[must_use]
    pub fn to_local_ray(&self, ray: &Ray) -> Ray {
        let [ox, oy, oz, _] = self.inverse.apply_homogeneous(ray.origin().to_array());
        let [dx, dy, dz, _] = self.inverse.apply_homogeneous(ray.direction().to_array());
        Ray::new(Point3::new(ox, oy, oz), Direction3::new(dx, dy, dz))
    }

    /// Maps a local-space normal back to world space and renormalizes it.
    ///
    /// The homogeneous component produced by the inverse-transpose is
    /// discarded, so translations do not leak into the normal.
    #[must_use]
    pub fn normal_to_world(&self, normal: &Direction3) -> Direction3 {
        let [x, y, z, _] = self.inverse_transpose.apply_homogeneous(normal.to_array());
        Direction3::new(x, y, z).normalize()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Builds the world-to-eye matrix for an eye at `from` looking at `to`.
///
/// `up` only needs to point roughly upward; the true up vector is
/// recomputed orthogonal to the viewing direction.
#[must_use]
pub fn view_transform(from: Point3, to: Point3, up: Direction3) -> Matrix {
    let forward = (to - from).normalize();
    let left = forward.cross(&up.normalize());
    let true_up = left.cross(&forward);
    let rows = [left, true_up, -forward];
    let eye = from.to_direction();

    // Orientation rows composed with translation(-from).
    Matrix::from_fn(4, 4, |r, c| match (r, c) {
        (3, 3) => 1.0,
        (3, _) => 0.0,
        (_, 3) => -rows[r].dot(&eye),
        (_, _) => rows[r].to_array()[c],
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Axis;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn rejects_non_homogeneous_matrix() {
        assert!(Transform::new(Matrix::identity(3)).is_err());
    }

    #[test]
    fn local_ray_uses_inverse() {
        let t = Transform::new(Matrix::translation(0.0, 0.0, 5.0)).unwrap();
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Direction3::Z);
        let local = t.to_local_ray(&ray);
        assert_eq!(local.origin(), Point3::new(0.0, 0.0, -10.0));
        assert_eq!(local.direction(), Direction3::Z);
    }

    #[test]
    fn normal_ignores_translation() {
        let t = Transform::new(Matrix::translation(0.0, 1.0, 0.0)).unwrap();
        let n = t.normal_to_world(&Direction3::new(0.0, FRAC_1_SQRT_2, -FRAC_1_SQRT_2));
        assert_eq!(n, Direction3::new(0.0, FRAC_1_SQRT_2, -FRAC_1_SQRT_2));
    }

    #[test]
    fn chained_transforms_apply_in_reverse_order() {
        let a = Matrix::rotation(Axis::X, FRAC_PI_2);
        let b = Matrix::scaling(5.0, 5.0, 5.0);
        let c = Matrix::translation(10.0, 5.0, 7.0);
        let chained = c.checked_mul(&b).unwrap().checked_mul(&a).unwrap();
        let p = chained.transform_point(&Point3::new(1.0, 0.0, 1.0)).unwrap();
        assert_eq!(p, Point3::new(15.0, 0.0, 7.0));
    }

    #[test]
    fn default_orientation_is_identity() {
        let t = view_transform(Point3::ORIGIN, Point3::new(0.0, 0.0, -1.0), Direction3::Y);
        assert_eq!(t, Matrix::identity(4));
    }

    #[test]
    fn looking_in_positive_z_mirrors() {
        let t = view_transform(Point3::ORIGIN, Point3::new(0.0, 0.0, 1.0), Direction3::Y);
        assert_eq!(t, Matrix::scaling(-1.0, 1.0, -1.0));
    }

    #[test]
    fn view_moves_the_world() {
        let t = view_transform(Point3::new(0.0, 0.0, 8.0), Point3::ORIGIN, Direction3::Y);
        assert_eq!(t, Matrix::translation(0.0, 0.0, -8.0));
    }

    #[test]
    fn arbitrary_view() {
        let t = view_transform(
            Point3::new(1.0, 3.0, 2.0),
            Point3::new(4.0, -2.0, 8.0),
            Direction3::new(1.0, 1.0, 0.0),
        );
        let expected = m(&[
            &[-0.50709, 0.50709, 0.67612, -2.36643],
            &[0.76772, 0.60609, 0.12122, -2.82843],
            &[-0.35857, 0.59761, -0.71714, 0.0],
            &[0.0, 0.0, 0.0, 1.0],
        ]);
        assert_abs_diff_eq!(t, expected, epsilon = 1e-4);
    }
}
