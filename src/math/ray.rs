use crate::error::{AlgebraError, Result};

use super::{Direction3, Matrix, Point3, Vector};

/// A half-line starting at `origin` and extending along `direction`.
///
/// The direction is not required to be normalized; distances along the ray
/// are measured in multiples of its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Direction3,
}

impl Ray {
    /// Creates a ray starting at `origin` heading along `direction`.
    #[must_use]
    pub fn new(origin: Point3, direction: Direction3) -> Self {
        Self { origin, direction }
    }

    /// Builds a ray from homogeneous or 3-component vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors differ in length or are not 3- or
    /// 4-component.
    pub fn from_vectors(origin: &Vector, direction: &Vector) -> Result<Self> {
        if origin.len() != direction.len() {
            return Err(AlgebraError::DimensionMismatch {
                operation: "ray construction",
                expected: origin.len(),
                found: direction.len(),
            }
            .into());
        }
        Ok(Self::new(
            Point3::try_from(origin)?,
            Direction3::try_from(direction)?,
        ))
    }

    /// Returns the origin of the ray.
    #[must_use]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Returns the direction of the ray.
    #[must_use]
    pub fn direction(&self) -> Direction3 {
        self.direction
    }

    /// Point at parameter `distance`: `origin + distance * direction`.
    #[must_use]
    pub fn position(&self, distance: f64) -> Point3 {
        self.origin + self.direction * distance
    }

    /// Maps origin and direction through `matrix`.
    ///
    /// # Errors
    ///
    /// Returns an error if `matrix` is not 4x4.
    pub fn transform(&self, matrix: &Matrix) -> Result<Ray> {
        Ok(Ray::new(
            matrix.transform_point(&self.origin)?,
            matrix.transform_direction(&self.direction)?,
        ))
    }
}
