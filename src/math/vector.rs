use std::ops::{Div, Mul, Neg};

use approx::AbsDiffEq;

use crate::error::{AlgebraError, Result};

use super::{approx_eq, Axis, Matrix, TOLERANCE};

/// An immutable, fixed-length vector of real numbers.
///
/// Element-wise operations between two vectors are fallible and return
/// [`AlgebraError::DimensionMismatch`] when the lengths differ. Operations
/// involving a single vector and a scalar are infallible and available
/// through the usual operators.
///
/// Equality is component-wise within [`TOLERANCE`].
#[derive(Debug, Clone)]
pub struct Vector {
    values: Vec<f64>,
}

impl Vector {
    /// Creates a vector from its components.
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Creates a vector of `len` zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the vector has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the component at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over the components.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Sum of all components.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Element-wise sum of two vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors have different lengths.
    pub fn checked_add(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "vector addition", |a, b| a + b)
    }

    /// Element-wise difference of two vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors have different lengths.
    pub fn checked_sub(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "vector subtraction", |a, b| a - b)
    }

    /// Dot product of two vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors have different lengths.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        Ok(self.zip_with(other, "dot product", |a, b| a * b)?.sum())
    }

    /// Multiplies every component by `factor`.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Vector {
        self.values.iter().map(|v| v * factor).collect()
    }

    /// Euclidean norm.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Divides the vector by its magnitude.
    ///
    /// A zero vector normalizes to a vector of NaN components.
    #[must_use]
    pub fn normalize(&self) -> Vector {
        self / self.magnitude()
    }

    /// Reflects this vector about `normal`: `v - normal * 2(v . normal)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors have different lengths.
    pub fn reflect(&self, normal: &Vector) -> Result<Vector> {
        let projection = self.dot(normal)?;
        self.checked_sub(&normal.scale(2.0 * projection))
    }

    /// Vector-matrix product (`v * M`), treating `self` as a row vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the vector length differs from the matrix row count.
    pub fn mul_matrix(&self, matrix: &Matrix) -> Result<Vector> {
        if self.len() != matrix.row_count() {
            return Err(AlgebraError::DimensionMismatch {
                operation: "vector-matrix product",
                expected: matrix.row_count(),
                found: self.len(),
            }
            .into());
        }
        Ok((0..matrix.column_count())
            .map(|c| {
                self.values
                    .iter()
                    .enumerate()
                    .map(|(r, v)| v * matrix.entry(r, c))
                    .sum::<f64>()
            })
            .collect())
    }

    /// Translates the vector, read as homogeneous coordinates, by `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if `offset` is not one shorter than this vector.
    pub fn translate(&self, offset: &Vector) -> Result<Vector> {
        Matrix::translation_by(offset).mul_vector(self)
    }

    /// Scales the vector, read as homogeneous coordinates, by `factors`.
    ///
    /// # Errors
    ///
    /// Returns an error if `factors` is not one shorter than this vector.
    pub fn scale_by(&self, factors: &Vector) -> Result<Vector> {
        Matrix::scaling_by(factors).mul_vector(self)
    }

    /// Rotates a 4-component homogeneous vector about `axis`.
    ///
    /// # Errors
    ///
    /// Returns an error if the vector does not have 4 components.
    pub fn rotate(&self, axis: Axis, angle: f64) -> Result<Vector> {
        Matrix::rotation(axis, angle).mul_vector(self)
    }

    fn zip_with(
        &self,
        other: &Vector,
        operation: &'static str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Vector> {
        if self.len() != other.len() {
            return Err(AlgebraError::DimensionMismatch {
                operation,
                expected: self.len(),
                found: other.len(),
            }
            .into());
        }
        Ok(self
            .values
            .iter()
            .zip(&other.values)
            .map(|(&a, &b)| f(a, b))
            .collect())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(values: [f64; N]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Neg for &Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self.values.iter().map(|v| -v).collect()
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        -&self
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;
    fn mul(self, factor: f64) -> Vector {
        self.scale(factor)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, factor: f64) -> Vector {
        self.scale(factor)
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;
    fn mul(self, vector: &Vector) -> Vector {
        vector.scale(self)
    }
}

impl Div<f64> for &Vector {
    type Output = Vector;
    fn div(self, divisor: f64) -> Vector {
        self.scale(1.0 / divisor)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, divisor: f64) -> Vector {
        &self / divisor
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.len() == other.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(&a, &b)| approx_eq(a, b))
    }
}
