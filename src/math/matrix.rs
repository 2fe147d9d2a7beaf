use std::ops::{Div, Mul};

use approx::AbsDiffEq;

use crate::error::{AlgebraError, Result};

use super::{approx_eq, Direction3, Point3, Vector, TOLERANCE};

/// A coordinate axis, used to select rotation and shear components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index of the axis in a homogeneous coordinate tuple.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// An immutable rectangular matrix of real numbers, stored row-major.
///
/// Every row has the same length. Square matrices support
/// [`determinant`](Matrix::determinant) and [`inverse`](Matrix::inverse),
/// both computed by cofactor expansion. Inverting a singular matrix is not
/// guarded: the division by a zero determinant yields infinite or NaN
/// entries.
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` is empty, the first row is empty, or the
    /// rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(AlgebraError::InvalidArgument("matrix requires at least one row".into()).into());
        };
        let cols = first.len();
        if cols == 0 {
            return Err(AlgebraError::InvalidArgument("matrix rows must not be empty".into()).into());
        }
        if let Some(ragged) = rows.iter().find(|row| row.len() != cols) {
            return Err(AlgebraError::DimensionMismatch {
                operation: "matrix construction",
                expected: cols,
                found: ragged.len(),
            }
            .into());
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            values: rows.into_iter().flatten().collect(),
        })
    }

    /// Creates a `rows x cols` matrix whose entries are produced by `f(row, col)`.
    #[must_use]
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                values.push(f(r, c));
            }
        }
        Self { rows, cols, values }
    }

    /// Creates the `size x size` identity matrix.
    #[must_use]
    pub fn identity(size: usize) -> Self {
        Self::from_fn(size, size, |r, c| if r == c { 1.0 } else { 0.0 })
    }

    /// Creates a `rows x cols` matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the matrix has as many rows as columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the entry at `(row, col)`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows && col < self.cols).then(|| self.entry(row, col))
    }

    /// Returns row `index` as a vector.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<Vector> {
        (index < self.rows).then(|| {
            Vector::new(&self.values[index * self.cols..(index + 1) * self.cols])
        })
    }

    /// Returns column `index` as a vector.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<Vector> {
        (index < self.cols).then(|| (0..self.rows).map(|r| self.entry(r, index)).collect())
    }

    pub(crate) fn entry(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Matrix {
        Self::from_fn(self.cols, self.rows, |r, c| self.entry(c, r))
    }

    /// Maps every entry through `f(row, col, value)`.
    #[must_use]
    pub fn map_entries(&self, f: impl Fn(usize, usize, f64) -> f64) -> Matrix {
        self.map_entries_where(f, |_, _| true)
    }

    /// Maps the entries selected by `predicate(row, col)` through
    /// `f(row, col, value)`, leaving the others unchanged.
    #[must_use]
    pub fn map_entries_where(
        &self,
        f: impl Fn(usize, usize, f64) -> f64,
        predicate: impl Fn(usize, usize) -> bool,
    ) -> Matrix {
        Self::from_fn(self.rows, self.cols, |r, c| {
            let value = self.entry(r, c);
            if predicate(r, c) {
                f(r, c, value)
            } else {
                value
            }
        })
    }

    /// Returns a copy with rows `a` and `b` exchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range.
    pub fn swap_rows(&self, a: usize, b: usize) -> Result<Matrix> {
        self.check_row(a)?;
        self.check_row(b)?;
        Ok(Self::from_fn(self.rows, self.cols, |r, c| {
            let source = if r == a {
                b
            } else if r == b {
                a
            } else {
                r
            };
            self.entry(source, c)
        }))
    }

    /// Returns a copy with column `col` multiplied by `factor`.
    ///
    /// # Errors
    ///
    /// Returns an error if `col` is out of range.
    pub fn scale_column(&self, col: usize, factor: f64) -> Result<Matrix> {
        if col >= self.cols {
            return Err(AlgebraError::IndexOutOfRange {
                kind: "column",
                index: col,
                len: self.cols,
            }
            .into());
        }
        Ok(self.map_entries_where(|_, _, value| value * factor, |_, c| c == col))
    }

    /// Returns the matrix with `row` and `col` removed.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Matrix> {
        self.check_row(row)?;
        if col >= self.cols {
            return Err(AlgebraError::IndexOutOfRange {
                kind: "column",
                index: col,
                len: self.cols,
            }
            .into());
        }
        Ok(self.without(row, col))
    }

    /// Determinant, by Laplace expansion along the first row.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn determinant(&self) -> Result<f64> {
        self.check_square("determinant")?;
        Ok(self.det())
    }

    /// Determinant of the submatrix without `row` and `col`.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square or an index is out of range.
    pub fn minor(&self, row: usize, col: usize) -> Result<f64> {
        self.check_square("minor")?;
        Ok(self.submatrix(row, col)?.det())
    }

    /// Signed minor: `(-1)^(row + col) * minor(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square or an index is out of range.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64> {
        self.check_square("cofactor")?;
        self.submatrix(row, col)?;
        Ok(self.signed_minor(row, col))
    }

    /// Transposed matrix of cofactors.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn adjugate(&self) -> Result<Matrix> {
        self.check_square("adjugate")?;
        Ok(Self::from_fn(self.rows, self.cols, |r, c| self.signed_minor(c, r)))
    }

    /// Returns `true` if the determinant is non-zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn is_invertible(&self) -> Result<bool> {
        Ok(self.determinant()? != 0.0)
    }

    /// Inverse matrix: the adjugate divided by the determinant.
    ///
    /// A singular matrix produces infinite or NaN entries rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn inverse(&self) -> Result<Matrix> {
        let determinant = self.determinant()?;
        Ok(self.adjugate()? / determinant)
    }

    /// Matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// Returns an error if the column count of `self` differs from the row
    /// count of `other`.
    pub fn checked_mul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(AlgebraError::DimensionMismatch {
                operation: "matrix product",
                expected: self.cols,
                found: other.rows,
            }
            .into());
        }
        Ok(Self::from_fn(self.rows, other.cols, |r, c| {
            (0..self.cols).map(|k| self.entry(r, k) * other.entry(k, c)).sum()
        }))
    }

    /// Matrix-vector product `M * v`, treating `vector` as a column vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the column count differs from the vector length.
    pub fn mul_vector(&self, vector: &Vector) -> Result<Vector> {
        if self.cols != vector.len() {
            return Err(AlgebraError::DimensionMismatch {
                operation: "matrix-vector product",
                expected: self.cols,
                found: vector.len(),
            }
            .into());
        }
        Ok((0..self.rows)
            .map(|r| {
                vector
                    .iter()
                    .enumerate()
                    .map(|(c, v)| self.entry(r, c) * v)
                    .sum::<f64>()
            })
            .collect())
    }

    /// Applies this 4x4 matrix to a point.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not 4x4.
    pub fn transform_point(&self, point: &Point3) -> Result<Point3> {
        self.check_homogeneous("point transform")?;
        let [x, y, z, _] = self.apply_homogeneous(point.to_array());
        Ok(Point3::new(x, y, z))
    }

    /// Applies this 4x4 matrix to a direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not 4x4.
    pub fn transform_direction(&self, direction: &Direction3) -> Result<Direction3> {
        self.check_homogeneous("direction transform")?;
        let [x, y, z, _] = self.apply_homogeneous(direction.to_array());
        Ok(Direction3::new(x, y, z))
    }

    /// Multiplies a homogeneous 4-tuple. Callers guarantee a 4x4 shape.
    pub(crate) fn apply_homogeneous(&self, v: [f64; 4]) -> [f64; 4] {
        let row = |r: usize| {
            let base = r * 4;
            self.values[base] * v[0]
                + self.values[base + 1] * v[1]
                + self.values[base + 2] * v[2]
                + self.values[base + 3] * v[3]
        };
        [row(0), row(1), row(2), row(3)]
    }

    pub(crate) fn check_homogeneous(&self, operation: &'static str) -> Result<()> {
        if self.rows != 4 {
            return Err(AlgebraError::DimensionMismatch {
                operation,
                expected: 4,
                found: self.rows,
            }
            .into());
        }
        if self.cols != 4 {
            return Err(AlgebraError::DimensionMismatch {
                operation,
                expected: 4,
                found: self.cols,
            }
            .into());
        }
        Ok(())
    }

    fn check_square(&self, operation: &'static str) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(AlgebraError::DimensionMismatch {
                operation,
                expected: self.rows,
                found: self.cols,
            }
            .into())
        }
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row < self.rows {
            Ok(())
        } else {
            Err(AlgebraError::IndexOutOfRange {
                kind: "row",
                index: row,
                len: self.rows,
            }
            .into())
        }
    }

    fn without(&self, row: usize, col: usize) -> Matrix {
        Self::from_fn(self.rows - 1, self.cols - 1, |r, c| {
            let source_row = if r < row { r } else { r + 1 };
            let source_col = if c < col { c } else { c + 1 };
            self.entry(source_row, source_col)
        })
    }

    fn signed_minor(&self, row: usize, col: usize) -> f64 {
        let minor = self.without(row, col).det();
        if (row + col).is_multiple_of(2) {
            minor
        } else {
            -minor
        }
    }

    // Square shape is checked by the public entry points.
    fn det(&self) -> f64 {
        match self.rows {
            0 => 1.0,
            1 => self.values[0],
            2 => self.values[0] * self.values[3] - self.values[1] * self.values[2],
            _ => (0..self.cols)
                .map(|c| self.entry(0, c) * self.signed_minor(0, c))
                .sum(),
        }
    }
}

// --- Transformation factories ---

impl Matrix {
    /// 4x4 translation by `(x, y, z)`.
    #[must_use]
    pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
        Self::translation_by(&Vector::from([x, y, z]))
    }

    /// `(n+1) x (n+1)` translation by an `n`-component offset: the identity
    /// with the offset in the last column.
    #[must_use]
    pub fn translation_by(offset: &Vector) -> Matrix {
        let n = offset.len();
        Self::from_fn(n + 1, n + 1, |r, c| {
            if r == c {
                1.0
            } else if c == n {
                offset.as_slice()[r]
            } else {
                0.0
            }
        })
    }

    /// 4x4 scaling by `(x, y, z)`.
    #[must_use]
    pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
        Self::scaling_by(&Vector::from([x, y, z]))
    }

    /// `(n+1) x (n+1)` diagonal scaling by `n` factors.
    #[must_use]
    pub fn scaling_by(factors: &Vector) -> Matrix {
        let n = factors.len();
        Self::from_fn(n + 1, n + 1, |r, c| match (r == c, r == n) {
            (false, _) => 0.0,
            (true, true) => 1.0,
            (true, false) => factors.as_slice()[r],
        })
    }

    /// 4x4 rotation by `angle` radians about `axis`.
    #[must_use]
    pub fn rotation(axis: Axis, angle: f64) -> Matrix {
        let (sin, cos) = angle.sin_cos();
        let values = match axis {
            Axis::X => [
                1.0, 0.0, 0.0, 0.0, //
                0.0, cos, -sin, 0.0, //
                0.0, sin, cos, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
            Axis::Y => [
                cos, 0.0, sin, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                -sin, 0.0, cos, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
            Axis::Z => [
                cos, -sin, 0.0, 0.0, //
                sin, cos, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        };
        Self {
            rows: 4,
            cols: 4,
            values: values.to_vec(),
        }
    }

    /// 4x4 shear moving `axis` in proportion to `in_proportion_to`.
    #[must_use]
    pub fn shearing(axis: Axis, in_proportion_to: Axis, amount: f64) -> Matrix {
        let (row, col) = (axis.index(), in_proportion_to.index());
        Self::identity(4).map_entries_where(|_, _, _| amount, |r, c| r == row && c == col)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;
    fn mul(self, factor: f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            values: self.values.iter().map(|v| v * factor).collect(),
        }
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;
    fn mul(self, factor: f64) -> Matrix {
        &self * factor
    }
}

impl Div<f64> for Matrix {
    type Output = Matrix;
    fn div(self, divisor: f64) -> Matrix {
        &self * (1.0 / divisor)
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(&a, &b)| approx_eq(a, b))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LumisError;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn sample_4x4() -> Matrix {
        m(&[
            &[-5.0, 2.0, 6.0, -8.0],
            &[1.0, -5.0, 1.0, 8.0],
            &[7.0, 7.0, -6.0, -7.0],
            &[1.0, -3.0, 7.0, 4.0],
        ])
    }

    // ── construction ──

    #[test]
    fn construct_and_index() {
        let a = m(&[&[1.0, 2.0, 3.0, 4.0], &[5.5, 6.5, 7.5, 8.5], &[9.0, 10.0, 11.0, 12.0]]);
        assert_eq!(a.row_count(), 3);
        assert_eq!(a.column_count(), 4);
        assert_eq!(a.get(0, 0), Some(1.0));
        assert_eq!(a.get(1, 2), Some(7.5));
        assert_eq!(a.get(2, 3), Some(12.0));
        assert_eq!(a.get(3, 0), None);
        assert_eq!(a.row(1).unwrap(), Vector::from([5.5, 6.5, 7.5, 8.5]));
        assert_eq!(a.column(1).unwrap(), Vector::from([2.0, 6.5, 10.0]));
    }

    #[test]
    fn construct_empty_is_invalid() {
        let err = Matrix::from_rows(Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            LumisError::Algebra(AlgebraError::InvalidArgument(_))
        ));
    }

    #[test]
    fn construct_ragged_is_mismatch() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(
            err,
            LumisError::Algebra(AlgebraError::DimensionMismatch { expected: 2, found: 1, .. })
        ));
    }

    // ── structural primitives ──

    #[test]
    fn swap_rows() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        assert_eq!(a.swap_rows(0, 2).unwrap(), m(&[&[5.0, 6.0], &[3.0, 4.0], &[1.0, 2.0]]));
    }

    #[test]
    fn swap_rows_out_of_range() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        for (i, j) in [(2, 0), (0, 2)] {
            let err = a.swap_rows(i, j).unwrap_err();
            assert!(matches!(
                err,
                LumisError::Algebra(AlgebraError::IndexOutOfRange { kind: "row", index: 2, len: 2 })
            ));
        }
    }

    #[test]
    fn scale_column() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(a.scale_column(1, 3.0).unwrap(), m(&[&[1.0, 6.0], &[3.0, 12.0]]));
        assert!(a.scale_column(2, 3.0).is_err());
    }

    #[test]
    fn map_entries_with_predicate() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let doubled_diagonal = a.map_entries_where(|_, _, v| v * 2.0, |r, c| r == c);
        assert_eq!(doubled_diagonal, m(&[&[2.0, 2.0], &[3.0, 8.0]]));
        let indexed = a.map_entries(|r, c, _| (r * 10 + c) as f64);
        assert_eq!(indexed, m(&[&[0.0, 1.0], &[10.0, 11.0]]));
    }

    #[test]
    fn transpose() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(a.transpose(), m(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]));
        assert_eq!(Matrix::identity(4).transpose(), Matrix::identity(4));
    }

    // ── determinant / inverse ──

    #[test]
    fn determinant_2x2() {
        assert_abs_diff_eq!(m(&[&[1.0, 5.0], &[-3.0, 2.0]]).determinant().unwrap(), 17.0);
    }

    #[test]
    fn determinant_3x3() {
        let a = m(&[&[1.0, 2.0, 6.0], &[-5.0, 8.0, -4.0], &[2.0, 6.0, 4.0]]);
        assert_abs_diff_eq!(a.cofactor(0, 0).unwrap(), 56.0);
        assert_abs_diff_eq!(a.cofactor(0, 1).unwrap(), 12.0);
        assert_abs_diff_eq!(a.cofactor(0, 2).unwrap(), -46.0);
        assert_abs_diff_eq!(a.determinant().unwrap(), -196.0);
    }

    #[test]
    fn determinant_4x4() {
        let a = m(&[
            &[-2.0, -8.0, 3.0, 5.0],
            &[-3.0, 1.0, 7.0, 3.0],
            &[1.0, 2.0, -9.0, 6.0],
            &[-6.0, 7.0, 7.0, -9.0],
        ]);
        assert_abs_diff_eq!(a.cofactor(0, 0).unwrap(), 690.0);
        assert_abs_diff_eq!(a.cofactor(0, 3).unwrap(), 51.0);
        assert_abs_diff_eq!(a.determinant().unwrap(), -4071.0);
    }

    #[test]
    fn determinant_non_square() {
        assert!(m(&[&[1.0, 2.0, 3.0]]).determinant().is_err());
    }

    #[test]
    fn minor_and_submatrix() {
        let a = m(&[&[3.0, 5.0, 0.0], &[2.0, -1.0, -7.0], &[6.0, -1.0, 5.0]]);
        assert_eq!(a.submatrix(1, 0).unwrap(), m(&[&[5.0, 0.0], &[-1.0, 5.0]]));
        assert_abs_diff_eq!(a.minor(1, 0).unwrap(), 25.0);
        assert_abs_diff_eq!(a.cofactor(1, 0).unwrap(), -25.0);
        assert!(a.submatrix(3, 0).is_err());
    }

    #[test]
    fn cofactor_sign_alternates() {
        let a = m(&[&[3.0, 5.0, 0.0], &[2.0, -1.0, -7.0], &[6.0, -1.0, 5.0]]);
        for row in 0..3 {
            for col in 0..3 {
                let minor = a.minor(row, col).unwrap();
                let sign = if (row + col).is_multiple_of(2) { 1.0 } else { -1.0 };
                assert_abs_diff_eq!(a.cofactor(row, col).unwrap(), sign * minor);
            }
        }
    }

    #[test]
    fn invertibility() {
        let singular = m(&[
            &[-4.0, 2.0, -2.0, -3.0],
            &[9.0, 6.0, 2.0, 6.0],
            &[0.0, -5.0, 1.0, -5.0],
            &[0.0, 0.0, 0.0, 0.0],
        ]);
        assert!(!singular.is_invertible().unwrap());
        assert!(sample_4x4().is_invertible().unwrap());
    }

    #[test]
    fn inverse_values() {
        let inverse = sample_4x4().inverse().unwrap();
        let expected = m(&[
            &[0.21805, 0.45113, 0.24060, -0.04511],
            &[-0.80827, -1.45677, -0.44361, 0.52068],
            &[-0.07895, -0.22368, -0.05263, 0.19737],
            &[-0.52256, -0.81391, -0.30075, 0.30639],
        ]);
        assert_abs_diff_eq!(inverse, expected);
    }

    #[test]
    fn inverse_round_trips() {
        let a = m(&[
            &[3.0, -9.0, 7.0, 3.0],
            &[3.0, -8.0, 2.0, -9.0],
            &[-4.0, 4.0, 4.0, 1.0],
            &[-6.0, 5.0, -1.0, 1.0],
        ]);
        let inverse = a.inverse().unwrap();
        assert_eq!(a.checked_mul(&inverse).unwrap(), Matrix::identity(4));
        assert_eq!(inverse.inverse().unwrap(), a);
        assert_eq!(Matrix::identity(4).inverse().unwrap(), Matrix::identity(4));
    }

    #[test]
    fn inverse_of_singular_is_not_finite() {
        let singular = Matrix::zeros(3, 3);
        let inverse = singular.inverse().unwrap();
        assert!((0..3).all(|r| (0..3).all(|c| !inverse.get(r, c).unwrap().is_finite())));
    }

    // ── products ──

    #[test]
    fn product_4x4() {
        let a = m(&[
            &[1.0, 2.0, 3.0, 4.0],
            &[5.0, 6.0, 7.0, 8.0],
            &[9.0, 8.0, 7.0, 6.0],
            &[5.0, 4.0, 3.0, 2.0],
        ]);
        let b = m(&[
            &[-2.0, 1.0, 2.0, 3.0],
            &[3.0, 2.0, 1.0, -1.0],
            &[4.0, 3.0, 6.0, 5.0],
            &[1.0, 2.0, 7.0, 8.0],
        ]);
        let expected = m(&[
            &[20.0, 22.0, 50.0, 48.0],
            &[44.0, 54.0, 114.0, 108.0],
            &[40.0, 58.0, 110.0, 102.0],
            &[16.0, 26.0, 46.0, 42.0],
        ]);
        assert_eq!(a.checked_mul(&b).unwrap(), expected);
        assert_eq!(a.checked_mul(&Matrix::identity(4)).unwrap(), a);
        assert_eq!(a.checked_mul(&Matrix::zeros(4, 4)).unwrap(), Matrix::zeros(4, 4));
    }

    #[test]
    fn product_rectangular() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = m(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);
        assert_eq!(a.checked_mul(&b).unwrap(), m(&[&[58.0, 64.0], &[139.0, 154.0]]));
        assert!(a.checked_mul(&a).is_err());
    }

    #[test]
    fn matrix_vector_product() {
        let a = m(&[
            &[1.0, 2.0, 3.0, 4.0],
            &[2.0, 4.0, 4.0, 2.0],
            &[8.0, 6.0, 4.0, 1.0],
            &[0.0, 0.0, 0.0, 1.0],
        ]);
        let v = Vector::from([1.0, 2.0, 3.0, 1.0]);
        assert_eq!(a.mul_vector(&v).unwrap(), Vector::from([18.0, 24.0, 33.0, 1.0]));
        assert!(a.mul_vector(&Vector::from([1.0, 2.0, 3.0])).is_err());
    }

    // ── factories ──

    #[test]
    fn translation_moves_points_not_directions() {
        let t = Matrix::translation(5.0, -3.0, 2.0);
        let p = Point3::new(-3.0, 4.0, 5.0);
        assert_eq!(t.transform_point(&p).unwrap(), Point3::new(2.0, 1.0, 7.0));
        let back = t.inverse().unwrap().transform_point(&Point3::new(2.0, 1.0, 7.0)).unwrap();
        assert_eq!(back, p);
        let d = Direction3::new(-3.0, 4.0, 5.0);
        assert_eq!(t.transform_direction(&d).unwrap(), d);
    }

    #[test]
    fn scaling_points_and_directions() {
        let s = Matrix::scaling(2.0, 3.0, 4.0);
        assert_eq!(
            s.transform_point(&Point3::new(-4.0, 6.0, 8.0)).unwrap(),
            Point3::new(-8.0, 18.0, 32.0)
        );
        assert_eq!(
            s.transform_direction(&Direction3::new(-4.0, 6.0, 8.0)).unwrap(),
            Direction3::new(-8.0, 18.0, 32.0)
        );
        assert_eq!(
            s.inverse().unwrap().transform_direction(&Direction3::new(-4.0, 6.0, 8.0)).unwrap(),
            Direction3::new(-2.0, 2.0, 2.0)
        );
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(Matrix::scaling(1.0, 1.0, 1.0).transform_point(&p).unwrap(), p);
    }

    #[test]
    fn rotations() {
        let half = std::f64::consts::FRAC_1_SQRT_2;
        let p = Point3::new(0.0, 1.0, 0.0);
        assert_eq!(
            Matrix::rotation(Axis::X, FRAC_PI_4).transform_point(&p).unwrap(),
            Point3::new(0.0, half, half)
        );
        assert_eq!(
            Matrix::rotation(Axis::X, FRAC_PI_2).transform_point(&p).unwrap(),
            Point3::new(0.0, 0.0, 1.0)
        );
        assert_eq!(
            Matrix::rotation(Axis::X, FRAC_PI_4).inverse().unwrap().transform_point(&p).unwrap(),
            Point3::new(0.0, half, -half)
        );

        let p = Point3::new(0.0, 0.0, 1.0);
        assert_eq!(
            Matrix::rotation(Axis::Y, FRAC_PI_4).transform_point(&p).unwrap(),
            Point3::new(half, 0.0, half)
        );
        assert_eq!(
            Matrix::rotation(Axis::Y, FRAC_PI_2).transform_point(&p).unwrap(),
            Point3::new(1.0, 0.0, 0.0)
        );

        let p = Point3::new(0.0, 1.0, 0.0);
        assert_eq!(
            Matrix::rotation(Axis::Z, FRAC_PI_4).transform_point(&p).unwrap(),
            Point3::new(-half, half, 0.0)
        );
        assert_eq!(
            Matrix::rotation(Axis::Z, FRAC_PI_2).transform_point(&p).unwrap(),
            Point3::new(-1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn shears() {
        let p = Point3::new(2.0, 3.0, 4.0);
        let cases = [
            (Axis::X, Axis::Y, Point3::new(5.0, 3.0, 4.0)),
            (Axis::X, Axis::Z, Point3::new(6.0, 3.0, 4.0)),
            (Axis::Y, Axis::X, Point3::new(2.0, 5.0, 4.0)),
            (Axis::Y, Axis::Z, Point3::new(2.0, 7.0, 4.0)),
            (Axis::Z, Axis::X, Point3::new(2.0, 3.0, 6.0)),
            (Axis::Z, Axis::Y, Point3::new(2.0, 3.0, 7.0)),
        ];
        for (axis, by, expected) in cases {
            let sheared = Matrix::shearing(axis, by, 1.0).transform_point(&p).unwrap();
            assert_eq!(sheared, expected, "shear {axis:?} by {by:?}");
        }
    }

    #[test]
    fn point_transform_requires_4x4() {
        let err = Matrix::identity(3).transform_point(&Point3::ORIGIN).unwrap_err();
        assert!(matches!(
            err,
            LumisError::Algebra(AlgebraError::DimensionMismatch { expected: 4, found: 3, .. })
        ));
    }
}
