use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::AbsDiffEq;

use crate::error::{AlgebraError, LumisError};

use super::{approx_eq, Vector, TOLERANCE};

/// A position in 3D space, read as homogeneous coordinates with `w = 1`.
///
/// Translation moves points, unlike [`Direction3`].
#[derive(Debug, Clone, Copy)]
pub struct Point3 {
    x: f64,
    y: f64,
    z: f64,
}

/// A displacement in 3D space, read as homogeneous coordinates with `w = 0`.
///
/// Translation leaves directions unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Direction3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Point3 {
    /// The origin `(0, 0, 0)`.
    pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);

    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the z coordinate.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Homogeneous coordinates `[x, y, z, 1]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, 1.0]
    }

    /// Homogeneous coordinates as a 4-component [`Vector`].
    #[must_use]
    pub fn to_vector(&self) -> Vector {
        Vector::from(self.to_array())
    }

    /// Displacement from the origin to this point.
    #[must_use]
    pub fn to_direction(&self) -> Direction3 {
        Direction3::new(self.x, self.y, self.z)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Point3) -> f64 {
        (*other - *self).magnitude()
    }
}

impl Direction3 {
    /// The zero direction.
    pub const ZERO: Direction3 = Direction3::new(0.0, 0.0, 0.0);
    /// Unit direction along +x.
    pub const X: Direction3 = Direction3::new(1.0, 0.0, 0.0);
    /// Unit direction along +y.
    pub const Y: Direction3 = Direction3::new(0.0, 1.0, 0.0);
    /// Unit direction along +z.
    pub const Z: Direction3 = Direction3::new(0.0, 0.0, 1.0);

    /// Creates a direction.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the x component.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y component.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the z component.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Homogeneous coordinates `[x, y, z, 0]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, 0.0]
    }

    /// Homogeneous coordinates as a 4-component [`Vector`].
    #[must_use]
    pub fn to_vector(&self) -> Vector {
        Vector::from(self.to_array())
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: &Direction3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self x other`.
    #[must_use]
    pub fn cross(&self, other: &Direction3) -> Direction3 {
        Direction3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit direction with the same orientation.
    ///
    /// The zero direction normalizes to NaN components.
    #[must_use]
    pub fn normalize(&self) -> Direction3 {
        *self / self.magnitude()
    }

    /// Reflects this direction about `normal`.
    #[must_use]
    pub fn reflect(&self, normal: &Direction3) -> Direction3 {
        *self - *normal * (2.0 * self.dot(normal))
    }
}

fn from_homogeneous(vector: &Vector, operation: &'static str) -> Result<[f64; 3], LumisError> {
    match vector.as_slice() {
        [x, y, z] | [x, y, z, _] => Ok([*x, *y, *z]),
        other => Err(AlgebraError::DimensionMismatch {
            operation,
            expected: 4,
            found: other.len(),
        }
        .into()),
    }
}

impl TryFrom<&Vector> for Point3 {
    type Error = LumisError;

    fn try_from(vector: &Vector) -> Result<Self, Self::Error> {
        let [x, y, z] = from_homogeneous(vector, "point conversion")?;
        Ok(Point3::new(x, y, z))
    }
}

impl TryFrom<&Vector> for Direction3 {
    type Error = LumisError;

    fn try_from(vector: &Vector) -> Result<Self, Self::Error> {
        let [x, y, z] = from_homogeneous(vector, "direction conversion")?;
        Ok(Direction3::new(x, y, z))
    }
}

impl Sub for Point3 {
    type Output = Direction3;
    fn sub(self, rhs: Point3) -> Direction3 {
        Direction3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<Direction3> for Point3 {
    type Output = Point3;
    fn add(self, rhs: Direction3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Direction3> for Point3 {
    type Output = Point3;
    fn sub(self, rhs: Direction3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Point3 {
    type Output = Point3;
    fn neg(self) -> Point3 {
        Point3::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Direction3 {
    type Output = Direction3;
    fn add(self, rhs: Direction3) -> Direction3 {
        Direction3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Direction3 {
    type Output = Direction3;
    fn sub(self, rhs: Direction3) -> Direction3 {
        Direction3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Direction3 {
    type Output = Direction3;
    fn neg(self) -> Direction3 {
        Direction3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Direction3 {
    type Output = Direction3;
    fn mul(self, factor: f64) -> Direction3 {
        Direction3::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl Mul<Direction3> for f64 {
    type Output = Direction3;
    fn mul(self, direction: Direction3) -> Direction3 {
        direction * self
    }
}

impl Div<f64> for Direction3 {
    type Output = Direction3;
    fn div(self, divisor: f64) -> Direction3 {
        Direction3::new(self.x / divisor, self.y / divisor, self.z / divisor)
    }
}

macro_rules! tolerance_eq {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                approx_eq(self.x, other.x) && approx_eq(self.y, other.y) && approx_eq(self.z, other.z)
            }
        }

        impl AbsDiffEq for $ty {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                TOLERANCE
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                self.x.abs_diff_eq(&other.x, epsilon)
                    && self.y.abs_diff_eq(&other.y, epsilon)
                    && self.z.abs_diff_eq(&other.z, epsilon)
            }
        }
    };
}

tolerance_eq!(Point3);
tolerance_eq!(Direction3);
