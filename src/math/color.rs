use std::ops::{Add, AddAssign, Mul, Sub};

use approx::AbsDiffEq;

use super::{approx_eq, TOLERANCE};

/// An RGB color with unbounded real components.
///
/// Components are not clamped; values outside `[0, 1]` are only limited when
/// an image is serialized.
#[derive(Debug, Clone, Copy, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Black, `(0, 0, 0)`.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    /// White, `(1, 1, 1)`.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    /// Pure red.
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    /// Pure green.
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    /// Pure blue.
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    /// Green plus blue.
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    /// Red plus blue.
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);
    /// Red plus green.
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);

    /// Creates a color from its red, green and blue components.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// A gray with all components equal to `value`.
    #[must_use]
    pub const fn gray(value: f64) -> Self {
        Self::new(value, value, value)
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Sub for Color {
    type Output = Color;
    fn sub(self, rhs: Color) -> Color {
        Color::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

/// Hadamard product.
impl Mul for Color {
    type Output = Color;
    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;
    fn mul(self, factor: f64) -> Color {
        Color::new(self.r * factor, self.g * factor, self.b * factor)
    }
}

impl Mul<Color> for f64 {
    type Output = Color;
    fn mul(self, color: Color) -> Color {
        color * self
    }
}

impl std::iter::Sum for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Color {
        iter.fold(Color::BLACK, Add::add)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.r, other.r) && approx_eq(self.g, other.g) && approx_eq(self.b, other.b)
    }
}

impl AbsDiffEq for Color {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.g.abs_diff_eq(&other.g, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
    }
}
