use crate::error::Result;
use crate::geometry::Surface;
use crate::math::{Color, Matrix, Point3, Transform};

/// The color rule of a pattern, evaluated in pattern space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PatternKind {
    /// A single color everywhere.
    Solid(Color),
    /// Alternates between two colors on unit intervals of `x`.
    Stripe(Color, Color),
    /// Concentric unit-width rings around the `z` axis.
    Ring(Color, Color),
    /// Linear blend from the first to the second color over each unit of `x`.
    Gradient(Color, Color),
}

/// A function from points to colors, placed by its own transform.
///
/// A world point reaches pattern space through the owning surface's inverse
/// transform followed by the pattern's inverse transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    kind: PatternKind,
    transform: Transform,
}

impl Pattern {
    /// Creates a pattern of `kind` with the identity transform.
    #[must_use]
    pub fn new(kind: PatternKind) -> Self {
        Self {
            kind,
            transform: Transform::identity(),
        }
    }

    /// A single color everywhere.
    #[must_use]
    pub fn solid(color: Color) -> Self {
        Self::new(PatternKind::Solid(color))
    }

    /// Alternates `a` and `b` across unit bands of x.
    #[must_use]
    pub fn stripe(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Stripe(a, b))
    }

    /// Alternates `a` and `b` across concentric unit rings.
    #[must_use]
    pub fn ring(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Ring(a, b))
    }

    /// Blends linearly from `from` to `to` across each unit of x.
    #[must_use]
    pub fn gradient(from: Color, to: Color) -> Self {
        Self::new(PatternKind::Gradient(from, to))
    }

    /// Returns this pattern placed by `matrix`.
    ///
    /// # Errors
    ///
    /// Returns an error if `matrix` is not 4x4.
    pub fn with_transform(self, matrix: Matrix) -> Result<Self> {
        Ok(Self {
            transform: Transform::new(matrix)?,
            ..self
        })
    }

    /// Returns the kind of the pattern.
    #[must_use]
    pub fn kind(&self) -> &PatternKind {
        &self.kind
    }

    /// Returns the pattern transform.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Color at a world-space point on `surface`.
    #[must_use]
    pub fn color_at(&self, point: &Point3, surface: &Surface) -> Color {
        let object_point = surface.transform().to_local_point(point);
        let pattern_point = self.transform.to_local_point(&object_point);
        self.pattern_at(&pattern_point)
    }

    /// Color at a point already in pattern space.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn pattern_at(&self, point: &Point3) -> Color {
        let even = |value: f64| value.floor().rem_euclid(2.0) == 0.0;
        match self.kind {
            PatternKind::Solid(color) => color,
            PatternKind::Stripe(a, b) => {
                if even(point.x()) {
                    a
                } else {
                    b
                }
            }
            PatternKind::Ring(a, b) => {
                if even(point.x().hypot(point.y())) {
                    a
                } else {
                    b
                }
            }
            PatternKind::Gradient(from, to) => {
                let fraction = point.x() - point.x().floor();
                from + (to - from) * fraction
            }
        }
    }
}
