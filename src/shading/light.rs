use std::fmt;

use crate::math::{Color, Point3};

/// Anything that emits light from a position.
///
/// Lights are shared across render threads, so implementors must be
/// `Send + Sync`.
pub trait LightSource: fmt::Debug + Send + Sync {
    /// Returns the position the light is emitted from.
    fn position(&self) -> Point3;

    /// Returns the intensity of the light.
    fn color(&self) -> Color;
}

/// A point light with no size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    position: Point3,
    color: Color,
}

impl PointLight {
    /// Creates a point light at `position` with intensity `color`.
    #[must_use]
    pub fn new(position: Point3, color: Color) -> Self {
        Self { position, color }
    }
}

impl LightSource for PointLight {
    fn position(&self) -> Point3 {
        self.position
    }

    fn color(&self) -> Color {
        self.color
    }
}
