mod plane;
mod sphere;

pub use plane::Plane;
pub use sphere::Sphere;

use crate::error::Result;
use crate::math::{Direction3, Matrix, Point3, Ray, Transform};
use crate::shading::Material;

use super::{Intersection, Intersections};

/// Local-space geometry of a surface variant.
///
/// Implementors work in a canonical frame; [`Surface`] maps rays into that
/// frame and normals back out of it.
pub trait Shape {
    /// Distances along `ray` at which it meets the shape, in ascending order.
    fn local_intersect(&self, ray: &Ray) -> Vec<f64>;

    /// Unnormalized outward normal at a local-space point on the shape.
    fn local_normal(&self, point: &Point3) -> Direction3;
}

/// The closed set of surface variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Sphere(Sphere),
    Plane(Plane),
    /// Degenerate sentinel: always hit at distance 0 with a zero normal.
    Null,
}

/// A shape placed in the world with a transform and a material.
///
/// Surfaces are immutable once built; the `with_*` builders return new
/// values.
#[derive(Debug, Clone)]
pub struct Surface {
    shape: ShapeKind,
    transform: Transform,
    material: Material,
}

impl Surface {
    fn from_shape(shape: ShapeKind) -> Self {
        Self {
            shape,
            transform: Transform::identity(),
            material: Material::default(),
        }
    }

    /// A unit sphere at the origin with the default material.
    #[must_use]
    pub fn sphere() -> Self {
        Self::from_shape(ShapeKind::Sphere(Sphere::default()))
    }

    /// A unit sphere at `center` with the default material.
    #[must_use]
    pub fn sphere_at(center: Point3) -> Self {
        Self::from_shape(ShapeKind::Sphere(Sphere::new(center)))
    }

    /// The local x-z plane with the default material.
    #[must_use]
    pub fn plane() -> Self {
        Self::from_shape(ShapeKind::Plane(Plane))
    }

    /// The null sentinel surface, which illuminates to black.
    #[must_use]
    pub fn null() -> Self {
        Self {
            shape: ShapeKind::Null,
            transform: Transform::identity(),
            material: Material::None,
        }
    }

    /// Returns this surface placed by `matrix`.
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

    /// Returns a copy of this surface with a different material.
    ///
    /// The null surface keeps its empty material.
    #[must_use]
    pub fn with_material(&self, material: Material) -> Self {
        match self.shape {
            ShapeKind::Null => self.clone(),
            _ => Self {
                material,
                ..self.clone()
            },
        }
    }

    /// Returns the shape of the surface.
    #[must_use]
    pub fn shape(&self) -> &ShapeKind {
        &self.shape
    }

    /// Returns the placement transform of the surface.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Returns the material of the surface.
    #[must_use]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Returns `true` for the null sentinel surface.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.shape, ShapeKind::Null)
    }

    /// Intersects a world-space ray with this surface.
    ///
    /// The ray is mapped into local space for the shape test, but every
    /// resulting [`Intersection`] refers to the original world-space ray.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        let distances = match &self.shape {
            ShapeKind::Sphere(sphere) => sphere.local_intersect(&self.transform.to_local_ray(ray)),
            ShapeKind::Plane(plane) => plane.local_intersect(&self.transform.to_local_ray(ray)),
            ShapeKind::Null => vec![0.0],
        };
        distances
            .into_iter()
            .map(|distance| Intersection::new(distance, self, *ray))
            .collect()
    }

    /// Unit world-space normal at a world-space point on the surface.
    #[must_use]
    pub fn normal(&self, point: &Point3) -> Direction3 {
        let local_point = self.transform.to_local_point(point);
        let local_normal = match &self.shape {
            ShapeKind::Sphere(sphere) => sphere.local_normal(&local_point),
            ShapeKind::Plane(plane) => plane.local_normal(&local_point),
            ShapeKind::Null => return Direction3::ZERO,
        };
        self.transform.normal_to_world(&local_normal)
    }
}
