use crate::math::{Direction3, Point3, Ray, TOLERANCE};

use super::Shape;

/// An infinite plane in local space.
///
/// The plane contains the local x and z axes; its normal is `+y` everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plane;

impl Shape for Plane {
    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        let dy = ray.direction().y();
        // Parallel or coplanar rays never register a hit.
        if dy.abs() < TOLERANCE {
            return Vec::new();
        }
        vec![-ray.origin().y() / dy]
    }

    fn local_normal(&self, _point: &Point3) -> Direction3 {
        Direction3::Y
    }
}
