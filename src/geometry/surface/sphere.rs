use crate::math::{Direction3, Point3, Ray};

use super::Shape;

/// A unit sphere in local space.
///
/// Implicit form: `|P - center|^2 = 1`. Scaling the owning surface's
/// transform produces spheres of other radii and ellipsoids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3,
}

impl Sphere {
    /// Creates a unit sphere centered at `center`.
    #[must_use]
    pub fn new(center: Point3) -> Self {
        Self { center }
    }

    /// Returns the center of the sphere.
    #[must_use]
    pub fn center(&self) -> Point3 {
        self.center
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(Point3::ORIGIN)
    }
}

impl Shape for Sphere {
    /// Solves `a t^2 + b t + c = 0` for the ray/sphere quadratic.
    ///
    /// Both roots are returned, smaller first, even when they coincide at a
    /// tangent point.
    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        let direction = ray.direction();
        let to_ray = ray.origin() - self.center;

        let a = direction.dot(&direction);
        let b = 2.0 * direction.dot(&to_ray);
        let c = to_ray.dot(&to_ray) - 1.0;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return Vec::new();
        }

        let root = discriminant.sqrt();
        let t1 = (-b - root) / (2.0 * a);
        let t2 = (-b + root) / (2.0 * a);
        vec![t1.min(t2), t1.max(t2)]
    }

    fn local_normal(&self, point: &Point3) -> Direction3 {
        *point - self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn hits(origin: Point3, direction: Direction3) -> Vec<f64> {
        Sphere::default().local_intersect(&Ray::new(origin, direction))
    }

    #[test]
    fn ray_through_center() {
        let t = hits(Point3::new(0.0, 0.0, -5.0), Direction3::Z);
        assert_eq!(t.len(), 2);
        assert_abs_diff_eq!(t[0], 4.0);
        assert_abs_diff_eq!(t[1], 6.0);
    }

    #[test]
    fn tangent_ray_has_two_equal_roots() {
        let t = hits(Point3::new(0.0, 1.0, -5.0), Direction3::Z);
        assert_eq!(t.len(), 2);
        assert_abs_diff_eq!(t[0], 5.0);
        assert_abs_diff_eq!(t[1], 5.0);
    }

    #[test]
    fn ray_misses() {
        assert!(hits(Point3::new(0.0, 2.0, -5.0), Direction3::Z).is_empty());
    }

    #[test]
    fn ray_from_inside() {
        let t = hits(Point3::ORIGIN, Direction3::Z);
        assert_abs_diff_eq!(t[0], -1.0);
        assert_abs_diff_eq!(t[1], 1.0);
    }

    #[test]
    fn sphere_behind_ray() {
        let t = hits(Point3::new(0.0, 0.0, 5.0), Direction3::Z);
        assert_abs_diff_eq!(t[0], -6.0);
        assert_abs_diff_eq!(t[1], -4.0);
    }

    #[test]
    fn off_center_sphere() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, 3.0));
        let t = sphere.local_intersect(&Ray::new(Point3::ORIGIN, Direction3::Z));
        assert_abs_diff_eq!(t[0], 2.0);
        assert_abs_diff_eq!(t[1], 4.0);
        assert_eq!(sphere.local_normal(&Point3::new(0.0, 0.0, 2.0)), -Direction3::Z);
    }

    #[test]
    fn normal_on_axes() {
        let s = Sphere::default();
        assert_eq!(s.local_normal(&Point3::new(1.0, 0.0, 0.0)), Direction3::X);
        assert_eq!(s.local_normal(&Point3::new(0.0, 1.0, 0.0)), Direction3::Y);
        assert_eq!(s.local_normal(&Point3::new(0.0, 0.0, 1.0)), Direction3::Z);
    }
}
