use std::ptr;

use crate::math::{Direction3, Point3, Ray, TOLERANCE};

use super::Surface;

/// A single ray/surface hit with its derived shading geometry.
///
/// Position, eye vector, normal and over-position are all computed eagerly
/// in world space on construction.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'s> {
    distance: f64,
    surface: &'s Surface,
    ray: Ray,
    position: Point3,
    eye: Direction3,
    normal: Direction3,
    inside: bool,
    over_position: Point3,
}

impl<'s> Intersection<'s> {
    /// Creates the hit of `ray` on `surface` at `distance`.
    #[must_use]
    pub fn new(distance: f64, surface: &'s Surface, ray: Ray) -> Self {
        let position = ray.position(distance);
        let eye = -ray.direction();
        let raw_normal = surface.normal(&position);
        let inside = raw_normal.dot(&eye) < 0.0;
        let normal = if inside { -raw_normal } else { raw_normal };
        let over_position = position + normal * TOLERANCE;

        Self {
            distance,
            surface,
            ray,
            position,
            eye,
            normal,
            inside,
            over_position,
        }
    }

    /// Returns the distance along the ray to the hit.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the surface that was hit.
    #[must_use]
    pub fn surface(&self) -> &'s Surface {
        self.surface
    }

    /// Returns the world-space ray that produced the hit.
    #[must_use]
    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    /// World-space hit point.
    #[must_use]
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Direction from the hit point back toward the ray origin.
    #[must_use]
    pub fn eye(&self) -> Direction3 {
        self.eye
    }

    /// Unit normal facing the eye.
    #[must_use]
    pub fn normal(&self) -> Direction3 {
        self.normal
    }

    /// `true` when the ray started inside the surface.
    #[must_use]
    pub fn inside(&self) -> bool {
        self.inside
    }

    /// Hit point nudged along the normal, used as the shadow-ray origin.
    #[must_use]
    pub fn over_position(&self) -> Point3 {
        self.over_position
    }
}

impl PartialEq for Intersection<'_> {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
            && ptr::eq(self.surface, other.surface)
            && self.ray == other.ray
    }
}

/// Intersections along a ray, kept sorted by ascending distance.
#[derive(Debug, Clone, Default)]
pub struct Intersections<'s> {
    items: Vec<Intersection<'s>>,
}

impl<'s> Intersections<'s> {
    /// Creates a collection from `items`, sorting them by distance.
    #[must_use]
    pub fn new(mut items: Vec<Intersection<'s>>) -> Self {
        items.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Self { items }
    }

    /// The hit: the intersection with the smallest positive distance.
    #[must_use]
    pub fn nearest_hit(&self) -> Option<&Intersection<'s>> {
        self.items.iter().find(|x| x.distance > 0.0)
    }

    /// Returns the number of intersections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no intersections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the intersection at `index` in distance order, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Intersection<'s>> {
        self.items.get(index)
    }

    /// Iterates over the intersections in ascending distance order.
    pub fn iter(&self) -> std::slice::Iter<'_, Intersection<'s>> {
        self.items.iter()
    }

    /// Returns `true` if `intersection` is in the list.
    #[must_use]
    pub fn contains(&self, intersection: &Intersection<'s>) -> bool {
        self.items.iter().any(|x| x == intersection)
    }

    /// Merges `other` into this collection, keeping distance order.
    pub fn merge(&mut self, other: Intersections<'s>) {
        self.items.extend(other.items);
        self.items.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    }
}

impl<'s> FromIterator<Intersection<'s>> for Intersections<'s> {
    fn from_iter<I: IntoIterator<Item = Intersection<'s>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'s> IntoIterator for Intersections<'s> {
    type Item = Intersection<'s>;
    type IntoIter = std::vec::IntoIter<Intersection<'s>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, 's> IntoIterator for &'a Intersections<'s> {
    type Item = &'a Intersection<'s>;
    type IntoIter = std::slice::Iter<'a, Intersection<'s>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Matrix;
    use approx::assert_abs_diff_eq;

    fn ray() -> Ray {
        Ray::new(Point3::new(0.0, 0.0, -5.0), Direction3::Z)
    }

    #[test]
    fn derived_fields_outside() {
        let s = Surface::sphere();
        let x = Intersection::new(4.0, &s, ray());
        assert_eq!(x.position(), Point3::new(0.0, 0.0, -1.0));
        assert_eq!(x.eye(), -Direction3::Z);
        assert_eq!(x.normal(), -Direction3::Z);
        assert!(!x.inside());
    }

    #[test]
    fn derived_fields_inside() {
        let s = Surface::sphere();
        let x = Intersection::new(1.0, &s, Ray::new(Point3::ORIGIN, Direction3::Z));
        assert_eq!(x.position(), Point3::new(0.0, 0.0, 1.0));
        assert_eq!(x.eye(), -Direction3::Z);
        assert!(x.inside());
        assert_eq!(x.normal(), -Direction3::Z);
    }

    #[test]
    fn over_position_is_nudged() {
        let s = Surface::sphere().with_transform(Matrix::translation(0.0, 0.0, 1.0)).unwrap();
        let x = Intersection::new(5.0, &s, ray());
        assert!(x.over_position().z() < -TOLERANCE / 2.0);
        assert!(x.position().z() > x.over_position().z());
    }

    #[test]
    fn collection_is_sorted() {
        let s = Surface::sphere();
        let xs: Intersections<'_> = [5.0, 7.0, -3.0, 2.0]
            .into_iter()
            .map(|t| Intersection::new(t, &s, ray()))
            .collect();
        let order: Vec<f64> = xs.iter().map(Intersection::distance).collect();
        assert_eq!(order, vec![-3.0, 2.0, 5.0, 7.0]);
        assert_eq!(xs.len(), 4);
    }

    #[test]
    fn hit_all_positive() {
        let s = Surface::sphere();
        let i1 = Intersection::new(1.0, &s, ray());
        let i2 = Intersection::new(2.0, &s, ray());
        let xs = Intersections::new(vec![i2, i1]);
        assert_eq!(xs.nearest_hit(), Some(&i1));
    }

    #[test]
    fn hit_some_negative() {
        let s = Surface::sphere();
        let i1 = Intersection::new(-1.0, &s, ray());
        let i2 = Intersection::new(1.0, &s, ray());
        let xs = Intersections::new(vec![i2, i1]);
        assert_eq!(xs.nearest_hit(), Some(&i2));
    }

    #[test]
    fn hit_all_negative() {
        let s = Surface::sphere();
        let xs = Intersections::new(vec![
            Intersection::new(-2.0, &s, ray()),
            Intersection::new(-1.0, &s, ray()),
        ]);
        assert!(xs.nearest_hit().is_none());
    }

    #[test]
    fn hit_ignores_zero() {
        let s = Surface::sphere();
        let xs = Intersections::new(vec![Intersection::new(0.0, &s, ray())]);
        assert!(xs.nearest_hit().is_none());
    }

    #[test]
    fn hit_is_lowest_positive() {
        let s = Surface::sphere();
        let xs: Intersections<'_> = [5.0, 7.0, -3.0, 2.0]
            .into_iter()
            .map(|t| Intersection::new(t, &s, ray()))
            .collect();
        assert_abs_diff_eq!(xs.nearest_hit().unwrap().distance(), 2.0);
    }

    #[test]
    fn equality_is_surface_identity() {
        let a = Surface::sphere();
        let b = Surface::sphere();
        let x = Intersection::new(4.0, &a, ray());
        assert_eq!(x, Intersection::new(4.0, &a, ray()));
        assert_ne!(x, Intersection::new(4.0, &b, ray()));
        assert_ne!(x, Intersection::new(4.5, &a, ray()));

        let xs = a.intersect(&ray());
        assert!(xs.contains(&x));
        assert!(!xs.contains(&Intersection::new(4.0, &b, ray())));
    }

    #[test]
    fn merge_keeps_order() {
        let a = Surface::sphere();
        let b = Surface::sphere().with_transform(Matrix::scaling(0.5, 0.5, 0.5)).unwrap();
        let mut xs = a.intersect(&ray());
        xs.merge(b.intersect(&ray()));
        let order: Vec<f64> = xs.iter().map(Intersection::distance).collect();
        assert_eq!(order, vec![4.0, 4.5, 5.5, 6.0]);
    }
}
