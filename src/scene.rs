use tracing::debug;

use crate::geometry::{Intersection, Intersections, Surface};
use crate::math::{Color, Point3, Ray};
use crate::shading::LightSource;

/// The surfaces and lights of a render.
///
/// A scene is immutable once built and can be shared across render threads.
/// Any [`LightSource`] implementation can light it.
#[derive(Debug, Default)]
pub struct Scene {
    surfaces: Vec<Surface>,
    lights: Vec<Box<dyn LightSource>>,
}

impl Scene {
    /// Creates a scene from its surfaces and lights.
    #[must_use]
    pub fn new(surfaces: Vec<Surface>, lights: Vec<Box<dyn LightSource>>) -> Self {
        debug!(
            surfaces = surfaces.len(),
            lights = lights.len(),
            "scene created"
        );
        Self { surfaces, lights }
    }

    /// Returns the surfaces of the scene.
    #[must_use]
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Returns the lights of the scene.
    #[must_use]
    pub fn lights(&self) -> &[Box<dyn LightSource>] {
        &self.lights
    }

    /// Every intersection of `ray` with every surface, ordered by distance.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        self.surfaces
            .iter()
            .flat_map(|surface| surface.intersect(ray))
            .collect()
    }

    /// Color of a hit, summed over all lights.
    ///
    /// Each light is tested for occlusion from the hit's over-position.
    #[must_use]
    pub fn shade(&self, hit: &Intersection<'_>) -> Color {
        let surface = hit.surface();
        self.lights
            .iter()
            .map(|light| {
                let light = light.as_ref();
                let in_shadow = self.is_in_shadow(&hit.over_position(), light);
                surface.material().illuminate(
                    &hit.position(),
                    surface,
                    &hit.eye(),
                    &hit.normal(),
                    light,
                    in_shadow,
                )
            })
            .sum()
    }

    /// Color seen along `ray`; black when nothing is hit.
    #[must_use]
    pub fn shade_ray(&self, ray: &Ray) -> Color {
        self.intersect(ray)
            .nearest_hit()
            .map_or(Color::BLACK, |hit| self.shade(hit))
    }

    /// `true` when some surface lies strictly between `point` and `light`.
    #[must_use]
    pub fn is_in_shadow(&self, point: &Point3, light: &dyn LightSource) -> bool {
        let to_light = light.position() - *point;
        let distance = to_light.magnitude();
        let ray = Ray::new(*point, to_light.normalize());
        self.intersect(&ray)
            .nearest_hit()
            .is_some_and(|hit| hit.distance() < distance)
    }
}
