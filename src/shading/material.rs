use crate::geometry::Surface;
use crate::math::{Color, Direction3, Point3};

use super::{LightSource, Pattern};

/// Phong reflection parameters.
///
/// Coefficients are non-negative; negative inputs are clamped to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PhongMaterial {
    pattern: Pattern,
    ambient: f64,
    diffuse: f64,
    specular: f64,
    shininess: f64,
}

fn non_negative(value: f64) -> f64 {
    value.max(0.0)
}

impl PhongMaterial {
    /// Creates a material, clamping negative coefficients to zero.
    #[must_use]
    pub fn new(pattern: Pattern, ambient: f64, diffuse: f64, specular: f64, shininess: f64) -> Self {
        Self {
            pattern,
            ambient: non_negative(ambient),
            diffuse: non_negative(diffuse),
            specular: non_negative(specular),
            shininess: non_negative(shininess),
        }
    }

    /// Creates a material with a solid color.
    #[must_use]
    pub fn solid(color: Color, ambient: f64, diffuse: f64, specular: f64, shininess: f64) -> Self {
        Self::new(Pattern::solid(color), ambient, diffuse, specular, shininess)
    }

    /// Returns the pattern that colors the material.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the ambient coefficient.
    #[must_use]
    pub fn ambient(&self) -> f64 {
        self.ambient
    }

    /// Returns the diffuse coefficient.
    #[must_use]
    pub fn diffuse(&self) -> f64 {
        self.diffuse
    }

    /// Returns the specular coefficient.
    #[must_use]
    pub fn specular(&self) -> f64 {
        self.specular
    }

    /// Returns the specular exponent.
    #[must_use]
    pub fn shininess(&self) -> f64 {
        self.shininess
    }

    /// Returns a copy with a different pattern.
    #[must_use]
    pub fn with_pattern(&self, pattern: Pattern) -> Self {
        Self {
            pattern,
            ..self.clone()
        }
    }

    /// Returns a copy with a different ambient coefficient, clamped to zero.
    #[must_use]
    pub fn with_ambient(&self, ambient: f64) -> Self {
        Self {
            ambient: non_negative(ambient),
            ..self.clone()
        }
    }

    /// Returns a copy with a different diffuse coefficient, clamped to zero.
    #[must_use]
    pub fn with_diffuse(&self, diffuse: f64) -> Self {
        Self {
            diffuse: non_negative(diffuse),
            ..self.clone()
        }
    }

    /// Returns a copy with a different specular coefficient, clamped to zero.
    #[must_use]
    pub fn with_specular(&self, specular: f64) -> Self {
        Self {
            specular: non_negative(specular),
            ..self.clone()
        }
    }

    /// Returns a copy with a different specular exponent, clamped to zero.
    #[must_use]
    pub fn with_shininess(&self, shininess: f64) -> Self {
        Self {
            shininess: non_negative(shininess),
            ..self.clone()
        }
    }

    /// Phong color of `point` on `surface` lit by `light`.
    ///
    /// `eye` and `normal` must be unit directions. In shadow only the ambient
    /// term contributes. The result is not clamped.
    #[must_use]
    pub fn illuminate(
        &self,
        point: &Point3,
        surface: &Surface,
        eye: &Direction3,
        normal: &Direction3,
        light: &dyn LightSource,
        in_shadow: bool,
    ) -> Color {
        let effective = self.pattern.color_at(point, surface) * light.color();
        let ambient = effective * self.ambient;
        if in_shadow {
            return ambient;
        }

        let to_light = (light.position() - *point).normalize();
        let light_dot_normal = to_light.dot(normal);
        if light_dot_normal <= 0.0 {
            return ambient;
        }
        let diffuse = effective * self.diffuse * light_dot_normal;

        let reflected = (-to_light).reflect(normal);
        let reflect_dot_eye = reflected.dot(eye);
        let specular = if reflect_dot_eye <= 0.0 {
            Color::BLACK
        } else {
            light.color() * self.specular * reflect_dot_eye.powf(self.shininess)
        };

        ambient + diffuse + specular
    }
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self::solid(Color::WHITE, 0.1, 0.9, 0.9, 200.0)
    }
}

/// How a surface responds to light.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    /// Phong reflection.
    Phong(Box<PhongMaterial>),
    /// Reflects nothing; always black.
    None,
}

impl Material {
    /// Color of `point` on `surface` lit by `light`.
    #[must_use]
    pub fn illuminate(
        &self,
        point: &Point3,
        surface: &Surface,
        eye: &Direction3,
        normal: &Direction3,
        light: &dyn LightSource,
        in_shadow: bool,
    ) -> Color {
        match self {
            Material::Phong(phong) => phong.illuminate(point, surface, eye, normal, light, in_shadow),
            Material::None => Color::BLACK,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::from(PhongMaterial::default())
    }
}

impl From<PhongMaterial> for Material {
    fn from(phong: PhongMaterial) -> Self {
        Material::Phong(Box::new(phong))
    }
}
