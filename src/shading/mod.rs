mod light;
mod material;
mod pattern;

pub use light::{LightSource, PointLight};
pub use material::{Material, PhongMaterial};
pub use pattern::{Pattern, PatternKind};
