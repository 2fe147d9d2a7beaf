pub mod intersection;
pub mod surface;

pub use intersection::{Intersection, Intersections};
pub use surface::{Plane, Shape, ShapeKind, Sphere, Surface};
