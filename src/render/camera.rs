use crate::error::Result;
use crate::math::{Matrix, Point3, Ray, Transform};

/// A pinhole camera looking down its local `-z` axis at a view plane one
/// unit away.
///
/// The longer image side spans `tan(fov / 2)` on either side of the view
/// axis; the shorter side is scaled by the aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    width: usize,
    height: usize,
    field_of_view: f64,
    transform: Transform,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    /// Creates a camera at the origin looking toward `-z`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(width: usize, height: usize, field_of_view: f64) -> Self {
        let half_view = (field_of_view / 2.0).tan();
        let aspect = width as f64 / height as f64;
        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        Self {
            width,
            height,
            field_of_view,
            transform: Transform::identity(),
            half_width,
            half_height,
            pixel_size: half_width * 2.0 / width as f64,
        }
    }

    /// Creates a camera placed by a view matrix such as
    /// [`view_transform`](crate::math::view_transform).
    ///
    /// # Errors
    ///
    /// Returns an error if `view` is not 4x4.
    pub fn with_transform(width: usize, height: usize, field_of_view: f64, view: &Matrix) -> Result<Self> {
        Ok(Self {
            transform: Transform::new(view.clone())?,
            ..Self::new(width, height, field_of_view)
        })
    }

    /// Returns the horizontal size of the image in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the vertical size of the image in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the field of view in radians.
    #[must_use]
    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    /// World-space size of one pixel on the view plane.
    #[must_use]
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// The view matrix.
    #[must_use]
    pub fn transform(&self) -> &Matrix {
        self.transform.matrix()
    }

    /// Inverse of the view matrix, mapping camera space to world space.
    #[must_use]
    pub fn inverse_transform(&self) -> &Matrix {
        self.transform.inverse()
    }

    /// World-space ray through the center of pixel `(x, y)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ray_for_pixel(&self, x: usize, y: usize) -> Ray {
        let x_offset = (x as f64 + 0.5) * self.pixel_size;
        let y_offset = (y as f64 + 0.5) * self.pixel_size;
        let camera_point = Point3::new(self.half_width - x_offset, self.half_height - y_offset, -1.0);

        let pixel = self.transform.to_local_point(&camera_point);
        let origin = self.transform.to_local_point(&Point3::ORIGIN);
        Ray::new(origin, (pixel - origin).normalize())
    }
}
