mod camera;
mod canvas;

pub use camera::Camera;
pub use canvas::{Canvas, PpmParams};

use std::time::Instant;

use rayon::prelude::*;
use tracing::info;

use crate::error::{RenderError, Result};
use crate::math::Color;
use crate::scene::Scene;

/// Parameters controlling how an image is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderParams {
    /// Worker threads for a dedicated pool; `0` uses the global rayon pool.
    pub threads: usize,
    /// Render rows in parallel. When `false`, pixels are shaded in row-major
    /// order on the calling thread.
    pub parallel: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            threads: 0,
            parallel: true,
        }
    }
}

impl Camera {
    /// Renders `scene` in parallel on the global rayon pool.
    #[must_use]
    pub fn render(&self, scene: &Scene) -> Canvas {
        self.logged(&RenderParams::default(), || {
            let mut canvas = Canvas::new(self.width(), self.height());
            self.shade_rows(scene, &mut canvas);
            canvas
        })
    }

    /// Renders `scene` with explicit scheduling parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the image has no pixels or the thread pool cannot
    /// be built.
    pub fn render_with(&self, scene: &Scene, params: &RenderParams) -> Result<Canvas> {
        if self.width() == 0 || self.height() == 0 {
            return Err(RenderError::InvalidParameters(format!(
                "image must have pixels, got {}x{}",
                self.width(),
                self.height()
            ))
            .into());
        }

        self.logged(params, || -> Result<Canvas> {
            let mut canvas = Canvas::new(self.width(), self.height());
            if !params.parallel {
                for (i, pixel) in canvas.pixels_mut().iter_mut().enumerate() {
                    *pixel = self.shade_pixel(scene, i % self.width(), i / self.width());
                }
            } else if params.threads == 0 {
                self.shade_rows(scene, &mut canvas);
            } else {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(params.threads)
                    .build()
                    .map_err(RenderError::from)?;
                pool.install(|| self.shade_rows(scene, &mut canvas));
            }
            Ok(canvas)
        })
    }

    /// Runs `render` between the `info` start and finish events.
    fn logged<T>(&self, params: &RenderParams, render: impl FnOnce() -> T) -> T {
        info!(
            width = self.width(),
            height = self.height(),
            threads = params.threads,
            parallel = params.parallel,
            "render started"
        );
        let start = Instant::now();
        let output = render();
        info!(elapsed = ?start.elapsed(), "render finished");
        output
    }

    fn shade_rows(&self, scene: &Scene, canvas: &mut Canvas) {
        let width = self.width();
        if width == 0 {
            return;
        }
        canvas
            .pixels_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = self.shade_pixel(scene, x, y);
                }
            });
    }

    fn shade_pixel(&self, scene: &Scene, x: usize, y: usize) -> Color {
        scene.shade_ray(&self.ray_for_pixel(x, y))
    }
}
