use std::io::Write;

use crate::error::{OutputError, Result};
use crate::math::Color;

/// Parameters for plain-text PPM (`P3`) output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpmParams {
    /// Largest component value; colors are scaled from `[0, 1]` to
    /// `[0, max_value]`.
    pub max_value: u16,
    /// Maximum number of characters per line of pixel data.
    pub line_width: usize,
}

impl Default for PpmParams {
    fn default() -> Self {
        Self {
            max_value: 255,
            line_width: 70,
        }
    }
}

/// A rectangular grid of colors, row-major, with `(0, 0)` at the top left.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates a black canvas.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        }
    }

    /// Creates a canvas whose pixels are produced by `f(x, y)`.
    #[must_use]
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Color) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Returns the width of the canvas in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the canvas in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if `(x, y)` lies on the canvas.
    #[must_use]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Pixel at `(x, y)`; black outside the canvas.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Color {
        if self.contains(x, y) {
            self.pixels[y * self.width + x]
        } else {
            Color::BLACK
        }
    }

    /// Sets the pixel at `(x, y)`. Writes outside the canvas are ignored.
    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        if self.contains(x, y) {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Renders the canvas as a plain-text PPM document.
    ///
    /// Components are scaled to `params.max_value`, clamped and rounded.
    /// Each image row starts a new line and lines never exceed
    /// `params.line_width` characters unless a single value is wider.
    #[must_use]
    pub fn to_ppm(&self, params: &PpmParams) -> String {
        let mut out = format!("P3\n{} {}\n{}\n", self.width, self.height, params.max_value);

        let max = f64::from(params.max_value);
        for row in self.pixels.chunks(self.width.max(1)) {
            let mut line_len = 0;
            for value in row.iter().flat_map(|c| [c.r, c.g, c.b]) {
                let token = scale_component(value, max).to_string();
                if line_len > 0 && line_len + 1 + token.len() > params.line_width {
                    out.push('\n');
                    line_len = 0;
                }
                if line_len > 0 {
                    out.push(' ');
                    line_len += 1;
                }
                out.push_str(&token);
                line_len += token.len();
            }
            out.push('\n');
        }
        out
    }

    /// Writes [`to_ppm`](Self::to_ppm) output to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_ppm<W: Write>(&self, writer: &mut W, params: &PpmParams) -> Result<()> {
        writer
            .write_all(self.to_ppm(params).as_bytes())
            .and_then(|()| writer.flush())
            .map_err(OutputError::from)?;
        Ok(())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_component(value: f64, max: f64) -> u32 {
    (value * max).clamp(0.0, max).round() as u32
}
