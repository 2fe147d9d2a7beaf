//! Renders two concentric spheres over a striped floor and writes a PPM file.
//!
//! Usage:
//! ```text
//! cargo run --example default_scene                 # writes scene.ppm
//! cargo run --example default_scene -- out.ppm      # custom output path
//! RUST_LOG=lumis=debug cargo run --example default_scene
//! ```

use std::f64::consts::PI;
use std::fs::File;
use std::io::BufWriter;

use lumis::geometry::Surface;
use lumis::math::{view_transform, Color, Direction3, Matrix, Point3};
use lumis::render::{Camera, PpmParams, RenderParams};
use lumis::scene::Scene;
use lumis::shading::{Material, Pattern, PhongMaterial, PointLight};
use lumis::{LumisError, Result};

fn build_scene() -> Result<Scene> {
    let floor = Surface::plane().with_material(Material::from(
        PhongMaterial::default()
            .with_pattern(
                Pattern::stripe(Color::new(1.0, 0.9, 0.9), Color::new(0.6, 0.5, 0.5))
                    .with_transform(Matrix::scaling(0.5, 0.5, 0.5))?,
            )
            .with_specular(0.0),
    ));

    let outer = Surface::sphere()
        .with_transform(Matrix::translation(0.0, 1.0, 0.0))?
        .with_material(Material::from(PhongMaterial::solid(
            Color::new(0.8, 1.0, 0.6),
            0.1,
            0.7,
            0.2,
            200.0,
        )));

    let inner = Surface::sphere().with_transform(
        Matrix::translation(0.0, 1.0, 0.0).checked_mul(&Matrix::scaling(0.5, 0.5, 0.5))?,
    )?;

    let light = PointLight::new(Point3::new(-10.0, 10.0, -10.0), Color::WHITE);
    Ok(Scene::new(vec![floor, outer, inner], vec![Box::new(light)]))
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for lumis.
    // Override with RUST_LOG env var (e.g. RUST_LOG=lumis=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("lumis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let output = std::env::args().nth(1).unwrap_or_else(|| "scene.ppm".into());

    let scene = build_scene()?;
    let view = view_transform(
        Point3::new(0.0, 1.5, -5.0),
        Point3::new(0.0, 1.0, 0.0),
        Direction3::Y,
    );
    let camera = Camera::with_transform(400, 200, PI / 3.0, &view)?;
    let canvas = camera.render_with(&scene, &RenderParams::default())?;

    let file = File::create(&output).map_err(|e| LumisError::Output(e.into()))?;
    canvas.write_ppm(&mut BufWriter::new(file), &PpmParams::default())?;
    tracing::info!(path = %output, "image written");
    Ok(())
}
