use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use phongtrace::{
    render, CheckerMaterial, Color, DirectionalLight, MaterialProperties, Plane, Point3, PointLight, RenderError,
    Scene, Shader, Sphere, UniformMaterial, Vector3,
};

mod cli;
mod config;
mod logger;
mod output;

use cli::Args;
use config::RenderConfig;
use logger::init_logger;
use output::save_raster;

/// Height of the demo floor, touching the bottom of the unit sphere.
const FLOOR_Y: f32 = -1.0;

/// Checker for the floor. Cells are two units tall, so `FLOOR_Y` lies halfway
/// through a layer and hit points rounding slightly off the plane keep their parity.
fn floor_material() -> Result<CheckerMaterial, RenderError> {
    CheckerMaterial::new(
        MaterialProperties::matte(Color::splat(0.8)),
        MaterialProperties::matte(Color::splat(0.2)),
        2.0,
    )
}

/// Unit sphere under a white point light, standing on a checkered floor.
fn create_scene() -> Result<Scene, RenderError> {
    let mut scene = Scene::new();

    let red_plastic = Arc::new(UniformMaterial::new(MaterialProperties::new(
        Color::new(0.7, 0.15, 0.1),
        Color::splat(0.4),
        32.0,
    )));
    scene.add_primitive(Box::new(Sphere::new(Point3::ORIGIN, 1.0, red_plastic)?));

    let blue_matte = Arc::new(UniformMaterial::new(MaterialProperties::matte(Color::new(0.1, 0.2, 0.6))));
    scene.add_primitive(Box::new(Sphere::new(Point3::new(1.6, -0.6, -1.5), 0.4, blue_matte)?));

    let floor = Arc::new(floor_material()?);
    scene.add_primitive(Box::new(Plane::new(Point3::new(0.0, FLOOR_Y, 0.0), Vector3::Y, floor)?));

    scene.add_light(Box::new(PointLight::new(Point3::new(0.0, 5.0, 5.0), Color::ONE)));
    scene.add_light(Box::new(DirectionalLight::new(
        Vector3::new(-1.0, -1.0, 0.5),
        Color::splat(0.15),
    )?));

    Ok(scene)
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    }
    .with_overrides(args);

    let (width, height) = (config.image.width, config.image.height);
    info!("Image resolution: {}x{}", width, height);

    let camera = config
        .camera
        .build(width, height)
        .context("couldn't set up the camera")?;
    let scene = create_scene().context("couldn't build the scene")?;
    let shader = Shader::new(config.background());

    let raster = render(&scene, &camera, &shader, width, height)?;
    save_raster(&raster, &config.image.output)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("phongtrace - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_scene_builds() {
        let scene = create_scene().unwrap();
        assert_eq!(scene.primitives.len(), 3);
        assert_eq!(scene.lights.len(), 2);
    }

    #[test]
    fn floor_checker_is_stable_around_the_plane() {
        use phongtrace::Material;

        let floor = floor_material().unwrap();
        for (x, z) in [(0.3, 0.7), (-2.5, 1.1), (3.9, -4.2), (-0.1, -0.1)] {
            let on = floor.properties(Point3::new(x, FLOOR_Y, z));
            for dy in [-1e-3, -1e-5, 1e-5, 1e-3] {
                assert_eq!(floor.properties(Point3::new(x, FLOOR_Y + dy, z)), on);
            }
        }
        assert_ne!(
            floor.properties(Point3::new(0.5, FLOOR_Y, 0.5)),
            floor.properties(Point3::new(2.5, FLOOR_Y, 0.5))
        );
    }

    #[test]
    fn run_writes_the_requested_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("demo.ppm");
        let args = Args::try_parse_from([
            "phongtrace",
            "--width",
            "24",
            "--height",
            "16",
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();
        run(&args).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("P3\n24 16\n255\n"));
        assert_eq!(text.lines().count(), 3 + 24 * 16);
    }
}
