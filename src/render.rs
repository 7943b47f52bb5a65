//! Driving loop: raster → camera → shader.

use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::error::RenderError;
use crate::raster::Raster;
use crate::scene::Scene;
use crate::shader::Shader;

/// Render `scene` into a new `width × height` raster.
///
/// Rows are shaded in parallel. Each pixel slot belongs to exactly one row
/// chunk, so no locking is needed and every pixel is written once. The scene
/// is only read.
///
/// Fails with [`RenderError::InvalidRaster`] for a zero dimension, or with the
/// first error raised while generating a primary ray.
pub fn render(scene: &Scene, camera: &Camera, shader: &Shader, width: u32, height: u32) -> Result<Raster, RenderError> {
    let mut raster = Raster::new(width, height)?;

    info!(
        "Rendering {}x{} image ({} primitives, {} lights) using {} CPU cores...",
        width,
        height,
        scene.primitives.len(),
        scene.lights.len(),
        rayon::current_num_threads()
    );
    debug!(
        "Camera eye {}, forward {}, right {}, up {}",
        camera.eye(),
        camera.forward(),
        camera.right(),
        camera.up()
    );

    let generation_start = Instant::now();
    let pb = ProgressBar::new(height as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} rows ETA: {eta}") {
        pb.set_style(style);
    }

    raster
        .pixels_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .try_for_each(|(row, line)| {
            for (col, pixel) in line.iter_mut().enumerate() {
                let ray = camera.ray_for_pixel(col as u32, row as u32, width, height)?;
                *pixel = shader.shade(&ray, scene);
            }
            pb.inc(1);
            Ok::<(), RenderError>(())
        })?;

    pb.finish();
    info!("Image generated in {:.2?}", generation_start.elapsed());

    Ok(raster)
}
