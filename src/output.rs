//! # Output Module
//!
//! Encoders that persist a finished [`Raster`]:
//! - PNG export with clamping and sRGB gamma correction
//! - EXR export keeping the linear floating-point values
//! - Plain-text PPM (`P3`) export
//!
//! The raster is not guaranteed to lie in [0, 1]; every 8-bit encoder clamps
//! before quantizing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use exr::prelude::write_rgb_file;
use image::{ImageBuffer, Rgb};
use log::info;
use phongtrace::Raster;

/// Save the raster in the format implied by the file extension.
///
/// Supported extensions are `.png`, `.exr` and `.ppm` (case-insensitive).
pub fn save_raster(raster: &Raster, output_path: &Path) -> Result<()> {
    let extension = output_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => save_image_as_png(raster, output_path),
        "exr" => save_image_as_exr(raster, output_path),
        "ppm" => save_image_as_ppm(raster, output_path),
        other => bail!(
            "Unsupported file extension '{}'. Only .png, .exr and .ppm formats are supported.",
            other
        ),
    }
}

/// sRGB transfer curve with linear portion for dark values.
fn linear_to_gamma(linear: f32) -> f32 {
    if linear <= 0.0 {
        0.0
    } else if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Quantize a linear channel to 8 bits without gamma: `clamp(v) * 255.99`.
fn quantize(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.99) as u8
}

/// Save the raster as an 8-bit PNG with clamping and sRGB gamma correction.
///
/// Values above 1.0 become white and values below 0.0 become black.
pub fn save_image_as_png(raster: &Raster, output_path: &Path) -> Result<()> {
    let encode = |linear: f32| (linear_to_gamma(linear.clamp(0.0, 1.0)) * 255.0).round() as u8;
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(raster.width(), raster.height(), |x, y| {
        let pixel = raster.get(x, y);
        Rgb([encode(pixel.x), encode(pixel.y), encode(pixel.z)])
    });

    u8_image
        .save(output_path)
        .with_context(|| format!("Failed to save PNG image {}", output_path.display()))?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save the raster as EXR with full HDR precision.
///
/// The linear values are written as-is: no clamping, no gamma.
pub fn save_image_as_exr(raster: &Raster, output_path: &Path) -> Result<()> {
    let width = raster.width() as usize;
    let pixels = raster.pixels();

    write_rgb_file(output_path, width, raster.height() as usize, |x, y| {
        let pixel = pixels[y * width + x];
        (pixel.x, pixel.y, pixel.z)
    })
    .with_context(|| format!("Failed to save EXR image {}", output_path.display()))?;

    info!("HDR image saved as EXR: {}", output_path.display());
    Ok(())
}

/// Save the raster as a plain-text PPM (`P3`, maxval 255).
///
/// Channels are clamped to [0, 1] and scaled by 255.99 without gamma.
pub fn save_image_as_ppm(raster: &Raster, output_path: &Path) -> Result<()> {
    let file =
        File::create(output_path).with_context(|| format!("Could not open file {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    write_ppm(raster, &mut writer)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write PPM image {}", output_path.display()))?;

    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Write the `P3` header and one `r g b` line per pixel in row-major order.
fn write_ppm<W: Write>(raster: &Raster, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "P3\n{} {}\n255", raster.width(), raster.height())?;
    for pixel in raster.pixels() {
        writeln!(out, "{} {} {}", quantize(pixel.x), quantize(pixel.y), quantize(pixel.z))?;
    }
    Ok(())
}
