//! TOML render configuration.
//!
//! Every field is optional; missing values fall back to a 256x256 view of the
//! unit sphere from (0, 0, 5). Command line flags override file values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use phongtrace::{Camera, Color, Point3, RenderError, Vector3};
use serde::Deserialize;

use crate::cli::Args;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageConfig {
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
    /// Linear RGB returned for rays that hit nothing
    pub background: [f32; 3],
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            output: PathBuf::from("output.png"),
            background: [0.0, 0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    pub near: f32,
    pub vfov_degrees: f32,
    /// Derived from the image aspect ratio when absent
    pub hfov_degrees: Option<f32>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            near: 1.0,
            vfov_degrees: 45.0,
            hfov_degrees: None,
        }
    }
}

impl CameraConfig {
    /// Build the camera for an image of `width × height` pixels.
    pub fn build(&self, width: u32, height: u32) -> Result<Camera, RenderError> {
        let eye = Point3::from(self.eye);
        let target = Point3::from(self.target);
        let up = Vector3::from(self.up);
        let vfov = self.vfov_degrees.to_radians();
        match self.hfov_degrees {
            Some(hfov) => Camera::new(eye, target, up, self.near, hfov.to_radians(), vfov),
            None => Camera::with_aspect(eye, target, up, self.near, vfov, width, height),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub image: ImageConfig,
    pub camera: CameraConfig,
}

impl RenderConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid render configuration")
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("couldn't read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Apply command line overrides.
    pub fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(width) = args.width {
            self.image.width = width;
        }
        if let Some(height) = args.height {
            self.image.height = height;
        }
        if let Some(output) = &args.output {
            self.image.output = output.clone();
        }
        self
    }

    pub fn background(&self) -> Color {
        Color::from_array(self.image.background)
    }
}
