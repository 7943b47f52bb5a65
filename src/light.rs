//! Light sources.
//!
//! A light answers two questions about a shaded point: where is the light
//! (as an unnormalized vector from the point toward it) and how much light
//! arrives there.

use crate::error::RenderError;
use crate::vector::{Color, Point3, Vector3};

/// Light source queried by the shader.
pub trait Light: Send + Sync {
    /// Vector from `point` toward the light.
    ///
    /// This is *not* the direction the light travels and it is not normalized;
    /// the caller normalizes when it needs a unit direction.
    fn direction_to(&self, point: Point3) -> Vector3;

    /// Light intensity arriving at `point`.
    fn intensity_at(&self, point: Point3) -> Color;
}

/// Omnidirectional light at a fixed position.
///
/// Intensity is constant with distance (no inverse-square falloff).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// Light position in world space
    pub position: Point3,
    /// Emitted intensity per channel
    pub intensity: Color,
}

impl PointLight {
    /// Create a point light.
    pub fn new(position: Point3, intensity: Color) -> Self {
        Self { position, intensity }
    }
}

impl Light for PointLight {
    fn direction_to(&self, point: Point3) -> Vector3 {
        self.position - point
    }

    fn intensity_at(&self, _point: Point3) -> Color {
        self.intensity
    }
}

/// Light arriving from infinitely far away along a single direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    direction: Vector3,
    intensity: Color,
}

impl DirectionalLight {
    /// Create a directional light; `direction` is the way the light travels.
    pub fn new(direction: Vector3, intensity: Color) -> Result<Self, RenderError> {
        Ok(Self {
            direction: direction.normalize()?,
            intensity,
        })
    }
}

impl Light for DirectionalLight {
    fn direction_to(&self, _point: Point3) -> Vector3 {
        -self.direction
    }

    fn intensity_at(&self, _point: Point3) -> Color {
        self.intensity
    }
}
