//! Material system for shading.
//!
//! A material maps a surface point to the reflectance properties used by the
//! Phong shading formula. Implementations must be total: every point of the
//! owning primitive's surface has to produce properties.

use crate::error::RenderError;
use crate::vector::{Color, Point3};

/// Local reflectance description sampled at a surface point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProperties {
    /// Diffuse (Lambertian) reflectance.
    pub diffuse: Color,
    /// Specular (Phong) reflectance.
    pub specular: Color,
    /// Phong exponent; zero disables the specular lobe.
    pub shininess: f32,
}

impl MaterialProperties {
    /// Create material properties.
    pub fn new(diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            diffuse,
            specular,
            shininess,
        }
    }

    /// Purely diffuse properties with no specular highlight.
    pub fn matte(diffuse: Color) -> Self {
        Self::new(diffuse, Color::ZERO, 0.0)
    }
}

/// Function from surface point to reflectance properties.
///
/// Must be thread-safe (Sync + Send) since pixels are shaded in parallel.
pub trait Material: Send + Sync {
    /// Sample the reflectance properties at `point`.
    fn properties(&self, point: Point3) -> MaterialProperties;
}

/// Position-independent material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformMaterial {
    properties: MaterialProperties,
}

impl UniformMaterial {
    /// Create a material returning `properties` everywhere.
    pub fn new(properties: MaterialProperties) -> Self {
        Self { properties }
    }
}

impl Material for UniformMaterial {
    fn properties(&self, _point: Point3) -> MaterialProperties {
        self.properties
    }
}

/// Solid 3D checkerboard alternating between two sets of properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckerMaterial {
    even: MaterialProperties,
    odd: MaterialProperties,
    cell_size: f32,
}

impl CheckerMaterial {
    /// Create a checker with cubic cells of edge `cell_size`.
    ///
    /// Cells whose integer lattice coordinates sum to an even number use `even`.
    pub fn new(even: MaterialProperties, odd: MaterialProperties, cell_size: f32) -> Result<Self, RenderError> {
        if !(cell_size > 0.0 && cell_size.is_finite()) {
            return Err(RenderError::InvalidPrimitive("checker cell size must be positive and finite"));
        }
        Ok(Self { even, odd, cell_size })
    }
}

impl Material for CheckerMaterial {
    fn properties(&self, point: Point3) -> MaterialProperties {
        // float-to-int casts saturate, so far away or NaN points still land in a cell
        let cell = |c: f32| (c / self.cell_size).floor() as i64;
        let parity = cell(point.x())
            .wrapping_add(cell(point.y()))
            .wrapping_add(cell(point.z()))
            .rem_euclid(2);
        if parity == 0 {
            self.even
        } else {
            self.odd
        }
    }
}
