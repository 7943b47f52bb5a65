//! Construction-time validation errors.
//!
//! Every error here is raised while building scene objects or the raster.
//! Shading itself never fails: a ray that hits nothing yields the background.

use std::fmt;

/// Errors reported while constructing cameras, primitives, materials or rasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The camera parameters do not span an orthonormal basis
    /// (eye equals target, forward parallel to the up hint, bad near plane or FOV).
    InvalidCameraBasis(&'static str),
    /// A zero-length or non-finite vector was normalized.
    DegenerateNormalization,
    /// A primitive or material was built with invalid parameters.
    InvalidPrimitive(&'static str),
    /// A raster with a zero dimension was requested.
    InvalidRaster {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidCameraBasis(reason) => write!(f, "invalid camera basis: {}", reason),
            RenderError::DegenerateNormalization => write!(f, "cannot normalize a zero-length vector"),
            RenderError::InvalidPrimitive(reason) => write!(f, "invalid primitive: {}", reason),
            RenderError::InvalidRaster { width, height } => {
                write!(f, "invalid raster size {}x{}: both dimensions must be positive", width, height)
            }
        }
    }
}

impl std::error::Error for RenderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = RenderError::InvalidCameraBasis("forward is parallel to the up hint");
        assert_eq!(err.to_string(), "invalid camera basis: forward is parallel to the up hint");

        let err = RenderError::InvalidRaster { width: 0, height: 12 };
        assert!(err.to_string().contains("0x12"));
    }
}
