//! Pinhole camera for primary ray generation.
//!
//! The camera derives a right-handed orthonormal basis from an eye position, a
//! look-at target and an up hint, then maps image-plane coordinates to world
//! space rays.

use crate::error::RenderError;
use crate::ray::Ray;
use crate::vector::{Point3, Vector3};

/// Pinhole camera with an orthonormal {forward, right, up} frame.
///
/// The frame is computed once in the constructor and never changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    eye: Point3,
    /// Unit view direction
    forward: Vector3,
    /// Unit vector pointing to image right
    right: Vector3,
    /// Unit vector pointing to image top
    up: Vector3,
    /// Distance from the eye to the image plane
    near: f32,
    /// Horizontal field of view in radians
    fov_horizontal: f32,
    /// Vertical field of view in radians
    fov_vertical: f32,
    /// tan(fov_horizontal / 2), cached for ray generation
    half_width: f32,
    /// tan(fov_vertical / 2), cached for ray generation
    half_height: f32,
}

impl Camera {
    /// Create a camera looking from `eye` toward `target`.
    ///
    /// Angles are in radians and must lie in (0, π). The basis is
    /// `forward = normalize(target - eye)`, `right = normalize(forward × world_up)`,
    /// `up = normalize(right × forward)`; re-deriving `up` keeps the frame
    /// orthogonal even when the hint is not perpendicular to `forward`.
    ///
    /// Fails with [`RenderError::InvalidCameraBasis`] if `eye == target`, if
    /// `forward` is parallel to `world_up`, or if `near` or an angle is out of range.
    pub fn new(
        eye: Point3,
        target: Point3,
        world_up: Vector3,
        near: f32,
        fov_horizontal: f32,
        fov_vertical: f32,
    ) -> Result<Self, RenderError> {
        if !(near > 0.0 && near.is_finite()) {
            return Err(RenderError::InvalidCameraBasis("near plane distance must be positive and finite"));
        }
        let valid_fov = |fov: f32| fov > 0.0 && fov < std::f32::consts::PI;
        if !valid_fov(fov_horizontal) || !valid_fov(fov_vertical) {
            return Err(RenderError::InvalidCameraBasis("field of view must lie strictly between 0 and pi"));
        }

        let forward = (target - eye)
            .normalize()
            .map_err(|_| RenderError::InvalidCameraBasis("eye and target coincide"))?;
        let right = forward
            .cross(world_up)
            .normalize()
            .map_err(|_| RenderError::InvalidCameraBasis("forward is parallel to the up hint"))?;
        let up = right
            .cross(forward)
            .normalize()
            .map_err(|_| RenderError::InvalidCameraBasis("cannot derive an up vector"))?;

        Ok(Self {
            eye,
            forward,
            right,
            up,
            near,
            fov_horizontal,
            fov_vertical,
            half_width: (fov_horizontal / 2.0).tan(),
            half_height: (fov_vertical / 2.0).tan(),
        })
    }

    /// Create a camera whose horizontal field of view matches the image aspect ratio.
    ///
    /// `fov_horizontal = 2 * atan(width / height * tan(fov_vertical / 2))`, so
    /// square pixels stay square.
    pub fn with_aspect(
        eye: Point3,
        target: Point3,
        world_up: Vector3,
        near: f32,
        fov_vertical: f32,
        width: u32,
        height: u32,
    ) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidRaster { width, height });
        }
        let aspect = width as f32 / height as f32;
        let fov_horizontal = 2.0 * (aspect * (fov_vertical / 2.0).tan()).atan();
        Self::new(eye, target, world_up, near, fov_horizontal, fov_vertical)
    }

    /// Map a pixel to normalized image-plane coordinates in [-1, 1]².
    ///
    /// Samples the pixel center. Column 0 is the left edge (u = -1 side) and
    /// row 0 is the top edge (v = +1 side), so the Y axis is flipped relative
    /// to raster rows.
    pub fn pixel_to_image_plane(col: u32, row: u32, width: u32, height: u32) -> (f32, f32) {
        let u = 2.0 * (col as f32 + 0.5) / width as f32 - 1.0;
        let v = 1.0 - 2.0 * (row as f32 + 0.5) / height as f32;
        (u, v)
    }

    /// Primary ray through image-plane coordinates `(u, v)`.
    ///
    /// The direction is
    /// `normalize(forward*near + right*u*tan(fovH/2) + up*v*tan(fovV/2))`.
    ///
    /// Fails with [`RenderError::DegenerateNormalization`] if `u` or `v` is
    /// not finite.
    pub fn ray_through(&self, u: f32, v: f32) -> Result<Ray, RenderError> {
        let direction = self.forward * self.near + self.right * (u * self.half_width) + self.up * (v * self.half_height);
        Ray::new(self.eye, direction)
    }

    /// Primary ray through the center of pixel (`col`, `row`).
    pub fn ray_for_pixel(&self, col: u32, row: u32, width: u32, height: u32) -> Result<Ray, RenderError> {
        let (u, v) = Self::pixel_to_image_plane(col, row, width, height);
        self.ray_through(u, v)
    }

    /// Camera position.
    pub fn eye(&self) -> Point3 {
        self.eye
    }

    /// Unit view direction.
    pub fn forward(&self) -> Vector3 {
        self.forward
    }

    /// Unit right vector.
    pub fn right(&self) -> Vector3 {
        self.right
    }

    /// Unit up vector.
    pub fn up(&self) -> Vector3 {
        self.up
    }

    /// Near plane distance.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Horizontal and vertical field of view in radians.
    pub fn fov(&self) -> (f32, f32) {
        (self.fov_horizontal, self.fov_vertical)
    }
}
