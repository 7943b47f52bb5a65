//! Ray representation for 3D ray casting.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a semi-infinite
//! line in 3D space used for intersection testing.

use crate::error::RenderError;
use crate::vector::{Point3, Vector3};

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Point3,

    /// Direction vector of the ray.
    ///
    /// Rays built with [`Ray::new`] carry a unit direction, so the parameter `t`
    /// reported by intersections is a world-space distance.
    pub direction: Vector3,
}

impl Ray {
    /// Create a ray with a normalized direction.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self, RenderError> {
        Ok(Self {
            origin,
            direction: direction.normalize()?,
        })
    }

    /// Create a ray keeping the direction exactly as given.
    ///
    /// Intersection parameters are then measured in units of `direction`.
    pub fn new_unnormalized(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + t * self.direction
    }
}
