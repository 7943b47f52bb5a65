//! Infinite plane primitive.

use std::fmt;
use std::sync::Arc;

use crate::error::RenderError;
use crate::material::Material;
use crate::primitive::{Primitive, NO_HIT};
use crate::ray::Ray;
use crate::vector::{Point3, Vector3};

/// Rays closer than this to parallel never hit the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Plane through `point` with unit `normal`.
#[derive(Clone)]
pub struct Plane {
    point: Point3,
    normal: Vector3,
    material: Arc<dyn Material>,
}

impl Plane {
    /// Create a plane; the normal is normalized here.
    pub fn new(point: Point3, normal: Vector3, material: Arc<dyn Material>) -> Result<Self, RenderError> {
        Ok(Self {
            point,
            normal: normal.normalize()?,
            material,
        })
    }

    /// Unit normal of the plane.
    pub fn normal(&self) -> Vector3 {
        self.normal
    }
}

impl fmt::Debug for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plane")
            .field("point", &self.point)
            .field("normal", &self.normal)
            .finish_non_exhaustive()
    }
}

impl Primitive for Plane {
    fn intersect(&self, ray: &Ray) -> f32 {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return NO_HIT;
        }
        self.normal.dot(self.point - ray.origin) / denom
    }

    fn normal_at(&self, _point: Point3) -> Vector3 {
        self.normal
    }

    fn material(&self) -> &dyn Material {
        self.material.as_ref()
    }
}
