//! Ray-primitive intersection protocol.
//!
//! Defines the Primitive trait for renderable shapes and PrimitiveList, the
//! ordered collection searched for the nearest hit.

use crate::material::{Material, MaterialProperties};
use crate::ray::Ray;
use crate::vector::{Point3, Vector3};

/// Sentinel returned by [`Primitive::intersect`] when the ray misses.
pub const NO_HIT: f32 = -1.0;

/// Trait for shapes that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) since the scene is shared by all
/// rendering threads.
pub trait Primitive: Sync + Send {
    /// Parametric distance along `ray` to the surface.
    ///
    /// Returns the nearer intersection parameter, which may be negative when
    /// the surface lies behind the ray origin, or [`NO_HIT`] when there is no
    /// intersection at all. Callers treat every negative value as a miss.
    fn intersect(&self, ray: &Ray) -> f32;

    /// Outward unit normal at `point`, which must lie on the surface.
    fn normal_at(&self, point: Point3) -> Vector3;

    /// The material owned by this primitive.
    fn material(&self) -> &dyn Material;

    /// Reflectance properties at `point`.
    fn material_at(&self, point: Point3) -> MaterialProperties {
        self.material().properties(point)
    }
}

/// Nearest intersection found in a [`PrimitiveList`].
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    /// Distance along the ray (non-negative)
    pub t: f32,
    /// Position of the primitive in the list
    pub index: usize,
    /// The primitive that was hit
    pub primitive: &'a dyn Primitive,
}

/// Ordered collection of primitives.
///
/// Uses linear search for intersection testing.
#[derive(Default)]
pub struct PrimitiveList {
    /// Vector of boxed primitives, in insertion order
    pub objects: Vec<Box<dyn Primitive>>,
}

impl PrimitiveList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { objects: Vec::new() }
    }

    /// Add a primitive at the end of the list.
    pub fn add(&mut self, object: Box<dyn Primitive>) {
        self.objects.push(object);
    }

    /// Number of primitives.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the list holds no primitives.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the closest primitive in front of the ray origin.
    ///
    /// Hits at `t < 0` are ignored. On equal distances the primitive added
    /// first wins.
    pub fn nearest(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut closest: Option<Hit<'_>> = None;

        for (index, object) in self.objects.iter().enumerate() {
            let t = object.intersect(ray);
            if t < 0.0 || t.is_nan() {
                continue;
            }
            if closest.map_or(true, |hit| t < hit.t) {
                closest = Some(Hit {
                    t,
                    index,
                    primitive: object.as_ref(),
                });
            }
        }

        closest
    }
}

impl FromIterator<Box<dyn Primitive>> for PrimitiveList {
    fn from_iter<I: IntoIterator<Item = Box<dyn Primitive>>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}
