//! Sphere primitive for ray casting.
//!
//! Implements ray-sphere intersection with the textbook quadratic formula.

use std::fmt;
use std::sync::Arc;

use crate::error::RenderError;
use crate::material::Material;
use crate::primitive::{Primitive, NO_HIT};
use crate::ray::Ray;
use crate::vector::{Point3, Vector3};

/// Sphere primitive defined by center, radius, and material.
#[derive(Clone)]
pub struct Sphere {
    center: Point3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// The radius must be strictly positive and finite.
    pub fn new(center: Point3, radius: f32, material: Arc<dyn Material>) -> Result<Self, RenderError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(RenderError::InvalidPrimitive("sphere radius must be positive and finite"));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// Center point of the sphere in world coordinates.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Radius of the sphere (always positive).
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl fmt::Debug for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sphere")
            .field("center", &self.center)
            .field("radius", &self.radius)
            .finish_non_exhaustive()
    }
}

impl Primitive for Sphere {
    fn intersect(&self, ray: &Ray) -> f32 {
        let oc = ray.origin - self.center;

        let a = ray.direction.dot(ray.direction);
        if a == 0.0 {
            return NO_HIT;
        }
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        // A tangent ray (zero discriminant) still counts as a hit
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return NO_HIT;
        }

        (-b - discriminant.sqrt()) / (2.0 * a)
    }

    fn normal_at(&self, point: Point3) -> Vector3 {
        (point - self.center) / self.radius
    }

    fn material(&self) -> &dyn Material {
        self.material.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{MaterialProperties, UniformMaterial};
    use crate::vector::Color;
    use approx::assert_relative_eq;

    fn gray() -> Arc<dyn Material> {
        Arc::new(UniformMaterial::new(MaterialProperties::matte(Color::splat(0.5))))
    }

    fn unit_sphere() -> Sphere {
        Sphere::new(Point3::ORIGIN, 1.0, gray()).unwrap()
    }

    #[test]
    fn ray_through_center_hits_near_side() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -10.0), 2.0, gray()).unwrap();
        let ray = Ray::new(Point3::ORIGIN, Vector3::new(0.0, 0.0, -1.0)).unwrap();
        // center is 10 away, so the near pole is at 10 - 2
        assert_relative_eq!(sphere.intersect(&ray), 8.0, epsilon = 1e-5);
    }

    #[test]
    fn miss_returns_sentinel() {
        let sphere = unit_sphere();
        let ray = Ray::new(Point3::new(0.0, 5.0, 5.0), Vector3::new(0.0, 0.0, -1.0)).unwrap();
        assert_eq!(sphere.intersect(&ray), NO_HIT);
    }

    #[test]
    fn tangent_ray_counts_as_hit() {
        let sphere = unit_sphere();
        let ray = Ray::new(Point3::new(0.0, 1.0, 5.0), Vector3::new(0.0, 0.0, -1.0)).unwrap();
        assert_relative_eq!(sphere.intersect(&ray), 5.0, epsilon = 1e-5);
    }

    #[test]
    fn hit_point_is_independent_of_direction_scale() {
        let sphere = Sphere::new(Point3::new(0.3, -0.2, -6.0), 1.5, gray()).unwrap();
        let origin = Point3::new(0.0, 0.0, 1.0);
        let unit = Ray::new(origin, Vector3::new(0.05, -0.03, -1.0)).unwrap();
        let reference = unit.at(sphere.intersect(&unit));

        for scale in [0.25_f32, 3.0, 40.0] {
            let scaled = Ray::new_unnormalized(origin, unit.direction * scale);
            let t = sphere.intersect(&scaled);
            assert_relative_eq!(t * scale, sphere.intersect(&unit), epsilon = 1e-4);
            let p = scaled.at(t);
            assert_relative_eq!(p.distance(reference), 0.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn origin_inside_returns_negative_near_root() {
        let sphere = unit_sphere();
        let ray = Ray::new(Point3::ORIGIN, Vector3::X).unwrap();
        assert_relative_eq!(sphere.intersect(&ray), -1.0, epsilon = 1e-6);
    }

    #[test]
    fn sphere_behind_origin_is_negative() {
        let sphere = unit_sphere();
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vector3::Z).unwrap();
        assert!(sphere.intersect(&ray) < 0.0);
    }

    #[test]
    fn zero_direction_misses() {
        let sphere = unit_sphere();
        let ray = Ray::new_unnormalized(Point3::new(0.0, 0.0, 5.0), Vector3::ZERO);
        assert_eq!(sphere.intersect(&ray), NO_HIT);
    }

    #[test]
    fn surface_normals_are_unit_length() {
        let sphere = Sphere::new(Point3::new(1.0, 2.0, 3.0), 2.5, gray()).unwrap();
        let directions = [
            Vector3::X,
            -Vector3::Y,
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(-0.3, 0.8, -2.0),
        ];
        for d in directions {
            let p = sphere.center() + d.normalize().unwrap() * sphere.radius();
            let n = sphere.normal_at(p);
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn invalid_radius_is_rejected() {
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                Sphere::new(Point3::ORIGIN, radius, gray()),
                Err(RenderError::InvalidPrimitive(_))
            ));
        }
    }
}
