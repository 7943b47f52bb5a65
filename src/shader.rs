//! Local illumination for primary rays.
//!
//! Finds the nearest primitive along a ray and evaluates a Phong-style
//! diffuse + specular model for every light. There is no shadow testing: a
//! light blocked by another primitive still contributes fully.

use crate::light::Light;
use crate::material::MaterialProperties;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::{Color, Point3, Vector3};

/// Surface information at the nearest hit along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    /// Distance along the ray to the hit point
    pub t: f32,
    /// Index of the hit primitive in the scene
    pub index: usize,
    /// Hit point in world space
    pub point: Point3,
    /// Unit surface normal, facing against the incident ray
    pub normal: Vector3,
    /// True if the ray hit the outward-facing side
    pub front_face: bool,
    /// Material properties sampled at the hit point
    pub properties: MaterialProperties,
}

/// Evaluates the color seen along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shader {
    /// Color returned for rays that hit nothing
    pub background: Color,
}

impl Default for Shader {
    fn default() -> Self {
        Self {
            background: Color::ZERO,
        }
    }
}

impl Shader {
    /// Create a shader with the given background color.
    pub fn new(background: Color) -> Self {
        Self { background }
    }

    /// Find the nearest surface along `ray`.
    ///
    /// Hits behind the ray origin are ignored; on equal distances the
    /// primitive added to the scene first wins.
    pub fn trace(&self, ray: &Ray, scene: &Scene) -> Option<SurfaceSample> {
        let hit = scene.primitives.nearest(ray)?;
        let point = ray.at(hit.t);
        let outward_normal = hit.primitive.normal_at(point);

        // Always point the normal against the incident ray
        let front_face = ray.direction.dot(outward_normal) <= 0.0;
        let normal = if front_face { outward_normal } else { -outward_normal };

        Some(SurfaceSample {
            t: hit.t,
            index: hit.index,
            point,
            normal,
            front_face,
            properties: hit.primitive.material_at(point),
        })
    }

    /// Color seen along `ray`: the lit surface color, or the background on a miss.
    pub fn shade(&self, ray: &Ray, scene: &Scene) -> Color {
        match self.trace(ray, scene) {
            Some(surface) => self.illuminate(&surface, ray, &scene.lights),
            None => self.background,
        }
    }

    /// Sum the diffuse and specular contribution of every light at `surface`.
    ///
    /// The result is not clamped.
    pub fn illuminate(&self, surface: &SurfaceSample, ray: &Ray, lights: &[Box<dyn Light>]) -> Color {
        let props = &surface.properties;
        let view = (-ray.direction).normalize().ok();
        let mut color = Color::ZERO;

        for light in lights {
            // A light sitting exactly on the surface has no direction
            let Ok(to_light) = light.direction_to(surface.point).normalize() else {
                continue;
            };
            let n_dot_l = surface.normal.dot(to_light);
            if n_dot_l <= 0.0 {
                continue;
            }
            let intensity = light.intensity_at(surface.point);

            color += props.diffuse * intensity * n_dot_l;

            if props.shininess > 0.0 {
                if let Some(view) = view {
                    let reflected = 2.0 * n_dot_l * surface.normal - to_light;
                    let r_dot_v = reflected.dot(view).max(0.0);
                    color += props.specular * intensity * r_dot_v.powf(props.shininess);
                }
            }
        }

        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::{DirectionalLight, PointLight};
    use crate::material::UniformMaterial;
    use crate::plane::Plane;
    use crate::sphere::Sphere;
    use approx::assert_abs_diff_eq;
    use std::sync::Arc;

    fn sphere(center: Point3, radius: f32, props: MaterialProperties) -> Box<Sphere> {
        Box::new(Sphere::new(center, radius, Arc::new(UniformMaterial::new(props))).unwrap())
    }

    fn matte(r: f32, g: f32, b: f32) -> MaterialProperties {
        MaterialProperties::matte(Color::new(r, g, b))
    }

    /// Ray from (0, 0, 5) straight at the origin.
    fn axis_ray() -> Ray {
        Ray::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0)).unwrap()
    }

    fn assert_color_eq(actual: Color, expected: Color) {
        assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-5);
        assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-5);
        assert_abs_diff_eq!(actual.z, expected.z, epsilon = 1e-5);
    }

    #[test]
    fn miss_returns_background() {
        let mut scene = Scene::new();
        scene.add_primitive(sphere(Point3::new(10.0, 0.0, 0.0), 1.0, matte(1.0, 1.0, 1.0)));
        scene.add_light(Box::new(PointLight::new(Point3::new(0.0, 5.0, 5.0), Color::ONE)));
        let shader = Shader::new(Color::new(0.1, 0.2, 0.3));
        assert_eq!(shader.shade(&axis_ray(), &scene), Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn head_on_light_gives_full_diffuse() {
        let mut scene = Scene::new();
        scene.add_primitive(sphere(Point3::ORIGIN, 1.0, matte(0.8, 0.4, 0.2)));
        scene.add_light(Box::new(PointLight::new(Point3::new(0.0, 0.0, 5.0), Color::ONE)));
        let color = Shader::default().shade(&axis_ray(), &scene);
        assert_color_eq(color, Color::new(0.8, 0.4, 0.2));
    }

    #[test]
    fn diffuse_scales_with_cosine() {
        let mut scene = Scene::new();
        scene.add_primitive(sphere(Point3::ORIGIN, 1.0, matte(1.0, 1.0, 1.0)));
        // hit point is (0, 0, 1); light direction makes 45 degrees with the normal
        scene.add_light(Box::new(PointLight::new(Point3::new(0.0, 4.0, 5.0), Color::splat(0.5))));
        let color = Shader::default().shade(&axis_ray(), &scene);
        let expected = 0.5 * std::f32::consts::FRAC_1_SQRT_2;
        assert_color_eq(color, Color::splat(expected));
    }

    #[test]
    fn mirror_direction_adds_full_specular() {
        let mut scene = Scene::new();
        let props = MaterialProperties::new(Color::splat(0.25), Color::splat(0.5), 16.0);
        scene.add_primitive(sphere(Point3::ORIGIN, 1.0, props));
        scene.add_light(Box::new(PointLight::new(Point3::new(0.0, 0.0, 5.0), Color::ONE)));
        let color = Shader::default().shade(&axis_ray(), &scene);
        assert_color_eq(color, Color::splat(0.75));
    }

    #[test]
    fn specular_uses_shininess_exponent() {
        let props = MaterialProperties::new(Color::ZERO, Color::ONE, 8.0);
        let mut scene = Scene::new();
        scene.add_primitive(sphere(Point3::ORIGIN, 1.0, props));
        scene.add_light(Box::new(PointLight::new(Point3::new(0.0, 4.0, 5.0), Color::ONE)));
        let color = Shader::default().shade(&axis_ray(), &scene);
        // the reflected light direction is 45 degrees off the view direction
        assert_color_eq(color, Color::splat(0.0625));
    }

    #[test]
    fn light_behind_surface_contributes_nothing() {
        let mut scene = Scene::new();
        scene.add_primitive(sphere(Point3::ORIGIN, 1.0, matte(1.0, 1.0, 1.0)));
        scene.add_light(Box::new(PointLight::new(Point3::new(0.0, 0.0, -5.0), Color::ONE)));
        let shader = Shader::new(Color::new(1.0, 0.0, 0.0));
        // a hit, so not the background, but unlit
        assert_eq!(shader.shade(&axis_ray(), &scene), Color::ZERO);
    }

    #[test]
    fn lights_are_summed() {
        let mut scene = Scene::new();
        scene.add_primitive(sphere(Point3::ORIGIN, 1.0, matte(0.5, 0.5, 0.5)));
        scene.add_light(Box::new(PointLight::new(Point3::new(0.0, 0.0, 5.0), Color::new(1.0, 0.0, 0.0))));
        scene.add_light(Box::new(PointLight::new(Point3::new(0.0, 0.0, 9.0), Color::new(0.0, 0.0, 1.0))));
        let color = Shader::default().shade(&axis_ray(), &scene);
        assert_color_eq(color, Color::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn occluders_do_not_cast_shadows() {
        let mut scene = Scene::new();
        scene.add_primitive(sphere(Point3::ORIGIN, 1.0, matte(1.0, 1.0, 1.0)));
        // sits between the light and the hit point but off the camera ray
        scene.add_primitive(sphere(Point3::new(0.0, 3.0, 3.0), 0.5, matte(0.0, 1.0, 0.0)));
        scene.add_light(Box::new(PointLight::new(Point3::new(0.0, 5.0, 5.0), Color::ONE)));
        let lit = Shader::default().shade(&axis_ray(), &scene);
        assert!(lit.x > 0.0);
    }

    #[test]
    fn light_on_the_surface_is_skipped() {
        let mut scene = Scene::new();
        scene.add_primitive(sphere(Point3::ORIGIN, 1.0, matte(1.0, 1.0, 1.0)));
        scene.add_light(Box::new(PointLight::new(Point3::new(0.0, 0.0, 1.0), Color::ONE)));
        let color = Shader::default().shade(&axis_ray(), &scene);
        assert!(color.is_finite());
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn trace_reports_nearer_sphere() {
        let mut scene = Scene::new();
        scene.add_primitive(sphere(Point3::new(0.0, 0.0, -4.0), 1.0, matte(0.0, 0.0, 1.0)));
        scene.add_primitive(sphere(Point3::ORIGIN, 1.0, matte(1.0, 0.0, 0.0)));
        let surface = Shader::default().trace(&axis_ray(), &scene).unwrap();
        assert_eq!(surface.index, 1);
        assert_abs_diff_eq!(surface.t, 4.0, epsilon = 1e-5);
        assert_eq!(surface.properties.diffuse, Color::new(1.0, 0.0, 0.0));
        assert!(surface.front_face);
    }

    #[test]
    fn back_side_of_plane_faces_the_viewer() {
        let material = Arc::new(UniformMaterial::new(matte(1.0, 1.0, 1.0)));
        let mut scene = Scene::new();
        scene.add_primitive(Box::new(Plane::new(Point3::ORIGIN, Vector3::new(0.0, 0.0, -1.0), material).unwrap()));
        scene.add_light(Box::new(PointLight::new(Point3::new(0.0, 0.0, 5.0), Color::ONE)));
        let shader = Shader::default();
        let surface = shader.trace(&axis_ray(), &scene).unwrap();
        assert!(!surface.front_face);
        assert_eq!(surface.normal, Vector3::Z);
        assert_color_eq(shader.shade(&axis_ray(), &scene), Color::ONE);
    }

    #[test]
    fn directional_light_uses_its_fixed_direction() {
        let mut scene = Scene::new();
        scene.add_primitive(sphere(Point3::ORIGIN, 1.0, matte(1.0, 1.0, 1.0)));
        // travels down and away from the viewer; toward the light is (0, 1, 1)
        let light = DirectionalLight::new(Vector3::new(0.0, -1.0, -1.0), Color::new(1.0, 0.5, 0.0)).unwrap();
        scene.add_light(Box::new(light));
        let color = Shader::default().shade(&axis_ray(), &scene);
        let cos = std::f32::consts::FRAC_1_SQRT_2;
        assert_color_eq(color, Color::new(cos, 0.5 * cos, 0.0));
    }

    #[test]
    fn directional_light_from_behind_adds_nothing() {
        let mut scene = Scene::new();
        scene.add_primitive(sphere(Point3::ORIGIN, 1.0, MaterialProperties::new(Color::ONE, Color::ONE, 8.0)));
        let light = DirectionalLight::new(Vector3::new(0.0, 0.0, 1.0), Color::ONE).unwrap();
        scene.add_light(Box::new(light));
        assert_eq!(Shader::default().shade(&axis_ray(), &scene), Color::ZERO);
    }
}
