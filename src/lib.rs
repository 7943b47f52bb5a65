//! phongtrace ray caster
//!
//! Casts one primary ray per pixel from a pinhole camera, finds the nearest
//! primitive and shades it with a Phong diffuse + specular model over every
//! light in the scene. The result is an unclamped linear-color raster.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod error;
pub mod light;
pub mod material;
pub mod plane;
pub mod primitive;
pub mod raster;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shader;
pub mod sphere;
pub mod vector;

pub use camera::Camera;
pub use error::RenderError;
pub use light::{DirectionalLight, Light, PointLight};
pub use material::{CheckerMaterial, Material, MaterialProperties, UniformMaterial};
pub use plane::Plane;
pub use primitive::{Primitive, PrimitiveList, NO_HIT};
pub use raster::Raster;
pub use ray::Ray;
pub use render::render;
pub use scene::Scene;
pub use shader::{Shader, SurfaceSample};
pub use sphere::Sphere;
pub use vector::{Color, Point3, Vector3};
