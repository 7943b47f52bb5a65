//! Read-only scene handed to the renderer.

use crate::light::Light;
use crate::primitive::{Primitive, PrimitiveList};

/// Primitives and lights of one render.
///
/// The scene is built up front and only read while rendering, so it can be
/// shared by reference across threads.
#[derive(Default)]
pub struct Scene {
    /// Primitives in insertion order (earlier ones win distance ties)
    pub primitives: PrimitiveList,
    /// Light sources, all of which light every hit point
    pub lights: Vec<Box<dyn Light>>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive to the scene.
    pub fn add_primitive(&mut self, primitive: Box<dyn Primitive>) {
        self.primitives.add(primitive);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Box<dyn Light>) {
        self.lights.push(light);
    }
}
