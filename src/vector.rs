//! Point and vector algebra for geometric reasoning.
//!
//! Positions and directions are distinct types so that the compiler keeps
//! track of which is which: subtracting two points yields a vector, adding a
//! vector to a point yields a point. Both wrap `glam::Vec3A` for SIMD math.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use glam::Vec3A;

use crate::error::RenderError;

/// RGB color type using Vec3A for SIMD optimization.
///
/// Channels are stored as `x = r`, `y = g`, `z = b`. Values are conventionally
/// in [0, 1] but nothing clamps them.
pub type Color = Vec3A;

/// A location in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3(Vec3A);

/// A direction or displacement in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3(Vec3A);

impl Point3 {
    /// The world origin.
    pub const ORIGIN: Point3 = Point3(Vec3A::ZERO);

    /// Create a point from its coordinates.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3A::new(x, y, z))
    }

    /// X coordinate
    pub fn x(&self) -> f32 {
        self.0.x
    }

    /// Y coordinate
    pub fn y(&self) -> f32 {
        self.0.y
    }

    /// Z coordinate
    pub fn z(&self) -> f32 {
        self.0.z
    }

    /// Underlying SIMD value.
    pub fn as_vec3a(&self) -> Vec3A {
        self.0
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point3) -> f32 {
        (*self - other).length()
    }
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Vector3 = Vector3(Vec3A::ZERO);
    /// Unit vector along +X.
    pub const X: Vector3 = Vector3(Vec3A::X);
    /// Unit vector along +Y.
    pub const Y: Vector3 = Vector3(Vec3A::Y);
    /// Unit vector along +Z.
    pub const Z: Vector3 = Vector3(Vec3A::Z);

    /// Create a vector from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3A::new(x, y, z))
    }

    /// X component
    pub fn x(&self) -> f32 {
        self.0.x
    }

    /// Y component
    pub fn y(&self) -> f32 {
        self.0.y
    }

    /// Z component
    pub fn z(&self) -> f32 {
        self.0.z
    }

    /// Underlying SIMD value.
    pub fn as_vec3a(&self) -> Vec3A {
        self.0
    }

    /// Standard sum-of-products dot product.
    pub fn dot(&self, other: Vector3) -> f32 {
        self.0.dot(other.0)
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: Vector3) -> Vector3 {
        Vector3(self.0.cross(other.0))
    }

    /// Euclidean length.
    pub fn length(&self) -> f32 {
        self.0.length()
    }

    /// Squared Euclidean length.
    pub fn length_squared(&self) -> f32 {
        self.0.length_squared()
    }

    /// Return the unit vector pointing the same way.
    ///
    /// A zero-length or non-finite vector has no direction, so this returns
    /// [`RenderError::DegenerateNormalization`] instead of producing NaNs.
    pub fn normalize(&self) -> Result<Vector3, RenderError> {
        self.0
            .try_normalize()
            .map(Vector3)
            .ok_or(RenderError::DegenerateNormalization)
    }

    /// True if all components are finite.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl From<Vec3A> for Vector3 {
    fn from(v: Vec3A) -> Self {
        Self(v)
    }
}

impl From<Vec3A> for Point3 {
    fn from(v: Vec3A) -> Self {
        Self(v)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(v: [f32; 3]) -> Self {
        Self(Vec3A::from_array(v))
    }
}

impl From<[f32; 3]> for Point3 {
    fn from(v: [f32; 3]) -> Self {
        Self(Vec3A::from_array(v))
    }
}

impl Sub for Point3 {
    type Output = Vector3;
    fn sub(self, rhs: Point3) -> Vector3 {
        Vector3(self.0 - rhs.0)
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;
    fn add(self, rhs: Vector3) -> Point3 {
        Point3(self.0 + rhs.0)
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Point3;
    fn sub(self, rhs: Vector3) -> Point3 {
        Point3(self.0 - rhs.0)
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3(self.0 + rhs.0)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.0 += rhs.0;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3(self.0 - rhs.0)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3(-self.0)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f32) -> Vector3 {
        Vector3(self.0 * rhs)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3(self * rhs.0)
    }
}

impl Div<f32> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: f32) -> Vector3 {
        Vector3(self.0 / rhs)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}
