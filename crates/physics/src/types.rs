//! Core value types shared across the engine: vectors, shapes, materials
//! and the rigid body itself.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Identity quaternion as stored on a body: `[x, y, z, w]`.
pub const IDENTITY_ORIENTATION: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Handle to a body registered with a [`crate::World`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

/// Collision geometry of a rigid body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    Cuboid { half_extents: Vec3 },
}

/// Per-body surface properties, used when no pairwise
/// [`ContactMaterial`] has been registered for a colliding pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub friction: f32,
    pub restitution: f32,
}

impl Material {
    #[must_use]
    pub const fn new(friction: f32, restitution: f32) -> Self {
        Self {
            friction,
            restitution,
        }
    }

    /// High-restitution preset.
    #[must_use]
    pub const fn bouncy() -> Self {
        Self::new(0.3, 0.9)
    }

    /// Low-friction preset.
    #[must_use]
    pub const fn slippery() -> Self {
        Self::new(0.05, 0.3)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(0.3, 0.3)
    }
}

/// Pairwise friction/restitution override for two specific bodies.
///
/// Symmetric: the order of `body_a`/`body_b` does not matter. Applied
/// only when exactly these two bodies are in contact.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactMaterial {
    pub body_a: BodyId,
    pub body_b: BodyId,
    pub friction: f32,
    pub restitution: f32,
}

/// Linear and angular velocity damping, applied per step as
/// `vel *= (1 - damping)^dt`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Damping {
    pub linear: f32,
    pub angular: f32,
}

impl Damping {
    pub const NONE: Self = Self {
        linear: 0.0,
        angular: 0.0,
    };

    #[must_use]
    pub const fn new(linear: f32, angular: f32) -> Self {
        Self { linear, angular }
    }
}

impl Default for Damping {
    fn default() -> Self {
        Self::new(0.01, 0.01)
    }
}

/// A rigid body owned by the [`crate::World`].
///
/// Mass 0 marks the body as kinematic: the integrator and the contact
/// and constraint solvers never move it; only an explicit pose override
/// through [`crate::World::set_position`] does.
#[derive(Clone, Debug)]
pub struct RigidBody {
    pub shape: Shape,
    pub mass: f32,
    pub inv_mass: f32,
    pub inv_inertia: f32,
    pub pos: Vec3,
    pub orientation: [f32; 4],
    pub vel: Vec3,
    pub angular_vel: Vec3,
    pub damping: Damping,
    pub material: Material,
    /// Force accumulator, consumed and cleared by the next integration pass.
    pub force: Vec3,
    /// Torque accumulator, consumed and cleared by the next integration pass.
    pub torque: Vec3,
}

impl RigidBody {
    /// Whether this body is immovable by forces and impulses.
    #[must_use]
    pub fn is_kinematic(&self) -> bool {
        self.inv_mass == 0.0
    }

    pub(crate) fn clear_accumulators(&mut self) {
        self.force = Vec3::ZERO;
        self.torque = Vec3::ZERO;
    }
}

/// Rotate a vector by a body orientation quaternion.
#[must_use]
pub fn rotate(orientation: [f32; 4], v: Vec3) -> Vec3 {
    let q = glam::Quat::from_xyzw(orientation[0], orientation[1], orientation[2], orientation[3]);
    let r = q * glam::Vec3::new(v.x, v.y, v.z);
    Vec3::new(r.x, r.y, r.z)
}
