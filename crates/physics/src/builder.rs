//! # World Builder
//!
//! Registration of bodies, contact materials and coupling links, with
//! configuration validated up front. Anything that would make a stepped
//! quantity ill-defined is rejected here, never mid-simulation.

use crate::coupling::{CouplingLink, CouplingMode};
use crate::error::ConfigError;
use crate::types::{
    BodyId, ContactMaterial, Damping, Material, RigidBody, Shape, Vec3, IDENTITY_ORIENTATION,
};
use crate::World;

impl World {
    /// Register a rigid body at the origin and return its id.
    ///
    /// Mass 0 creates a kinematic body: immovable by forces, impulses
    /// and constraints, positioned only via [`World::set_position`].
    ///
    /// # Errors
    ///
    /// Rejects negative mass, non-positive shape dimensions, damping
    /// outside `[0, 1]` and negative material coefficients.
    pub fn create_body(
        &mut self,
        mass: f32,
        shape: Shape,
        material: Material,
        damping: Damping,
    ) -> Result<BodyId, ConfigError> {
        if mass < 0.0 {
            return Err(ConfigError::NegativeMass(mass));
        }
        check_shape(&shape)?;
        check_material(&material)?;
        for value in [damping.linear, damping.angular] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidDamping(value));
            }
        }

        let inv_mass = if mass > 0.0 { 1.0 / mass } else { 0.0 };
        let inv_inertia = if mass > 0.0 {
            1.0 / moment_of_inertia(mass, &shape)
        } else {
            0.0
        };

        self.bodies.push(RigidBody {
            shape,
            mass,
            inv_mass,
            inv_inertia,
            pos: Vec3::ZERO,
            orientation: IDENTITY_ORIENTATION,
            vel: Vec3::ZERO,
            angular_vel: Vec3::ZERO,
            damping,
            material,
            force: Vec3::ZERO,
            torque: Vec3::ZERO,
        });
        Ok(BodyId(self.bodies.len() - 1))
    }

    /// Register pairwise friction/restitution for two bodies.
    ///
    /// # Errors
    ///
    /// Rejects unknown body ids and negative coefficients.
    pub fn add_contact_material(
        &mut self,
        body_a: BodyId,
        body_b: BodyId,
        friction: f32,
        restitution: f32,
    ) -> Result<(), ConfigError> {
        self.check_body(body_a)?;
        self.check_body(body_b)?;
        check_material(&Material::new(friction, restitution))?;
        self.contact_materials.push(ContactMaterial {
            body_a,
            body_b,
            friction,
            restitution,
        });
        Ok(())
    }

    /// Register a coupling link and return its index.
    ///
    /// # Errors
    ///
    /// Rejects unknown body ids, non-positive rest length or stiffness,
    /// and negative spring damping.
    pub fn add_coupling(&mut self, link: CouplingLink) -> Result<usize, ConfigError> {
        self.check_body(link.body_a)?;
        self.check_body(link.body_b)?;
        if link.rest_length <= 0.0 {
            return Err(ConfigError::InvalidRestLength(link.rest_length));
        }
        match link.mode {
            CouplingMode::Spring { stiffness, damping } => {
                if stiffness <= 0.0 {
                    return Err(ConfigError::InvalidStiffness(stiffness));
                }
                if damping < 0.0 {
                    return Err(ConfigError::InvalidCouplingDamping(damping));
                }
            }
            CouplingMode::Joint { stiffness } => {
                if stiffness <= 0.0 || stiffness > 1.0 {
                    return Err(ConfigError::InvalidStiffness(stiffness));
                }
            }
        }
        self.couplings.push(link);
        Ok(self.couplings.len() - 1)
    }
}

fn check_shape(shape: &Shape) -> Result<(), ConfigError> {
    match shape {
        Shape::Sphere { radius } => {
            if *radius <= 0.0 {
                return Err(ConfigError::InvalidShape("sphere radius must be positive"));
            }
        }
        Shape::Cuboid { half_extents } => {
            if half_extents.x <= 0.0 || half_extents.y <= 0.0 || half_extents.z <= 0.0 {
                return Err(ConfigError::InvalidShape(
                    "cuboid half extents must be positive",
                ));
            }
        }
    }
    Ok(())
}

fn check_material(material: &Material) -> Result<(), ConfigError> {
    if material.friction < 0.0 {
        return Err(ConfigError::InvalidMaterial("friction must be non-negative"));
    }
    if material.restitution < 0.0 {
        return Err(ConfigError::InvalidMaterial(
            "restitution must be non-negative",
        ));
    }
    Ok(())
}

/// Scalar moment of inertia about the center of mass.
///
/// A diagonal average for the cuboid; exact for the solid sphere. Good
/// enough for the spin these scenes produce.
fn moment_of_inertia(mass: f32, shape: &Shape) -> f32 {
    match shape {
        Shape::Sphere { radius } => 0.4 * mass * radius * radius,
        Shape::Cuboid { half_extents } => {
            let w = 2.0 * half_extents.x;
            let h = 2.0 * half_extents.y;
            let d = 2.0 * half_extents.z;
            mass * (w * w + h * h + d * d) / 18.0
        }
    }
}
