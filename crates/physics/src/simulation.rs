//! # Simulation World
//!
//! The container owning all rigid bodies, coupling links and contact
//! materials, and the fixed-timestep advance that ties the passes
//! together.

use crate::collision::resolve_body_contacts;
use crate::coupling::{apply_spring_forces, solve_joints, CouplingLink};
use crate::error::ConfigError;
use crate::integrator::integrate_bodies;
use crate::types::{BodyId, ContactMaterial, RigidBody, Vec3};

/// The simulation world.
///
/// Bodies are owned here and mutated only by the step passes and by
/// explicit pose overrides; everything else reads.
#[derive(Debug)]
pub struct World {
    pub bodies: Vec<RigidBody>,
    pub gravity: Vec3,
    pub couplings: Vec<CouplingLink>,
    pub contact_materials: Vec<ContactMaterial>,
}

impl World {
    /// Create an empty world with the given gravity.
    #[must_use]
    pub fn new(gravity: Vec3) -> Self {
        Self {
            bodies: Vec::new(),
            gravity,
            couplings: Vec::new(),
            contact_materials: Vec::new(),
        }
    }

    #[must_use]
    pub fn body(&self, id: BodyId) -> &RigidBody {
        &self.bodies[id.0]
    }

    pub(crate) fn check_body(&self, id: BodyId) -> Result<(), ConfigError> {
        if id.0 < self.bodies.len() {
            Ok(())
        } else {
            Err(ConfigError::UnknownBody(id))
        }
    }

    /// Override a body's position directly.
    ///
    /// This is the only sanctioned way to move a kinematic body.
    pub fn set_position(&mut self, id: BodyId, pos: Vec3) {
        self.bodies[id.0].pos = pos;
    }

    /// Override a body's velocity directly.
    pub fn set_velocity(&mut self, id: BodyId, vel: Vec3) {
        self.bodies[id.0].vel = vel;
    }

    /// Advance the world by one fixed timestep.
    ///
    /// Pass order within a step:
    /// 1. integrate velocities and positions (consumes the force
    ///    accumulators filled by the previous step's spring pass),
    /// 2. detect and resolve contacts with friction and restitution,
    /// 3. solve joint-mode couplings as positional constraints,
    /// 4. accumulate spring-mode coupling forces from the post-step
    ///    poses, to be consumed by the next step.
    pub fn step(&mut self, dt: f32) {
        integrate_bodies(&mut self.bodies, self.gravity, dt);
        resolve_body_contacts(&mut self.bodies, &self.contact_materials);
        solve_joints(&mut self.bodies, &self.couplings, dt);
        apply_spring_forces(&mut self.bodies, &self.couplings);
    }
}
