//! The coupling link between the handle and the ball.
//!
//! Two interchangeable strategies share one link type, selected at
//! construction by [`CouplingMode`]:
//!
//! - **Spring**: an explicit spring-damper force computed from the
//!   post-step anchor poses and accumulated for the next integration
//!   pass. Compliant, oscillatory tether behavior.
//! - **Joint**: a stiffness-bounded positional constraint solved inside
//!   the step, pulling the two anchors toward the rest length without
//!   any manual force computation.
//!
//! Either way, a kinematic body on one end is never moved; only the
//! dynamic end responds.

use crate::types::{rotate, BodyId, RigidBody, Vec3};

/// Coupling strategy, chosen at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CouplingMode {
    /// Explicit spring-damper force applied at the anchors.
    Spring { stiffness: f32, damping: f32 },
    /// Positional constraint with a stiffness fraction in `(0, 1]`.
    Joint { stiffness: f32 },
}

/// A spring or joint connecting two bodies at local anchor points.
///
/// Anchors are fixed in each body's local frame; their world positions
/// are recomputed from the current poses every step.
#[derive(Copy, Clone, Debug)]
pub struct CouplingLink {
    pub body_a: BodyId,
    pub body_b: BodyId,
    pub local_anchor_a: Vec3,
    pub local_anchor_b: Vec3,
    pub rest_length: f32,
    pub mode: CouplingMode,
}

impl CouplingLink {
    /// Current world-space positions of the two anchors.
    #[must_use]
    pub fn world_anchors(&self, bodies: &[RigidBody]) -> (Vec3, Vec3) {
        let body_a = &bodies[self.body_a.0];
        let body_b = &bodies[self.body_b.0];
        (
            body_a.pos + rotate(body_a.orientation, self.local_anchor_a),
            body_b.pos + rotate(body_b.orientation, self.local_anchor_b),
        )
    }
}

/// Accumulate spring-damper forces for every spring-mode link.
///
/// Runs after integration: the forces are computed from post-step poses
/// and consumed by the next step's integration pass.
pub(crate) fn apply_spring_forces(bodies: &mut [RigidBody], links: &[CouplingLink]) {
    for link in links {
        let CouplingMode::Spring { stiffness, damping } = link.mode else {
            continue;
        };

        let (anchor_a, anchor_b) = link.world_anchors(bodies);
        let separation = anchor_b - anchor_a;
        let length = separation.length();
        if length < 1e-6 {
            continue;
        }
        let direction = separation / length;

        let body_a = &bodies[link.body_a.0];
        let body_b = &bodies[link.body_b.0];
        let r_a = anchor_a - body_a.pos;
        let r_b = anchor_b - body_b.pos;
        let anchor_vel_a = body_a.vel + body_a.angular_vel.cross(r_a);
        let anchor_vel_b = body_b.vel + body_b.angular_vel.cross(r_b);
        let relative_speed = (anchor_vel_b - anchor_vel_a).dot(direction);

        let magnitude = -stiffness * (length - link.rest_length) - damping * relative_speed;
        let force = direction * magnitude;

        // Equal and opposite at the anchor points. The integrator
        // discards accumulators on kinematic bodies.
        let b = &mut bodies[link.body_b.0];
        b.force += force;
        b.torque += r_b.cross(force);
        let a = &mut bodies[link.body_a.0];
        a.force -= force;
        a.torque += r_a.cross(-force);
    }
}

/// Solve every joint-mode link as a positional distance constraint.
///
/// Each pass moves the anchors a `stiffness` fraction of the way toward
/// the rest length, split by inverse mass, so a kinematic end stays
/// put. The applied shift is also folded into the velocities, the way a
/// position-based integrator would derive them, so the constraint holds
/// up against sustained forces like gravity.
pub(crate) fn solve_joints(bodies: &mut [RigidBody], links: &[CouplingLink], dt: f32) {
    for link in links {
        let CouplingMode::Joint { stiffness } = link.mode else {
            continue;
        };

        let (anchor_a, anchor_b) = link.world_anchors(bodies);
        let separation = anchor_b - anchor_a;
        let length = separation.length();
        if length < 1e-6 {
            continue;
        }

        let inv_mass_a = bodies[link.body_a.0].inv_mass;
        let inv_mass_b = bodies[link.body_b.0].inv_mass;
        let inv_mass_sum = inv_mass_a + inv_mass_b;
        if inv_mass_sum == 0.0 {
            continue;
        }

        let error = length - link.rest_length;
        let correction = (separation / length) * (error * stiffness);

        let shift_a = correction * (inv_mass_a / inv_mass_sum);
        let a = &mut bodies[link.body_a.0];
        a.pos += shift_a;
        a.vel += shift_a / dt;
        let shift_b = correction * (inv_mass_b / inv_mass_sum);
        let b = &mut bodies[link.body_b.0];
        b.pos -= shift_b;
        b.vel -= shift_b / dt;
    }
}
