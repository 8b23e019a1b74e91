//! # Physics Integration
//!
//! Semi-implicit Euler integration of body velocities and positions,
//! with exponential velocity damping and quaternion orientation updates.

use crate::types::{RigidBody, Vec3};

/// Advance every dynamic body by one fixed timestep.
///
/// Kinematic bodies (mass 0) are skipped entirely: gravity and any
/// accumulated coupling forces must never move them. Their accumulators
/// are still cleared so stale forces cannot leak into a later step.
pub fn integrate_bodies(bodies: &mut [RigidBody], gravity: Vec3, dt: f32) {
    for body in bodies.iter_mut() {
        if body.is_kinematic() {
            body.clear_accumulators();
            continue;
        }

        // Velocity first, then position (semi-implicit Euler).
        let acceleration = gravity + body.force * body.inv_mass;
        body.vel += acceleration * dt;
        body.vel *= damping_factor(body.damping.linear, dt);

        let angular_acceleration = body.torque * body.inv_inertia;
        body.angular_vel += angular_acceleration * dt;
        body.angular_vel *= damping_factor(body.damping.angular, dt);

        body.pos += body.vel * dt;
        body.orientation = integrate_orientation(body.orientation, body.angular_vel, dt);

        body.clear_accumulators();
    }
}

/// Frame-rate independent damping: `(1 - d)^dt`.
fn damping_factor(damping: f32, dt: f32) -> f32 {
    (1.0 - damping).powf(dt)
}

/// First-order quaternion update `q += 0.5 * omega * q * dt`, renormalized.
fn integrate_orientation(orientation: [f32; 4], angular_vel: Vec3, dt: f32) -> [f32; 4] {
    if angular_vel.length_squared() == 0.0 {
        return orientation;
    }

    let q = glam::Quat::from_xyzw(orientation[0], orientation[1], orientation[2], orientation[3]);
    let omega = glam::Quat::from_xyzw(angular_vel.x, angular_vel.y, angular_vel.z, 0.0);
    let dq = omega.mul_quat(q);
    let half_dt = 0.5 * dt;
    let updated = glam::Quat::from_xyzw(
        q.x + dq.x * half_dt,
        q.y + dq.y * half_dt,
        q.z + dq.z * half_dt,
        q.w + dq.w * half_dt,
    )
    .normalize();

    [updated.x, updated.y, updated.z, updated.w]
}
