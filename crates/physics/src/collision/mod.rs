//! Narrow-phase contact detection and impulse resolution.
//!
//! The engine checks every body pair directly; there is no broad phase.
//! The scenes this engine serves contain a handful of bodies, so the
//! quadratic pair loop is never the bottleneck.

mod sphere_cuboid;
mod sphere_sphere;

pub use sphere_cuboid::detect_sphere_cuboid;
pub use sphere_sphere::detect_sphere_sphere;

use crate::types::{ContactMaterial, Material, RigidBody, Shape, Vec3};

const CORRECTION_PERCENT: f32 = 0.8;
const PENETRATION_SLOP: f32 = 0.01;
const RESTITUTION_SLOP: f32 = 0.01;

/// A detected contact between two bodies.
///
/// `normal` points from the second body toward the first.
#[derive(Copy, Clone, Debug)]
pub struct Contact {
    pub point: Vec3,
    pub normal: Vec3,
    pub depth: f32,
}

/// Detect and resolve all contacts among the given bodies.
pub(crate) fn resolve_body_contacts(
    bodies: &mut [RigidBody],
    contact_materials: &[ContactMaterial],
) {
    let count = bodies.len();
    for i in 0..count {
        for j in (i + 1)..count {
            if bodies[i].is_kinematic() && bodies[j].is_kinematic() {
                continue;
            }
            // Contact normal convention: from `second` toward `first`.
            let (first, second, contact) = match detect_pair(&bodies[i], &bodies[j]) {
                Some((swapped, contact)) => {
                    if swapped {
                        (j, i, contact)
                    } else {
                        (i, j, contact)
                    }
                }
                None => continue,
            };
            let (friction, restitution) = pair_response(
                contact_materials,
                i,
                j,
                &bodies[i].material,
                &bodies[j].material,
            );
            let (body_a, body_b) = pair_mut(bodies, first, second);
            resolve_contact(body_a, body_b, &contact, friction, restitution);
        }
    }
}

/// Dispatch on the shape pair. Returns the contact and whether the pair
/// order was swapped so the normal convention holds.
fn detect_pair(a: &RigidBody, b: &RigidBody) -> Option<(bool, Contact)> {
    match (a.shape, b.shape) {
        (Shape::Sphere { radius: ra }, Shape::Sphere { radius: rb }) => {
            detect_sphere_sphere(a.pos, ra, b.pos, rb).map(|c| (false, c))
        }
        (Shape::Sphere { radius }, Shape::Cuboid { half_extents }) => {
            detect_sphere_cuboid(a.pos, radius, b.pos, half_extents).map(|c| (false, c))
        }
        (Shape::Cuboid { half_extents }, Shape::Sphere { radius }) => {
            detect_sphere_cuboid(b.pos, radius, a.pos, half_extents).map(|c| (true, c))
        }
        (Shape::Cuboid { .. }, Shape::Cuboid { .. }) => None,
    }
}

/// Friction/restitution for a colliding pair: the registered pairwise
/// [`ContactMaterial`] when one exists, otherwise the average of the two
/// bodies' own materials.
fn pair_response(
    contact_materials: &[ContactMaterial],
    i: usize,
    j: usize,
    material_a: &Material,
    material_b: &Material,
) -> (f32, f32) {
    for cm in contact_materials {
        let forward = cm.body_a.0 == i && cm.body_b.0 == j;
        let reverse = cm.body_a.0 == j && cm.body_b.0 == i;
        if forward || reverse {
            return (cm.friction, cm.restitution);
        }
    }
    (
        0.5 * (material_a.friction + material_b.friction),
        0.5 * (material_a.restitution + material_b.restitution),
    )
}

fn pair_mut(bodies: &mut [RigidBody], i: usize, j: usize) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

/// Impulse-based contact response with Coulomb friction and positional
/// penetration correction. Kinematic bodies have zero inverse mass and
/// therefore receive neither impulses nor corrections.
fn resolve_contact(
    body_a: &mut RigidBody,
    body_b: &mut RigidBody,
    contact: &Contact,
    friction: f32,
    restitution: f32,
) {
    let inv_mass_sum = body_a.inv_mass + body_b.inv_mass;
    if inv_mass_sum == 0.0 {
        return;
    }

    let r_a = contact.point - body_a.pos;
    let r_b = contact.point - body_b.pos;
    let vel_a = body_a.vel + body_a.angular_vel.cross(r_a);
    let vel_b = body_b.vel + body_b.angular_vel.cross(r_b);
    let relative_velocity = vel_a - vel_b;
    let velocity_along_normal = relative_velocity.dot(contact.normal);

    // Already separating.
    if velocity_along_normal > 0.0 {
        return;
    }

    // No bounce at resting-contact speeds.
    let e = if velocity_along_normal.abs() > RESTITUTION_SLOP {
        restitution
    } else {
        0.0
    };

    let j = -(1.0 + e) * velocity_along_normal / inv_mass_sum;
    let impulse = contact.normal * j;
    body_a.vel += impulse * body_a.inv_mass;
    body_b.vel -= impulse * body_b.inv_mass;

    let correction_magnitude =
        (contact.depth - PENETRATION_SLOP).max(0.0) / inv_mass_sum * CORRECTION_PERCENT;
    let correction = contact.normal * correction_magnitude;
    body_a.pos += correction * body_a.inv_mass;
    body_b.pos -= correction * body_b.inv_mass;

    if friction <= 0.0 {
        return;
    }
    let tangent_velocity = relative_velocity - contact.normal * velocity_along_normal;
    let tangent_speed = tangent_velocity.length();
    if tangent_speed < 1e-4 {
        return;
    }
    let tangent_direction = tangent_velocity / tangent_speed;
    // Effective mass along the tangent includes the rotational terms,
    // so the clamp lands exactly on rolling instead of oscillating
    // around it.
    let rt_a = r_a.cross(tangent_direction);
    let rt_b = r_b.cross(tangent_direction);
    let tangent_mass = inv_mass_sum
        + rt_a.length_squared() * body_a.inv_inertia
        + rt_b.length_squared() * body_b.inv_inertia;
    let jt = (friction * j.abs()).min(tangent_speed / tangent_mass);
    let friction_impulse = tangent_direction * jt;

    body_a.vel -= friction_impulse * body_a.inv_mass;
    body_b.vel += friction_impulse * body_b.inv_mass;
    // Tangential impulse at the contact point also spins the bodies.
    body_a.angular_vel -= r_a.cross(friction_impulse) * body_a.inv_inertia;
    body_b.angular_vel += r_b.cross(friction_impulse) * body_b.inv_inertia;
}
