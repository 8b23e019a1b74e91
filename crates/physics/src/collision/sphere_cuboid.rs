//! Sphere-cuboid contact detection.
//!
//! Cuboids are treated as axis-aligned. The one cuboid in the scenes
//! this engine serves is the kinematic handle, whose pose is overridden
//! every tick with an identity orientation.

use super::Contact;
use crate::types::Vec3;

/// Detect overlap between a sphere and an axis-aligned cuboid.
///
/// The returned normal points from the cuboid toward the sphere.
pub fn detect_sphere_cuboid(
    sphere_pos: Vec3,
    radius: f32,
    cuboid_pos: Vec3,
    half_extents: Vec3,
) -> Option<Contact> {
    let closest = closest_point_on_cuboid(sphere_pos, cuboid_pos, half_extents);
    let delta = sphere_pos - closest;
    let distance_squared = delta.length_squared();

    if distance_squared >= radius * radius {
        return None;
    }

    let distance = distance_squared.sqrt();
    let normal = if distance > 1e-4 {
        delta / distance
    } else {
        // Sphere center is inside the cuboid; push out through the
        // nearest face.
        nearest_face_normal(sphere_pos, cuboid_pos, half_extents)
    };

    Some(Contact {
        point: sphere_pos - normal * radius,
        normal,
        depth: radius - distance,
    })
}

fn closest_point_on_cuboid(point: Vec3, center: Vec3, half_extents: Vec3) -> Vec3 {
    let min = center - half_extents;
    let max = center + half_extents;
    Vec3::new(
        point.x.clamp(min.x, max.x),
        point.y.clamp(min.y, max.y),
        point.z.clamp(min.z, max.z),
    )
}

fn nearest_face_normal(point: Vec3, center: Vec3, half_extents: Vec3) -> Vec3 {
    let local = point - center;
    let face_distances = Vec3::new(
        half_extents.x - local.x.abs(),
        half_extents.y - local.y.abs(),
        half_extents.z - local.z.abs(),
    );

    if face_distances.x < face_distances.y && face_distances.x < face_distances.z {
        Vec3::new(local.x.signum(), 0.0, 0.0)
    } else if face_distances.y < face_distances.z {
        Vec3::new(0.0, local.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, local.z.signum())
    }
}
