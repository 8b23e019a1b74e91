//! Sphere-sphere contact detection.

use super::Contact;
use crate::types::Vec3;

/// Detect overlap between two spheres.
///
/// The returned normal points from the second sphere toward the first.
pub fn detect_sphere_sphere(
    pos_a: Vec3,
    radius_a: f32,
    pos_b: Vec3,
    radius_b: f32,
) -> Option<Contact> {
    let delta = pos_a - pos_b;
    let distance_squared = delta.length_squared();
    let radius_sum = radius_a + radius_b;

    if distance_squared >= radius_sum * radius_sum {
        return None;
    }

    let distance = distance_squared.sqrt();
    let normal = if distance > 1e-4 {
        delta / distance
    } else {
        // Centers coincide; pick an arbitrary separation axis.
        Vec3::new(0.0, 1.0, 0.0)
    };

    Some(Contact {
        point: pos_b + normal * radius_b,
        normal,
        depth: radius_sum - distance,
    })
}
