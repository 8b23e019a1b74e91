//! Transform matrix utilities for physics objects
//!
//! Conversions from physics poses (position + quaternion) to the 4x4
//! transformation matrices a renderer consumes.

use crate::types::Vec3;
use glam::{Mat4, Quat, Vec3 as GlamVec3};

/// Convert position and quaternion to a 4x4 transformation matrix
#[must_use]
pub fn to_transform_matrix(position: Vec3, orientation: [f32; 4]) -> [[f32; 4]; 4] {
    let pos = GlamVec3::new(position.x, position.y, position.z);
    let quat = Quat::from_xyzw(orientation[0], orientation[1], orientation[2], orientation[3]);

    Mat4::from_rotation_translation(quat, pos).to_cols_array_2d()
}
