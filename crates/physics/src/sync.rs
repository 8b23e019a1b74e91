//! # Pose Synchronization
//!
//! Read-only snapshots of body poses for the rendering collaborator.
//! Published after each step; plain-old-data so a renderer can upload
//! them to GPU buffers unchanged.

use crate::coupling::CouplingLink;
use crate::transform::to_transform_matrix;
use crate::types::{BodyId, Vec3};
use crate::World;

/// Position and orientation of one body.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BodyPose {
    pub position: Vec3,
    pub orientation: [f32; 4],
}

impl BodyPose {
    /// 4x4 column-major transform matrix for this pose.
    #[must_use]
    pub fn transform(&self) -> [[f32; 4]; 4] {
        to_transform_matrix(self.position, self.orientation)
    }
}

/// Everything the renderer needs for one frame: both body poses plus
/// the world-space tether endpoints for line rendering.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameState {
    pub handle: BodyPose,
    pub ball: BodyPose,
    /// Tether endpoints: the coupling anchors on the handle and the
    /// ball, in that order.
    pub tether: [Vec3; 2],
}

/// Snapshot the current poses of the two coupled bodies.
///
/// Pure read of physics state; the world is untouched.
#[must_use]
pub fn frame_state(world: &World, handle: BodyId, ball: BodyId, link: &CouplingLink) -> FrameState {
    let handle_body = world.body(handle);
    let ball_body = world.body(ball);
    let (anchor_a, anchor_b) = link.world_anchors(&world.bodies);

    FrameState {
        handle: BodyPose {
            position: handle_body.pos,
            orientation: handle_body.orientation,
        },
        ball: BodyPose {
            position: ball_body.pos,
            orientation: ball_body.orientation,
        },
        tether: [anchor_a, anchor_b],
    }
}
