#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::suboptimal_flops
)]
//! # Yo-yo Physics
//!
//! A minimal rigid-body engine and the simulation core it serves: a
//! kinematic handle driven along a sinusoidal trajectory, a ball
//! tethered to it through a compliant coupling, and the fixed-timestep
//! loop that keeps the two in sync for a renderer.
//!
//! ## Key Components
//!
//! -   **Rigid bodies:** spheres and cuboids with mass, damping and
//!     surface materials, owned by the [`World`] and defined in the
//!     [`types`] module. Mass 0 marks a body kinematic.
//! -   **Coupling:** a [`CouplingLink`] ties the handle and ball
//!     anchors together, either as an explicit spring-damper force or
//!     as a solver-side positional joint ([`CouplingMode`]).
//! -   **Trajectory:** the pure [`Trajectory`] function and the
//!     [`TrackingClamp`] policy produce the handle's target pose each
//!     tick.
//! -   **Scenario:** [`YoYoSim`] wires everything together and exposes
//!     the `tick` entry point a frame-loop driver calls; each tick
//!     publishes a [`FrameState`] snapshot for the renderer.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{YoYoConfig, YoYoSim};
//!
//! let mut sim = YoYoSim::new(&YoYoConfig::free_space()).unwrap();
//! let frame = sim.tick(1.0 / 60.0);
//! println!("ball at {:?}", frame.ball.position);
//! ```

pub mod builder;
pub mod collision;
pub mod coupling;
pub mod error;
pub mod integrator;
pub mod simulation;
pub mod sync;
pub mod trajectory;
pub mod transform;
pub mod types;
pub mod yoyo;

pub use coupling::{CouplingLink, CouplingMode};
pub use error::ConfigError;
pub use simulation::World;
pub use sync::{frame_state, BodyPose, FrameState};
pub use trajectory::{TrackingClamp, Trajectory, PLANAR_EPSILON};
pub use types::{
    BodyId, ContactMaterial, Damping, Material, RigidBody, Shape, Vec3, IDENTITY_ORIENTATION,
};
pub use yoyo::{YoYo, YoYoConfig, YoYoSim};
