use std::fmt;

use crate::types::BodyId;

/// Rejected configuration, reported at construction time.
///
/// The simulation itself has no recoverable error states: once a world
/// and its bodies pass construction, every stepped quantity is
/// well-defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A body was created with a negative mass.
    NegativeMass(f32),
    /// A shape dimension (radius, half extent) was not strictly positive.
    InvalidShape(&'static str),
    /// A damping coefficient was outside `[0, 1]`.
    InvalidDamping(f32),
    /// A friction or restitution coefficient was negative.
    InvalidMaterial(&'static str),
    /// A body id does not refer to a body in this world.
    UnknownBody(BodyId),
    /// A coupling rest length was zero or negative.
    InvalidRestLength(f32),
    /// A coupling stiffness was zero or negative.
    InvalidStiffness(f32),
    /// A spring damping coefficient was negative.
    InvalidCouplingDamping(f32),
    /// A trajectory parameter was out of range.
    InvalidTrajectory(&'static str),
    /// The ball must be dynamic: its mass has to be strictly positive.
    InvalidBallMass(f32),
    /// The jitter range was negative.
    InvalidJitter(f32),
    /// The substep cap was zero.
    InvalidSubsteps(usize),
    /// A tracking clamp was degenerate (non-positive radius, empty span).
    InvalidClamp(&'static str),
    /// The fixed timestep was zero or negative, or no substeps were allowed.
    InvalidTimestep(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeMass(mass) => write!(f, "body mass must be non-negative, got {mass}"),
            Self::InvalidShape(what) => write!(f, "invalid shape: {what}"),
            Self::InvalidDamping(value) => {
                write!(f, "damping must be within [0, 1], got {value}")
            }
            Self::InvalidMaterial(what) => write!(f, "invalid material: {what}"),
            Self::UnknownBody(id) => write!(f, "no body with id {}", id.0),
            Self::InvalidRestLength(len) => {
                write!(f, "coupling rest length must be positive, got {len}")
            }
            Self::InvalidStiffness(k) => {
                write!(f, "coupling stiffness must be positive, got {k}")
            }
            Self::InvalidCouplingDamping(c) => {
                write!(f, "coupling damping must be non-negative, got {c}")
            }
            Self::InvalidTrajectory(what) => write!(f, "invalid trajectory: {what}"),
            Self::InvalidBallMass(mass) => {
                write!(f, "ball mass must be positive, got {mass}")
            }
            Self::InvalidJitter(range) => {
                write!(f, "jitter range must be non-negative, got {range}")
            }
            Self::InvalidSubsteps(cap) => {
                write!(f, "substep cap must be at least 1, got {cap}")
            }
            Self::InvalidClamp(what) => write!(f, "invalid tracking clamp: {what}"),
            Self::InvalidTimestep(dt) => {
                write!(f, "fixed timestep must be positive, got {dt}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
