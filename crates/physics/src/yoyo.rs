//! # Yo-yo Scenario
//!
//! The high-level entity wiring a kinematic handle, a tethered ball and
//! their coupling into a [`World`], plus the fixed-timestep simulation
//! context a frame-loop driver ticks.
//!
//! Two configurations of the same design:
//!
//! - **free space**: spring coupling, radial clamp on the handle's
//!   planar tracking of the ball;
//! - **planar**: joint coupling, the handle tracks the ball along x
//!   only, clamped inside the play-field span.

use crate::coupling::{CouplingLink, CouplingMode};
use crate::error::ConfigError;
use crate::sync::{frame_state, FrameState};
use crate::trajectory::{TrackingClamp, Trajectory};
use crate::types::{BodyId, Damping, Material, Shape, Vec3};
use crate::World;

/// Configuration for a yo-yo scenario. All values are supplied once at
/// construction; nothing is reconfigured mid-run.
#[derive(Clone, Debug)]
pub struct YoYoConfig {
    pub gravity: Vec3,
    /// Fixed physics timestep in seconds.
    pub timestep: f32,
    /// Upper bound on physics steps per tick, shedding backlog after a
    /// frame stall.
    pub max_substeps: usize,
    /// Resting height of the handle's oscillation.
    pub base_height: f32,
    /// Amplitude of the handle's vertical oscillation.
    pub amplitude: f32,
    /// Frequency of the handle's vertical oscillation in Hz.
    pub frequency: f32,
    /// Clamp applied to the handle's planar tracking of the ball.
    pub tracking: TrackingClamp,
    pub handle_half_extents: Vec3,
    pub handle_material: Material,
    pub ball_radius: f32,
    pub ball_mass: f32,
    pub ball_material: Material,
    pub ball_damping: Damping,
    /// Initial ball position, jitter already applied by the driver.
    pub ball_start: Vec3,
    /// Width of the uniform planar jitter a driver may apply to
    /// `ball_start`. The core never samples it.
    pub jitter_range: f32,
    pub coupling: CouplingMode,
    pub rest_length: f32,
    /// Coupling anchor in the handle's local frame.
    pub handle_anchor: Vec3,
    /// Coupling anchor in the ball's local frame.
    pub ball_anchor: Vec3,
    /// Pairwise friction when handle and ball collide.
    pub contact_friction: f32,
    /// Pairwise restitution when handle and ball collide.
    pub contact_restitution: f32,
}

impl YoYoConfig {
    /// Free-space variant: spring coupling, radial tracking clamp.
    #[must_use]
    pub fn free_space() -> Self {
        let ball_radius = 0.1;
        Self {
            gravity: Vec3::new(0.0, -9.8, 0.0),
            timestep: 1.0 / 60.0,
            max_substeps: 10,
            base_height: 2.0,
            amplitude: 0.25,
            frequency: 1.75,
            tracking: TrackingClamp::Radial { max_distance: 1.0 },
            handle_half_extents: Vec3::new(0.25, 0.1, 0.25),
            handle_material: Material::new(0.3, 0.8),
            ball_radius,
            ball_mass: 0.1,
            ball_material: Material::new(0.3, 0.7),
            ball_damping: Damping::new(0.15, 0.25),
            ball_start: Vec3::new(0.0, 1.0, 0.0),
            jitter_range: 0.1,
            coupling: CouplingMode::Spring {
                stiffness: 25.0,
                damping: 0.8,
            },
            rest_length: 0.5,
            handle_anchor: Vec3::ZERO,
            ball_anchor: Vec3::new(0.0, -ball_radius, 0.0),
            contact_friction: 0.6,
            contact_restitution: 0.7,
        }
    }

    /// Planar variant: joint coupling, the handle tracks the ball along
    /// x only, clamped so it stays inside a play-field of the given
    /// width. Lengths are in pixels.
    #[must_use]
    pub fn planar(world_width: f32) -> Self {
        let handle_half_extents = Vec3::new(50.0, 12.5, 10.0);
        let ball_radius = 30.0;
        Self {
            gravity: Vec3::new(0.0, -980.0, 0.0),
            timestep: 1.0 / 60.0,
            max_substeps: 10,
            base_height: 100.0,
            amplitude: 50.0,
            frequency: 1.0,
            tracking: TrackingClamp::Span {
                min: handle_half_extents.x,
                max: world_width - handle_half_extents.x,
            },
            handle_half_extents,
            handle_material: Material::default(),
            ball_radius,
            ball_mass: 2.8,
            ball_material: Material::default(),
            ball_damping: Damping::default(),
            ball_start: Vec3::new(200.0, 0.0, 0.0),
            jitter_range: 0.0,
            coupling: CouplingMode::Joint { stiffness: 0.002 },
            rest_length: 120.0,
            handle_anchor: Vec3::new(0.0, -5.0, 0.0),
            ball_anchor: Vec3::new(0.0, ball_radius, 0.0),
            contact_friction: 0.3,
            contact_restitution: 0.3,
        }
    }
}

impl Default for YoYoConfig {
    fn default() -> Self {
        Self::free_space()
    }
}

/// The yo-yo entity: handle, ball and coupling registered with a world.
#[derive(Debug)]
pub struct YoYo {
    /// Id of the kinematic handle body.
    pub handle: BodyId,
    /// Id of the dynamic ball body.
    pub ball: BodyId,
    /// Index of the coupling link in the world.
    pub coupling: usize,
    trajectory: Trajectory,
    tracking: TrackingClamp,
}

impl YoYo {
    /// Build the scenario inside `world`.
    ///
    /// # Errors
    ///
    /// Rejects malformed configuration: non-positive ball mass, rest
    /// length or stiffness, negative jitter, degenerate clamp or
    /// trajectory parameters.
    pub fn new(world: &mut World, config: &YoYoConfig) -> Result<Self, ConfigError> {
        if config.ball_mass <= 0.0 {
            return Err(ConfigError::InvalidBallMass(config.ball_mass));
        }
        if config.jitter_range < 0.0 {
            return Err(ConfigError::InvalidJitter(config.jitter_range));
        }
        let trajectory = Trajectory::new(config.base_height, config.amplitude, config.frequency)?;
        config.tracking.validate()?;

        // Mass 0: the handle ignores gravity and coupling forces and is
        // positioned only by the trajectory override.
        let handle = world.create_body(
            0.0,
            Shape::Cuboid {
                half_extents: config.handle_half_extents,
            },
            config.handle_material,
            Damping::NONE,
        )?;
        let (start_x, start_z) = config
            .tracking
            .apply(config.ball_start.x, config.ball_start.z);
        world.set_position(handle, Vec3::new(start_x, config.base_height, start_z));

        let ball = world.create_body(
            config.ball_mass,
            Shape::Sphere {
                radius: config.ball_radius,
            },
            config.ball_material,
            config.ball_damping,
        )?;
        world.set_position(ball, config.ball_start);

        world.add_contact_material(
            handle,
            ball,
            config.contact_friction,
            config.contact_restitution,
        )?;

        let coupling = world.add_coupling(CouplingLink {
            body_a: handle,
            body_b: ball,
            local_anchor_a: config.handle_anchor,
            local_anchor_b: config.ball_anchor,
            rest_length: config.rest_length,
            mode: config.coupling,
        })?;

        Ok(Self {
            handle,
            ball,
            coupling,
            trajectory,
            tracking: config.tracking,
        })
    }

    /// Override the handle pose for the step about to run.
    ///
    /// Vertical position comes from the trajectory at `elapsed`; the
    /// planar coordinates track the ball's pre-step position through
    /// the clamp. Tracking the post-step pose instead would feed the
    /// just-applied coupling force back within the same tick.
    pub fn update_handle(&self, world: &mut World, elapsed: f32) {
        let ball_pos = world.body(self.ball).pos;
        let (x, z) = self.tracking.apply(ball_pos.x, ball_pos.z);
        let y = self.trajectory.height_at(elapsed);
        world.set_position(self.handle, Vec3::new(x, y, z));
    }

    /// Publish the current poses and tether endpoints.
    #[must_use]
    pub fn frame_state(&self, world: &World) -> FrameState {
        frame_state(world, self.handle, self.ball, &world.couplings[self.coupling])
    }
}

/// A complete simulation instance: world, yo-yo entity and the fixed
/// timestep bookkeeping. Owned by the caller; multiple independent
/// instances can coexist.
#[derive(Debug)]
pub struct YoYoSim {
    pub world: World,
    pub yoyo: YoYo,
    timestep: f32,
    max_substeps: usize,
    clock: f32,
    accumulator: f32,
}

impl YoYoSim {
    /// Construct a simulation from a validated configuration.
    ///
    /// # Errors
    ///
    /// Propagates every construction-time configuration error.
    pub fn new(config: &YoYoConfig) -> Result<Self, ConfigError> {
        if config.timestep <= 0.0 {
            return Err(ConfigError::InvalidTimestep(config.timestep));
        }
        if config.max_substeps == 0 {
            return Err(ConfigError::InvalidSubsteps(config.max_substeps));
        }
        let mut world = World::new(config.gravity);
        let yoyo = YoYo::new(&mut world, config)?;
        Ok(Self {
            world,
            yoyo,
            timestep: config.timestep,
            max_substeps: config.max_substeps,
            clock: 0.0,
            accumulator: 0.0,
        })
    }

    /// Advance the simulation by one frame of `frame_dt` seconds.
    ///
    /// Physics always advances in whole fixed timesteps; the remainder
    /// stays in the accumulator for the next tick. Within each step the
    /// handle override strictly precedes the physics advance, which
    /// precedes spring application and the final publish.
    pub fn tick(&mut self, frame_dt: f32) -> FrameState {
        self.accumulator += frame_dt.max(0.0);
        let mut substeps = 0;
        while self.accumulator >= self.timestep && substeps < self.max_substeps {
            self.yoyo.update_handle(&mut self.world, self.clock);
            self.world.step(self.timestep);
            self.clock += self.timestep;
            self.accumulator -= self.timestep;
            substeps += 1;
        }
        // Shed any backlog the substep cap refused, so a long stall
        // cannot snowball.
        if self.accumulator >= self.timestep {
            self.accumulator = 0.0;
        }
        self.frame_state()
    }

    /// Publish the current poses without stepping.
    #[must_use]
    pub fn frame_state(&self) -> FrameState {
        self.yoyo.frame_state(&self.world)
    }

    /// Simulated seconds advanced so far.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.clock
    }

    /// The fixed physics timestep.
    #[must_use]
    pub fn timestep(&self) -> f32 {
        self.timestep
    }
}
