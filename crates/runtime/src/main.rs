#![deny(clippy::all, clippy::pedantic)]

use anyhow::Result;
use physics::{Vec3, YoYoConfig, YoYoSim};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut config = YoYoConfig::free_space();
    // Nudge the ball off-center so every run starts a little different.
    let jitter = |range: f32| (fastrand::f32() - 0.5) * range;
    config.ball_start = Vec3::new(
        config.ball_start.x + jitter(config.jitter_range),
        config.ball_start.y,
        config.ball_start.z + jitter(config.jitter_range),
    );

    tracing::info!("Initializing yo-yo simulation...");
    let mut sim = YoYoSim::new(&config)?;
    let frame_dt = sim.timestep();
    let num_frames = 600;

    tracing::info!(
        "Starting simulation loop for {} frames with dt = {}...",
        num_frames,
        frame_dt
    );
    for i in 0..num_frames {
        let frame = sim.tick(frame_dt);
        if (i + 1) % 60 == 0 {
            tracing::info!(
                "Frame {} (t = {:.2}s): handle = {:?}, ball = {:?}",
                i + 1,
                sim.elapsed(),
                frame.handle.position,
                frame.ball.position
            );
        }
    }

    let frame = sim.frame_state();
    tracing::info!("Simulation loop finished after {} frames.", num_frames);
    tracing::info!(
        "Final poses: handle = {:?}, ball = {:?}, tether = {:?}",
        frame.handle.position,
        frame.ball.position,
        frame.tether
    );

    Ok(())
}
