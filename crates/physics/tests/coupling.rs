use physics::{
    CouplingLink, CouplingMode, Damping, Material, Shape, Vec3, World, YoYoConfig, YoYoSim,
};

#[test]
fn spring_force_is_zero_at_rest_length() {
    let mut world = World::new(Vec3::ZERO);
    let handle = world
        .create_body(
            0.0,
            Shape::Cuboid {
                half_extents: Vec3::new(0.25, 0.1, 0.25),
            },
            Material::default(),
            Damping::NONE,
        )
        .unwrap();
    let ball = world
        .create_body(
            1.0,
            Shape::Sphere { radius: 0.05 },
            Material::default(),
            Damping::NONE,
        )
        .unwrap();
    world.set_position(ball, Vec3::new(0.0, -0.5, 0.0));

    world
        .add_coupling(CouplingLink {
            body_a: handle,
            body_b: ball,
            local_anchor_a: Vec3::ZERO,
            local_anchor_b: Vec3::ZERO,
            rest_length: 0.5,
            mode: CouplingMode::Spring {
                stiffness: 25.0,
                damping: 0.8,
            },
        })
        .unwrap();

    for _ in 0..10 {
        world.step(1.0 / 60.0);
    }

    // Exactly at rest length with zero relative velocity: no force, no
    // drift.
    assert_eq!(world.body(ball).pos, Vec3::new(0.0, -0.5, 0.0));
    assert_eq!(world.body(ball).vel, Vec3::ZERO);
}

#[test]
fn spring_oscillation_stays_bounded() {
    // Ball released at rest directly below the handle at the rest
    // length: a thousand steps must not grow energy.
    let mut config = YoYoConfig::free_space();
    config.ball_start = Vec3::new(0.0, 1.6, 0.0);
    let mut sim = YoYoSim::new(&config).unwrap();
    let dt = sim.timestep();

    let mut max_speed = 0.0_f32;
    let mut max_offset = 0.0_f32;
    for _ in 0..1000 {
        let frame = sim.tick(dt);
        let ball = frame.ball.position;
        let speed = sim.world.body(sim.yoyo.ball).vel.length();
        max_speed = max_speed.max(speed);
        let offset = (Vec3::new(ball.x, ball.y - 1.6, ball.z)).length();
        max_offset = max_offset.max(offset);
        assert!(
            ball.y.is_finite() && ball.x.is_finite() && ball.z.is_finite(),
            "ball position diverged"
        );
    }

    assert!(max_offset < 2.0, "runaway displacement: {max_offset}");
    assert!(max_speed < 10.0, "runaway speed: {max_speed}");
}

#[test]
fn joint_pulls_toward_rest_length() {
    let mut config = YoYoConfig::planar(800.0);
    config.ball_start = Vec3::new(400.0, -300.0, 0.0);
    let mut sim = YoYoSim::new(&config).unwrap();
    let dt = sim.timestep();

    let initial = sim.frame_state();
    let initial_gap = (initial.tether[1] - initial.tether[0]).length();
    assert!(initial_gap > config.rest_length);

    let mut min_gap = initial_gap;
    let mut max_gap = initial_gap;
    for _ in 0..600 {
        let frame = sim.tick(dt);
        let gap = (frame.tether[1] - frame.tether[0]).length();
        min_gap = min_gap.min(gap);
        max_gap = max_gap.max(gap);
    }

    assert!(
        min_gap < initial_gap - 50.0,
        "joint never pulled the ball in: min gap {min_gap}"
    );
    assert!(max_gap < 1000.0, "joint let the ball run away: {max_gap}");
}

#[test]
fn spring_applies_equal_and_opposite_forces() {
    // Two dynamic bodies, no gravity: the spring must conserve
    // momentum.
    let mut world = World::new(Vec3::ZERO);
    let a = world
        .create_body(
            1.0,
            Shape::Sphere { radius: 0.05 },
            Material::default(),
            Damping::NONE,
        )
        .unwrap();
    let b = world
        .create_body(
            1.0,
            Shape::Sphere { radius: 0.05 },
            Material::default(),
            Damping::NONE,
        )
        .unwrap();
    world.set_position(a, Vec3::new(0.0, 1.0, 0.0));
    world.set_position(b, Vec3::new(0.0, -1.0, 0.0));

    world
        .add_coupling(CouplingLink {
            body_a: a,
            body_b: b,
            local_anchor_a: Vec3::ZERO,
            local_anchor_b: Vec3::ZERO,
            rest_length: 0.5,
            mode: CouplingMode::Spring {
                stiffness: 25.0,
                damping: 0.0,
            },
        })
        .unwrap();

    for _ in 0..50 {
        world.step(1.0 / 60.0);
    }

    let momentum = world.body(a).vel + world.body(b).vel;
    assert!(momentum.length() < 1e-4, "momentum drift: {momentum:?}");
}
