use physics::{BodyId, Damping, Material, Shape, Vec3, World};

fn slab_world(restitution: f32, friction: f32) -> (World, BodyId) {
    let mut world = World::new(Vec3::new(0.0, -9.8, 0.0));
    let slab = world
        .create_body(
            0.0,
            Shape::Cuboid {
                half_extents: Vec3::new(5.0, 0.1, 5.0),
            },
            Material::default(),
            Damping::NONE,
        )
        .unwrap();
    let ball = world
        .create_body(
            1.0,
            Shape::Sphere { radius: 0.5 },
            Material::default(),
            Damping::NONE,
        )
        .unwrap();
    world
        .add_contact_material(slab, ball, friction, restitution)
        .unwrap();
    (world, ball)
}

#[test]
fn restitution_bouncy_vs_damped() {
    let (mut bouncy_world, bouncy_ball) = slab_world(0.9, 0.6);
    let (mut damped_world, damped_ball) = slab_world(0.1, 0.6);
    bouncy_world.set_position(bouncy_ball, Vec3::new(0.0, 2.0, 0.0));
    damped_world.set_position(damped_ball, Vec3::new(0.0, 2.0, 0.0));

    // Let both spheres hit the slab...
    for _ in 0..42 {
        bouncy_world.step(1.0 / 60.0);
        damped_world.step(1.0 / 60.0);
    }

    // ...then compare how high they rebound.
    let mut bouncy_apex = f32::MIN;
    let mut damped_apex = f32::MIN;
    for _ in 0..90 {
        bouncy_world.step(1.0 / 60.0);
        damped_world.step(1.0 / 60.0);
        bouncy_apex = bouncy_apex.max(bouncy_world.body(bouncy_ball).pos.y);
        damped_apex = damped_apex.max(damped_world.body(damped_ball).pos.y);
    }

    assert!(
        bouncy_apex > damped_apex + 0.3,
        "bouncy {bouncy_apex} vs damped {damped_apex}"
    );
}

#[test]
fn friction_slows_sliding_and_spins_the_sphere() {
    let (mut rough_world, rough_ball) = slab_world(0.0, 0.8);
    let (mut slick_world, slick_ball) = slab_world(0.0, 0.02);
    rough_world.set_position(rough_ball, Vec3::new(0.0, 0.6, 0.0));
    slick_world.set_position(slick_ball, Vec3::new(0.0, 0.6, 0.0));
    rough_world.set_velocity(rough_ball, Vec3::new(2.0, 0.0, 0.0));
    slick_world.set_velocity(slick_ball, Vec3::new(2.0, 0.0, 0.0));

    for _ in 0..60 {
        rough_world.step(1.0 / 60.0);
        slick_world.step(1.0 / 60.0);
    }

    let rough = rough_world.body(rough_ball);
    let slick = slick_world.body(slick_ball);

    // High friction converts the slide into rolling (v0 * 5/7 for a
    // solid sphere); low friction barely bites in a second.
    assert!(
        rough.vel.x < 1.55,
        "rough surface failed to slow the slide: {}",
        rough.vel.x
    );
    assert!(
        slick.vel.x > 1.7,
        "slick surface slowed the slide too much: {}",
        slick.vel.x
    );
    assert!(slick.pos.x > rough.pos.x);
    // Tangential friction at the contact point spins the sphere about
    // -z when it slides along +x, much faster on the rough surface.
    assert!(rough.angular_vel.z < -2.0);
    assert!(slick.angular_vel.z > -1.2 && slick.angular_vel.z < 0.0);
}

#[test]
fn unregistered_pair_falls_back_to_body_materials() {
    // Same drop as the bouncy case, but the response comes from the
    // bodies' own materials averaged together.
    let mut world = World::new(Vec3::new(0.0, -9.8, 0.0));
    let _slab = world
        .create_body(
            0.0,
            Shape::Cuboid {
                half_extents: Vec3::new(5.0, 0.1, 5.0),
            },
            Material::bouncy(),
            Damping::NONE,
        )
        .unwrap();
    let ball = world
        .create_body(
            1.0,
            Shape::Sphere { radius: 0.5 },
            Material::bouncy(),
            Damping::NONE,
        )
        .unwrap();
    world.set_position(ball, Vec3::new(0.0, 2.0, 0.0));

    for _ in 0..42 {
        world.step(1.0 / 60.0);
    }
    let mut apex = f32::MIN;
    for _ in 0..90 {
        world.step(1.0 / 60.0);
        apex = apex.max(world.body(ball).pos.y);
    }

    // Restitution 0.9 keeps most of the impact speed: a visible bounce.
    assert!(apex > 1.2, "expected a lively rebound, apex = {apex}");
}
