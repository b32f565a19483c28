//! End-to-end simulation: gravity impulse, integration and the transform
//! handoff to the drawable, over a full simulated second.

use keel_dynamics::{Body, Drawable, World};
use keel_geom::{Mat4, Quat, Real, Shape, Vec3};

/// Records every transform pushed across the render boundary.
#[derive(Default)]
struct RecordingDrawable {
    transforms: Vec<(Vec3, Quat)>,
    ticks: u32,
}

impl Drawable for RecordingDrawable {
    fn set_transform(&mut self, position: Vec3, rotation: Quat, scale: Vec3) {
        assert_eq!(scale, Vec3::one());
        self.transforms.push((position, rotation));
    }

    fn set_transform_matrix(&mut self, transform: &Mat4) {
        self.transforms
            .push((transform.translation_vec(), Quat::identity()));
    }

    fn update(&mut self, _dt: Real) {
        self.ticks += 1;
    }
}

#[test]
fn sphere_reaches_gravity_velocity_after_one_second() {
    let mut world = World::with_gravity(Vec3::new(0.0, -10.0, 0.0));
    let shape = world.add_shape(Shape::sphere(1.0));
    let ball = world.add_body(Body::new(Vec3::zero(), Quat::identity(), 1.0, shape));

    let mut drawable = RecordingDrawable::default();
    let dt = 1.0 / 60.0;
    for _ in 0..60 {
        world.step(dt);
        world.body_mut(ball).update(dt, &mut drawable);
    }

    let body = world.body(ball);
    // Sixty impulses of g*dt each: v = -10 exactly, up to float error.
    assert!((body.linear_velocity.y + 10.0).abs() < 1e-3);
    // Impulse-then-integrate discretization: |y| slightly over the
    // continuous g*t^2/2 = 5.
    assert!(body.position.y < -5.0);
    assert!(body.position.y > -5.2);

    // The drawable saw all 60 post-integration poses.
    assert_eq!(drawable.ticks, 60);
    assert_eq!(drawable.transforms.len(), 60);
    let (last_pos, _) = drawable.transforms[59];
    assert_eq!(last_pos, body.position);
    // Poses arrive monotonically falling.
    for pair in drawable.transforms.windows(2) {
        assert!(pair[1].0.y < pair[0].0.y);
    }
}

#[test]
fn immovable_floor_under_falling_ball() {
    let mut world = World::with_gravity(Vec3::new(0.0, -10.0, 0.0));
    let ball_shape = world.add_shape(Shape::sphere(0.5));
    let floor_shape = world.add_shape(Shape::box_from_points(&[
        Vec3::new(-10.0, -1.0, -10.0),
        Vec3::new(10.0, 0.0, 10.0),
    ]));

    let ball = world.add_body(Body::new(
        Vec3::new(0.0, 5.0, 0.0),
        Quat::identity(),
        1.0,
        ball_shape,
    ));
    let floor = world.add_body(Body::new(Vec3::zero(), Quat::identity(), 0.0, floor_shape));

    for _ in 0..30 {
        world.step(1.0 / 60.0);
    }

    assert!(world.body(ball).position.y < 5.0);
    assert_eq!(world.body(floor).position, Vec3::zero());
    assert_eq!(world.body(floor).linear_velocity, Vec3::zero());
}

#[test]
fn body_space_round_trip_through_world_queries() {
    let mut world = World::new();
    let shape_id = world.add_shape(Shape::box_from_points(&[
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 4.0, 6.0),
    ]));
    let id = world.add_body(Body::new(
        Vec3::new(-1.0, 2.0, 0.5),
        Quat::from_axis_angle(Vec3::new(0.0, 1.0, 1.0).normalize(), 1.2),
        1.0,
        shape_id,
    ));

    let body = world.body(id);
    let shape = world.shape(body.shape);
    for p in [
        Vec3::zero(),
        Vec3::new(1.0, -2.0, 3.0),
        Vec3::new(-5.0, 0.25, 8.0),
    ] {
        let round = body.body_to_world(shape, body.world_to_body(shape, p));
        assert!((round - p).norm() < 1e-4);
    }

    // World COM matches the direct computation.
    let com = world.center_of_mass_world(id);
    assert!((com - body.center_of_mass_world(shape)).norm() < 1e-6);
}

#[test]
fn world_bounds_track_the_moving_body() {
    let mut world = World::with_gravity(Vec3::new(0.0, -10.0, 0.0));
    let shape = world.add_shape(Shape::sphere(1.0));
    let id = world.add_body(Body::new(
        Vec3::new(0.0, 10.0, 0.0),
        Quat::identity(),
        1.0,
        shape,
    ));

    let before = world.body_bounds(id);
    for _ in 0..10 {
        world.step(1.0 / 60.0);
    }
    let after = world.body_bounds(id);
    assert!(after.maxs.y < before.maxs.y);
    // Radius is preserved.
    assert!((after.width_y() - 2.0).abs() < 1e-5);
}

#[test]
fn matrix_transform_path_matches_component_path() {
    let mut world = World::new();
    let shape = world.add_shape(Shape::sphere(1.0));
    let id = world.add_body(Body::new(
        Vec3::new(1.0, 2.0, 3.0),
        Quat::from_axis_angle(Vec3::y(), 0.4),
        1.0,
        shape,
    ));

    let body = world.body(id);
    let m = body.world_transform();
    assert!((m.translation_vec() - body.position).norm() < 1e-6);

    let mut drawable = RecordingDrawable::default();
    drawable.set_transform_matrix(&m);
    assert_eq!(drawable.transforms[0].0, body.position);
}
