use keel_dynamics::{Body, Drawable, World};
use keel_geom::{Mat4, Quat, Real, Shape, Vec3};

/// Stand-in for the render-side object; a real scene hands the transform
/// to a mesh + uniform buffer instead of printing it.
struct ConsoleDrawable {
    position: Vec3,
}

impl Drawable for ConsoleDrawable {
    fn set_transform(&mut self, position: Vec3, _rotation: Quat, _scale: Vec3) {
        self.position = position;
    }

    fn set_transform_matrix(&mut self, transform: &Mat4) {
        self.position = transform.translation_vec();
    }

    fn update(&mut self, _dt: Real) {}
}

fn main() {
    let mut world = World::with_gravity(Vec3::new(0.0, -10.0, 0.0));
    let shape = world.add_shape(Shape::sphere(1.0));
    let ball = world.add_body(Body::new(Vec3::zero(), Quat::identity(), 1.0, shape));

    let mut drawable = ConsoleDrawable {
        position: Vec3::zero(),
    };

    let dt = 1.0 / 60.0;
    for tick in 0..60 {
        world.step(dt);
        world.body_mut(ball).update(dt, &mut drawable);

        if tick % 10 == 9 {
            let body = world.body(ball);
            println!(
                "t={:.2}s  y={:+.3}  vy={:+.3}",
                (tick + 1) as Real * dt,
                drawable.position.y,
                body.linear_velocity.y
            );
        }
    }
}
