use crate::{Body, BodyId, ShapeId};
use keel_geom::{Bounds, Real, Shape, Vec3};

/// Standard gravity (m/s²).
pub const GRAVITY: Real = 9.81;

/// Owns the shape arena and the simulated bodies, and drives the per-tick
/// physics phases.
///
/// Shapes are inserted once at scene construction and stay immutable while
/// the simulation runs; bodies reference them by [`ShapeId`]. Drawables
/// stay outside — after [`step`](Self::step) the driver pushes transforms
/// through [`Body::update`] with whatever render objects it owns.
#[derive(Clone, Debug, Default)]
pub struct World {
    pub gravity: Vec3,
    shapes: Vec<Shape>,
    bodies: Vec<Body>,
}

impl World {
    /// Empty world pulling straight down at standard gravity.
    pub fn new() -> Self {
        Self::with_gravity(Vec3::new(0.0, -GRAVITY, 0.0))
    }

    pub fn with_gravity(gravity: Vec3) -> Self {
        Self {
            gravity,
            shapes: Vec::new(),
            bodies: Vec::new(),
        }
    }

    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        self.shapes.push(shape);
        ShapeId(self.shapes.len() as u32 - 1)
    }

    pub fn shape(&self, id: ShapeId) -> &Shape {
        &self.shapes[id.0 as usize]
    }

    pub fn add_body(&mut self, body: Body) -> BodyId {
        assert!(
            (body.shape.0 as usize) < self.shapes.len(),
            "body references shape {} outside the arena",
            body.shape
        );
        self.bodies.push(body);
        BodyId(self.bodies.len() as u32 - 1)
    }

    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id.0 as usize]
    }

    pub fn body_mut(&mut self, id: BodyId) -> &mut Body {
        &mut self.bodies[id.0 as usize]
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// World-space center of mass of a body (through its shape handle).
    pub fn center_of_mass_world(&self, id: BodyId) -> Vec3 {
        let body = self.body(id);
        body.center_of_mass_world(self.shape(body.shape))
    }

    /// World-space bounds of a body at its current pose.
    pub fn body_bounds(&self, id: BodyId) -> Bounds {
        let body = self.body(id);
        body.bounds(self.shape(body.shape))
    }

    /// One simulation tick: apply the gravity impulse to every finite-mass
    /// body, then integrate positions. Two passes, so every impulse lands
    /// before any body moves.
    pub fn step(&mut self, dt: Real) {
        for body in &mut self.bodies {
            if !body.has_finite_mass() {
                continue;
            }
            let impulse = self.gravity * body.mass() * dt;
            body.apply_impulse_linear(impulse);
        }

        for body in &mut self.bodies {
            body.integrate(dt);
        }
    }
}
