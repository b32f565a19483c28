use crate::{Drawable, ShapeId};
use keel_geom::{Bounds, Mat4, Quat, Real, Shape, Vec3};

/// A simulated rigid body.
///
/// Holds world position and orientation, linear velocity and the inverse
/// mass (`0` means infinite mass — an immovable body; mass itself is never
/// stored). The shape is referenced by handle: the body does not own it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    pub position: Vec3,
    pub orientation: Quat,
    pub linear_velocity: Vec3,
    pub inverse_mass: Real,
    pub shape: ShapeId,
}

impl Body {
    pub fn new(position: Vec3, orientation: Quat, inverse_mass: Real, shape: ShapeId) -> Self {
        Self {
            position,
            orientation,
            linear_velocity: Vec3::zero(),
            inverse_mass,
            shape,
        }
    }

    #[inline]
    pub fn has_finite_mass(&self) -> bool {
        self.inverse_mass > 0.0
    }

    /// Mass reconstructed from the stored inverse; infinite for an
    /// immovable body.
    #[inline]
    pub fn mass(&self) -> Real {
        if self.inverse_mass == 0.0 {
            Real::INFINITY
        } else {
            1.0 / self.inverse_mass
        }
    }

    /// The shape's center of mass carried into world space.
    pub fn center_of_mass_world(&self, shape: &Shape) -> Vec3 {
        self.position + self.orientation.rotate(shape.center_of_mass())
    }

    /// The shape's center of mass in body-local space.
    pub fn center_of_mass_local(&self, shape: &Shape) -> Vec3 {
        shape.center_of_mass()
    }

    /// Map a world-space point into body space: translate by the world
    /// center of mass, rotate by the inverse orientation. Exact inverse of
    /// [`body_to_world`](Self::body_to_world).
    pub fn world_to_body(&self, shape: &Shape, world_point: Vec3) -> Vec3 {
        let tmp = world_point - self.center_of_mass_world(shape);
        self.orientation.inverse().rotate(tmp)
    }

    /// Map a body-space point into world space.
    pub fn body_to_world(&self, shape: &Shape, body_point: Vec3) -> Vec3 {
        self.center_of_mass_world(shape) + self.orientation.rotate(body_point)
    }

    /// World-space bounds of the referenced shape at this body's pose.
    pub fn bounds(&self, shape: &Shape) -> Bounds {
        shape.bounds(self.position, self.orientation)
    }

    /// This body's world transform as a homogeneous matrix.
    pub fn world_transform(&self) -> Mat4 {
        Mat4::from_quat_translation(&self.orientation, self.position)
    }

    /// Apply a linear impulse. Immovable bodies (inverse mass 0) never
    /// gain velocity, so this is a no-op for them.
    pub fn apply_impulse_linear(&mut self, impulse: Vec3) {
        if self.inverse_mass == 0.0 {
            return;
        }
        self.linear_velocity += impulse * self.inverse_mass;
    }

    /// Advance the position by one explicit Euler step.
    pub fn integrate(&mut self, dt: Real) {
        self.position.add_scaled(self.linear_velocity, dt);
    }

    /// Push the current transform to the drawable and tick its local
    /// animation state. The driver integrates first, then calls this —
    /// the drawable always sees the post-step pose.
    pub fn update(&mut self, dt: Real, drawable: &mut dyn Drawable) {
        drawable.set_transform(self.position, self.orientation, Vec3::one());
        drawable.update(dt);
    }
}
