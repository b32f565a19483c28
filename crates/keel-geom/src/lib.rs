//! keel-geom — convex shape primitives and their mass properties.
//!
//! Each shape knows its center of mass, inertia tensor, local and
//! world-space bounds, and a support mapping (furthest point along a
//! direction — the primitive the GJK family of convex-collision algorithms
//! is built on, exposed here for the later pipeline stages).
//!
//! Everything is concrete over [`Real`] (f32), the simulation precision;
//! the generic kernel lives in [`keel`].

pub mod bounds;
pub mod box_shape;
pub mod shape;
pub mod sphere;

/// Simulation scalar.
pub type Real = f32;
/// 3D vector over [`Real`].
pub type Vec3 = keel::Vec3<Real>;
/// Orientation quaternion over [`Real`].
pub type Quat = keel::Quat<Real>;
/// 3x3 matrix over [`Real`].
pub type Mat3 = keel::Mat3<Real>;
/// 4x4 matrix over [`Real`].
pub type Mat4 = keel::Mat4<Real>;

pub use bounds::Bounds;
pub use box_shape::BoxShape;
pub use shape::Shape;
pub use sphere::Sphere;
