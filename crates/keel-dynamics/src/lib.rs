//! keel-dynamics — rigid bodies and the simulation tick.
//!
//! A [`Body`] couples a world pose (position + orientation), linear
//! velocity and inverse mass with a [`ShapeId`] handle into the shape
//! arena owned by [`World`]. The driving loop is frame-stepped and
//! single-threaded: gravity impulse, integrate, then push transforms
//! to the render side through the [`Drawable`] boundary.
//!
//! ```
//! use keel_dynamics::{Body, World};
//! use keel_geom::{Quat, Shape, Vec3};
//!
//! let mut world = World::with_gravity(Vec3::new(0.0, -10.0, 0.0));
//! let shape = world.add_shape(Shape::sphere(1.0));
//! let ball = world.add_body(Body::new(Vec3::zero(), Quat::identity(), 1.0, shape));
//!
//! for _ in 0..60 {
//!     world.step(1.0 / 60.0);
//! }
//! assert!(world.body(ball).linear_velocity.y < -9.0);
//! ```

pub mod body;
pub mod drawable;
pub mod ids;
pub mod world;

pub use body::Body;
pub use drawable::Drawable;
pub use ids::{BodyId, ShapeId};
pub use world::{World, GRAVITY};
