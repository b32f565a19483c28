use crate::{Bounds, BoxShape, Mat3, Quat, Real, Sphere, Vec3};

/// Convex collision/mass shape.
///
/// A closed set of variants dispatched by `match` — the variant set is
/// small and hot in the per-body loop, so no trait objects.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Sphere(Sphere),
    Box(BoxShape),
}

impl Shape {
    /// Solid sphere of the given radius.
    pub fn sphere(radius: Real) -> Self {
        Self::Sphere(Sphere::new(radius))
    }

    /// Box over the AABB of a point cloud.
    pub fn box_from_points(points: &[Vec3]) -> Self {
        Self::Box(BoxShape::from_points(points))
    }

    /// Center of mass in body-local space.
    pub fn center_of_mass(&self) -> Vec3 {
        match self {
            Shape::Sphere(s) => s.center_of_mass(),
            Shape::Box(b) => b.center_of_mass(),
        }
    }

    /// Inertia tensor per unit mass, about the body origin.
    pub fn inertia_tensor(&self) -> Mat3 {
        match self {
            Shape::Sphere(s) => s.inertia_tensor(),
            Shape::Box(b) => b.inertia_tensor(),
        }
    }

    /// Local-space bounds.
    pub fn bounds_local(&self) -> Bounds {
        match self {
            Shape::Sphere(s) => s.bounds_local(),
            Shape::Box(b) => b.bounds_local(),
        }
    }

    /// World-space bounds under the given rigid transform.
    pub fn bounds(&self, pos: Vec3, orient: Quat) -> Bounds {
        match self {
            Shape::Sphere(s) => s.bounds(pos),
            Shape::Box(b) => b.bounds(pos, orient),
        }
    }

    /// Furthest point along `dir` under the given rigid transform, padded
    /// by `bias`. `dir` must be non-zero.
    pub fn support(&self, dir: Vec3, pos: Vec3, orient: Quat, bias: Real) -> Vec3 {
        match self {
            Shape::Sphere(s) => s.support(dir, pos, bias),
            Shape::Box(b) => b.support(dir, pos, orient, bias),
        }
    }

    /// Fastest linear speed any surface point reaches under
    /// `angular_velocity`, projected onto `dir`. Zero for a sphere about
    /// its center.
    pub fn fastest_linear_speed(&self, angular_velocity: Vec3, dir: Vec3) -> Real {
        match self {
            Shape::Sphere(_) => 0.0,
            Shape::Box(b) => b.fastest_linear_speed(angular_velocity, dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_dispatch() {
        let shape = Shape::sphere(1.0);
        assert_eq!(shape.center_of_mass(), Vec3::zero());
        let tensor = shape.inertia_tensor();
        assert!((tensor.get(0, 0) - 0.4).abs() < 1e-6);
        assert_eq!(shape.fastest_linear_speed(Vec3::z(), Vec3::x()), 0.0);
    }

    #[test]
    fn box_dispatch() {
        let shape = Shape::box_from_points(&[Vec3::splat(-1.0), Vec3::splat(1.0)]);
        assert_eq!(shape.center_of_mass(), Vec3::zero());
        let b = shape.bounds(Vec3::new(5.0, 0.0, 0.0), Quat::identity());
        assert_eq!(b.mins, Vec3::new(4.0, -1.0, -1.0));
    }

    #[test]
    fn sphere_bounds_ignore_orientation() {
        let shape = Shape::sphere(2.0);
        let spun = Quat::from_axis_angle(Vec3::y(), 1.3);
        let a = shape.bounds(Vec3::zero(), spun);
        let b = shape.bounds(Vec3::zero(), Quat::identity());
        assert_eq!(a, b);
    }

    #[test]
    fn support_matches_variant() {
        let sphere = Shape::sphere(1.0);
        let s = sphere.support(Vec3::x(), Vec3::zero(), Quat::identity(), 0.0);
        assert!((s - Vec3::x()).norm() < 1e-6);

        let cube = Shape::box_from_points(&[Vec3::splat(-1.0), Vec3::splat(1.0)]);
        let s = cube.support(Vec3::new(1.0, 1.0, 1.0), Vec3::zero(), Quat::identity(), 0.0);
        assert!((s - Vec3::splat(1.0)).norm() < 1e-6);
    }
}
