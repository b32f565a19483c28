use crate::{Bounds, Mat3, Real, Vec3};

/// Solid sphere centered on the body origin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    pub radius: Real,
}

impl Sphere {
    /// # Panics
    /// Panics if `radius` is not positive and finite — that is a wiring
    /// error in scene construction, not a runtime condition.
    pub fn new(radius: Real) -> Self {
        assert!(
            radius > 0.0 && radius.is_finite(),
            "sphere radius must be positive and finite"
        );
        Self { radius }
    }

    /// Center of mass in body-local space (the sphere is centered).
    #[inline]
    pub fn center_of_mass(&self) -> Vec3 {
        Vec3::zero()
    }

    /// Inertia tensor of a solid sphere about its center, per unit mass:
    /// diag(2/5 r²).
    pub fn inertia_tensor(&self) -> Mat3 {
        let i = 2.0 * self.radius * self.radius / 5.0;
        Mat3::diagonal(Vec3::splat(i))
    }

    /// Local-space bounds.
    pub fn bounds_local(&self) -> Bounds {
        Bounds::new(Vec3::splat(-self.radius), Vec3::splat(self.radius))
    }

    /// World-space bounds at `pos` (orientation is irrelevant for a sphere).
    pub fn bounds(&self, pos: Vec3) -> Bounds {
        Bounds::new(
            Vec3::splat(-self.radius) + pos,
            Vec3::splat(self.radius) + pos,
        )
    }

    /// Furthest point along `dir`, padded by `bias`.
    ///
    /// `dir` must be non-zero; a zero direction has no meaningful support
    /// point and yields the center.
    pub fn support(&self, dir: Vec3, pos: Vec3, bias: Real) -> Vec3 {
        pos + dir.normalize() * (self.radius + bias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_sphere_inertia() {
        let tensor = Sphere::new(1.0).inertia_tensor();
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 2.0 / 5.0 } else { 0.0 };
                assert!((tensor.get(r, c) - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn inertia_scales_with_radius_squared() {
        let t1 = Sphere::new(1.0).inertia_tensor();
        let t2 = Sphere::new(2.0).inertia_tensor();
        assert!((t2.get(0, 0) - 4.0 * t1.get(0, 0)).abs() < 1e-6);
    }

    #[test]
    fn bounds_follow_position() {
        let s = Sphere::new(0.5);
        let b = s.bounds(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(b.mins, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(b.maxs, Vec3::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn support_is_radius_plus_bias_along_dir() {
        let s = Sphere::new(2.0);
        let p = s.support(Vec3::new(0.0, 10.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 0.1);
        assert!((p - Vec3::new(1.0, 2.1, 0.0)).norm() < 1e-6);
    }

    #[test]
    #[should_panic]
    fn zero_radius_rejected() {
        let _ = Sphere::new(0.0);
    }
}
