use crate::{Bounds, Mat3, Quat, Real, Vec3};

/// Convex box built from a point cloud.
///
/// Construction accumulates the axis-aligned bounds of the input points,
/// then re-derives an explicit 8-corner cache from that AABB (not from the
/// original, possibly non-box-shaped, cloud). The center of mass is the
/// AABB midpoint.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxShape {
    bounds: Bounds,
    corners: [Vec3; 8],
    center_of_mass: Vec3,
}

impl BoxShape {
    /// Build from a point cloud.
    ///
    /// # Panics
    /// Panics on an empty cloud — there is nothing to bound.
    pub fn from_points(points: &[Vec3]) -> Self {
        assert!(!points.is_empty(), "box shape needs at least one point");
        let mut bounds = Bounds::empty();
        bounds.expand_points(points);

        let corners = [
            Vec3::new(bounds.mins.x, bounds.mins.y, bounds.mins.z),
            Vec3::new(bounds.maxs.x, bounds.mins.y, bounds.mins.z),
            Vec3::new(bounds.mins.x, bounds.maxs.y, bounds.mins.z),
            Vec3::new(bounds.mins.x, bounds.mins.y, bounds.maxs.z),
            Vec3::new(bounds.maxs.x, bounds.maxs.y, bounds.maxs.z),
            Vec3::new(bounds.mins.x, bounds.maxs.y, bounds.maxs.z),
            Vec3::new(bounds.maxs.x, bounds.mins.y, bounds.maxs.z),
            Vec3::new(bounds.maxs.x, bounds.maxs.y, bounds.mins.z),
        ];

        Self {
            bounds,
            corners,
            center_of_mass: bounds.center(),
        }
    }

    /// Center of mass in body-local space (the AABB midpoint).
    #[inline]
    pub fn center_of_mass(&self) -> Vec3 {
        self.center_of_mass
    }

    /// The cached 8-corner representation.
    #[inline]
    pub fn corners(&self) -> &[Vec3; 8] {
        &self.corners
    }

    /// Inertia tensor per unit mass, about the body origin.
    ///
    /// The tensor of a box about its own centroid is
    /// diag((dy²+dz²)/12, (dx²+dz²)/12, (dx²+dy²)/12); the parallel-axis
    /// theorem then shifts it by the displacement `R = origin - com`:
    /// add R²·I - R⊗R, written out as
    /// [[R²-Rx², RxRy, RxRz], [RyRx, R²-Ry², RyRz], [RzRx, RzRy, R²-Rz²]].
    pub fn inertia_tensor(&self) -> Mat3 {
        let dx = self.bounds.width_x();
        let dy = self.bounds.width_y();
        let dz = self.bounds.width_z();

        let mut tensor = Mat3::diagonal(Vec3::new(
            (dy * dy + dz * dz) / 12.0,
            (dx * dx + dz * dz) / 12.0,
            (dx * dx + dy * dy) / 12.0,
        ));

        let r = Vec3::zero() - self.center_of_mass;
        let r2 = r.norm_sq();
        tensor += Mat3::new(
            r2 - r.x * r.x,
            r.x * r.y,
            r.x * r.z,
            r.y * r.x,
            r2 - r.y * r.y,
            r.y * r.z,
            r.z * r.x,
            r.z * r.y,
            r2 - r.z * r.z,
        );
        tensor
    }

    /// Local-space bounds.
    #[inline]
    pub fn bounds_local(&self) -> Bounds {
        self.bounds
    }

    /// World-space bounds: every corner rotated and translated, then
    /// accumulated.
    pub fn bounds(&self, pos: Vec3, orient: Quat) -> Bounds {
        let mut expanded = Bounds::empty();
        for &corner in &self.corners {
            expanded.expand(orient.rotate(corner) + pos);
        }
        expanded
    }

    /// Furthest transformed corner along `dir`, padded by `bias` along the
    /// normalized direction. `dir` must be non-zero.
    pub fn support(&self, dir: Vec3, pos: Vec3, orient: Quat, bias: Real) -> Vec3 {
        let mut max_pt = orient.rotate(self.corners[0]) + pos;
        let mut max_dist = dir.dot(max_pt);
        for &corner in &self.corners[1..] {
            let pt = orient.rotate(corner) + pos;
            let dist = dir.dot(pt);
            if dist > max_dist {
                max_dist = dist;
                max_pt = pt;
            }
        }
        max_pt + dir.normalize() * bias
    }

    /// Fastest linear speed any corner reaches under `angular_velocity`,
    /// projected onto `dir`. Used to size continuous-collision margins.
    pub fn fastest_linear_speed(&self, angular_velocity: Vec3, dir: Vec3) -> Real {
        let mut max_speed: Real = 0.0;
        for &corner in &self.corners {
            let r = corner - self.center_of_mass;
            let linear_velocity = angular_velocity.cross(r);
            let speed = dir.dot(linear_velocity);
            if speed > max_speed {
                max_speed = speed;
            }
        }
        max_speed
    }
}
