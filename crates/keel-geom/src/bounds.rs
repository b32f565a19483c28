use crate::{Real, Vec3};

/// Axis-aligned bounding box.
///
/// The empty state uses infinity sentinels (`mins = +inf`, `maxs = -inf`)
/// so the first [`expand`](Self::expand) establishes correct bounds; a
/// zeroed default would silently clip real data. After any sequence of
/// expands, `mins <= maxs` component-wise and every expanded point lies
/// inside.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub mins: Vec3,
    pub maxs: Vec3,
}

impl Bounds {
    #[inline]
    pub fn new(mins: Vec3, maxs: Vec3) -> Self {
        Self { mins, maxs }
    }

    /// The empty bounds, ready to accumulate points.
    #[inline]
    pub fn empty() -> Self {
        Self {
            mins: Vec3::splat(Real::INFINITY),
            maxs: Vec3::splat(Real::NEG_INFINITY),
        }
    }

    /// Reset to the empty sentinel state.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    /// True while no point has been accumulated yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mins.x > self.maxs.x
    }

    /// Grow to contain `point`.
    #[inline]
    pub fn expand(&mut self, point: Vec3) {
        self.mins = self.mins.component_min(point);
        self.maxs = self.maxs.component_max(point);
    }

    /// Grow to contain every point in `points`.
    pub fn expand_points(&mut self, points: &[Vec3]) {
        for &p in points {
            self.expand(p);
        }
    }

    /// Grow to contain another bounds.
    #[inline]
    pub fn union(&mut self, other: &Bounds) {
        self.mins = self.mins.component_min(other.mins);
        self.maxs = self.maxs.component_max(other.maxs);
    }

    #[inline]
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(self.maxs.x < other.mins.x
            || self.mins.x > other.maxs.x
            || self.maxs.y < other.mins.y
            || self.mins.y > other.maxs.y
            || self.maxs.z < other.mins.z
            || self.mins.z > other.maxs.z)
    }

    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        self.mins.x <= point.x
            && point.x <= self.maxs.x
            && self.mins.y <= point.y
            && point.y <= self.maxs.y
            && self.mins.z <= point.z
            && point.z <= self.maxs.z
    }

    #[inline]
    pub fn width_x(&self) -> Real {
        self.maxs.x - self.mins.x
    }

    #[inline]
    pub fn width_y(&self) -> Real {
        self.maxs.y - self.mins.y
    }

    #[inline]
    pub fn width_z(&self) -> Real {
        self.maxs.z - self.mins.z
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.mins + self.maxs) * 0.5
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}
