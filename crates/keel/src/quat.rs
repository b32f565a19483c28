use crate::{Mat3, Scalar, Vec3};

/// Quaternion: w + xi + yj + zk
///
/// Stored as scalar part `w` and vector part `v = (x, y, z)`.
/// Represents a rotation when unit-length. Identity is (w=1, v=0).
///
/// Repeated composition accumulates drift, so every operation documented
/// as producing a unit quaternion (`lerp`, `slerp`) renormalizes before
/// returning.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<S> {
    pub w: S,
    pub v: Vec3<S>,
}

impl<S: Scalar> Quat<S> {
    #[inline]
    pub fn new(w: S, x: S, y: S, z: S) -> Self {
        Self {
            w,
            v: Vec3::new(x, y, z),
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            w: S::ONE,
            v: Vec3::zero(),
        }
    }

    /// Quaternion from axis-angle representation.
    /// The axis is assumed to be normalized, the angle is in radians.
    pub fn from_axis_angle(axis: Vec3<S>, angle: S) -> Self {
        let half = angle * S::HALF;
        let (s, c) = half.sin_cos();
        Self { w: c, v: axis * s }
    }

    #[inline]
    pub fn dot(&self, other: &Quat<S>) -> S {
        self.w * other.w + self.v.dot(other.v)
    }

    #[inline]
    pub fn norm_sq(&self) -> S {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> S {
        self.norm_sq().sqrt()
    }

    pub fn normalize(&self) -> Self {
        let n = self.norm();
        Self {
            w: self.w / n,
            v: self.v / n,
        }
    }

    /// Quaternion multiplication (Hamilton product)
    pub fn mul(&self, other: &Quat<S>) -> Quat<S> {
        Quat {
            w: self.w * other.w - self.v.dot(other.v),
            v: other.v * self.w + self.v * other.w + self.v.cross(other.v),
        }
    }

    /// Composition in application order: rotate by `self`, then by `then`.
    ///
    /// Vector part is `then.w * self.v + self.w * then.v + then.v x self.v`,
    /// scalar part `then.w * self.w - then.v . self.v` — the Hamilton
    /// product with the operands flipped, so chained concatenations read
    /// left to right.
    #[inline]
    pub fn concat(&self, then: &Quat<S>) -> Quat<S> {
        then.mul(self)
    }

    /// Conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            w: self.w,
            v: -self.v,
        }
    }

    /// Multiplicative inverse: conjugate / norm². Equals the conjugate for
    /// unit quaternions.
    pub fn inverse(&self) -> Self {
        let inv_n2 = self.norm_sq().recip();
        Self {
            w: self.w * inv_n2,
            v: -self.v * inv_n2,
        }
    }

    /// Rotate a vector by this quaternion: q * v * q^-1
    pub fn rotate(&self, v: Vec3<S>) -> Vec3<S> {
        let qv = Quat { w: S::ZERO, v };
        let result = self.mul(&qv).mul(&self.conjugate());
        result.v
    }

    /// Convert to 3x3 rotation matrix
    pub fn to_matrix(&self) -> Mat3<S> {
        let two = S::TWO;
        let x = self.v.x;
        let y = self.v.y;
        let z = self.v.z;
        let w = self.w;

        Mat3::new(
            S::ONE - two * (y * y + z * z),
            two * (x * y - w * z),
            two * (x * z + w * y),
            two * (x * y + w * z),
            S::ONE - two * (x * x + z * z),
            two * (y * z - w * x),
            two * (x * z - w * y),
            two * (y * z + w * x),
            S::ONE - two * (x * x + y * y),
        )
    }

    /// Normalized linear interpolation: component blend plus renormalize.
    pub fn lerp(&self, other: &Quat<S>, t: S) -> Quat<S> {
        Quat {
            w: self.w + (other.w - self.w) * t,
            v: self.v + (other.v - self.v) * t,
        }
        .normalize()
    }

    /// Spherical linear interpolation along the shortest arc.
    pub fn slerp(&self, other: &Quat<S>, t: S) -> Quat<S> {
        let mut cosine = self.dot(other);
        let mut other = *other;

        // A negative dot means the long way around the 4D hypersphere:
        // flip the far endpoint so we take the shortest path.
        if cosine < S::ZERO {
            other = Quat {
                w: -other.w,
                v: -other.v,
            };
            cosine = -cosine;
        }

        // Near-parallel inputs would divide by sin(omega) ~ 0; fall back
        // to a linear blend.
        if cosine > S::from_f64(0.9999) {
            return self.lerp(&other, t);
        }

        let omega = cosine.acos();
        let inv_sin = omega.sin().recip();
        let scale0 = ((S::ONE - t) * omega).sin() * inv_sin;
        let scale1 = (t * omega).sin() * inv_sin;

        Quat {
            w: self.w * scale0 + other.w * scale1,
            v: self.v * scale0 + other.v * scale1,
        }
        .normalize()
    }
}

impl<S: Scalar> Default for Quat<S> {
    fn default() -> Self {
        Self::identity()
    }
}
