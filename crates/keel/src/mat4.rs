use crate::{Mat3, Point3, Quat, Scalar, Vec3, Vec4};
use core::ops::{Add, Mul, Neg, Sub};

/// 4x4 matrix, column-major storage.
///
/// Used for homogeneous transforms (rotation + translation + scale) and the
/// projection matrices handed to the renderer. Constructors take elements in
/// row-major argument order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4<S> {
    pub c0: Vec4<S>,
    pub c1: Vec4<S>,
    pub c2: Vec4<S>,
    pub c3: Vec4<S>,
}

impl<S: Scalar> Mat4<S> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: S, m01: S, m02: S, m03: S,
        m10: S, m11: S, m12: S, m13: S,
        m20: S, m21: S, m22: S, m23: S,
        m30: S, m31: S, m32: S, m33: S,
    ) -> Self {
        Self {
            c0: Vec4::new(m00, m10, m20, m30),
            c1: Vec4::new(m01, m11, m21, m31),
            c2: Vec4::new(m02, m12, m22, m32),
            c3: Vec4::new(m03, m13, m23, m33),
        }
    }

    #[inline]
    pub fn from_cols(c0: Vec4<S>, c1: Vec4<S>, c2: Vec4<S>, c3: Vec4<S>) -> Self {
        Self { c0, c1, c2, c3 }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_cols(Vec4::zero(), Vec4::zero(), Vec4::zero(), Vec4::zero())
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(
            S::ONE,  S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, S::ONE,  S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, S::ONE,  S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Build from rotation (3x3) and translation
    pub fn from_rotation_translation(rot: Mat3<S>, trans: Vec3<S>) -> Self {
        Self::new(
            rot.c0.x, rot.c1.x, rot.c2.x, trans.x,
            rot.c0.y, rot.c1.y, rot.c2.y, trans.y,
            rot.c0.z, rot.c1.z, rot.c2.z, trans.z,
            S::ZERO,  S::ZERO,  S::ZERO,  S::ONE,
        )
    }

    /// Rotation part of a unit quaternion, no translation.
    /// Agrees exactly with [`Quat::to_matrix`], so the matrix path and the
    /// quaternion path rotate points identically.
    pub fn from_quat(q: &Quat<S>) -> Self {
        Self::from_rotation_translation(q.to_matrix(), Vec3::zero())
    }

    /// Rigid transform from a unit quaternion and a translation.
    pub fn from_quat_translation(q: &Quat<S>, trans: Vec3<S>) -> Self {
        Self::from_rotation_translation(q.to_matrix(), trans)
    }

    /// Translation matrix
    pub fn translation(dx: S, dy: S, dz: S) -> Self {
        Self::new(
            S::ONE,  S::ZERO, S::ZERO, dx,
            S::ZERO, S::ONE,  S::ZERO, dy,
            S::ZERO, S::ZERO, S::ONE,  dz,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Non-uniform scale matrix
    pub fn scale(sx: S, sy: S, sz: S) -> Self {
        Self::new(
            sx,      S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, sy,      S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, sz,      S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Rotation about X axis
    pub fn rotation_x(angle: S) -> Self {
        Self::from_rotation_translation(Mat3::rotation_x(angle), Vec3::zero())
    }

    /// Rotation about Y axis
    pub fn rotation_y(angle: S) -> Self {
        Self::from_rotation_translation(Mat3::rotation_y(angle), Vec3::zero())
    }

    /// Rotation about Z axis
    pub fn rotation_z(angle: S) -> Self {
        Self::from_rotation_translation(Mat3::rotation_z(angle), Vec3::zero())
    }

    /// Rotation about arbitrary axis (Rodrigues' formula)
    pub fn rotation_axis(axis: Vec3<S>, angle: S) -> Self {
        Self::from_rotation_translation(Mat3::rotation_axis(axis, angle), Vec3::zero())
    }

    /// Right-handed view matrix looking from `eye` toward `target`.
    pub fn look_at(eye: Point3<S>, target: Point3<S>, up: Vec3<S>) -> Self {
        let f = (target - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);
        let e = eye.to_vec();
        Self::new(
            s.x,     s.y,     s.z,     -s.dot(e),
            u.x,     u.y,     u.z,     -u.dot(e),
            -f.x,    -f.y,    -f.z,    f.dot(e),
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Right-handed perspective projection mapping depth to [0, 1]
    /// (the wgpu/Metal convention). `fov_y` is the vertical field of view
    /// in radians.
    pub fn perspective(fov_y: S, aspect: S, near: S, far: S) -> Self {
        let f = (fov_y * S::HALF).tan().recip();
        let r = (near - far).recip();
        Self::new(
            f / aspect, S::ZERO, S::ZERO,       S::ZERO,
            S::ZERO,    f,       S::ZERO,       S::ZERO,
            S::ZERO,    S::ZERO, far * r,       near * far * r,
            S::ZERO,    S::ZERO, -S::ONE,       S::ZERO,
        )
    }

    /// Right-handed orthographic projection mapping depth to [0, 1].
    pub fn orthographic(left: S, right: S, bottom: S, top: S, near: S, far: S) -> Self {
        let rw = (right - left).recip();
        let rh = (top - bottom).recip();
        let rd = (near - far).recip();
        Self::new(
            S::TWO * rw, S::ZERO,     S::ZERO, -(right + left) * rw,
            S::ZERO,     S::TWO * rh, S::ZERO, -(top + bottom) * rh,
            S::ZERO,     S::ZERO,     rd,      near * rd,
            S::ZERO,     S::ZERO,     S::ZERO, S::ONE,
        )
    }

    /// Element access (row, col)
    pub fn get(&self, row: usize, col: usize) -> S {
        let c = match col {
            0 => &self.c0,
            1 => &self.c1,
            2 => &self.c2,
            _ => &self.c3,
        };
        match row {
            0 => c.x,
            1 => c.y,
            2 => c.z,
            _ => c.w,
        }
    }

    /// Element write (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: S) {
        let c = match col {
            0 => &mut self.c0,
            1 => &mut self.c1,
            2 => &mut self.c2,
            _ => &mut self.c3,
        };
        match row {
            0 => c.x = value,
            1 => c.y = value,
            2 => c.z = value,
            _ => c.w = value,
        }
    }

    /// Row access
    #[inline]
    pub fn row(&self, i: usize) -> Vec4<S> {
        Vec4::new(self.get(i, 0), self.get(i, 1), self.get(i, 2), self.get(i, 3))
    }

    /// Row write
    #[inline]
    pub fn set_row(&mut self, i: usize, row: Vec4<S>) {
        self.set(i, 0, row.x);
        self.set(i, 1, row.y);
        self.set(i, 2, row.z);
        self.set(i, 3, row.w);
    }

    /// Extract the upper-left 3x3 submatrix
    #[inline]
    pub fn upper_left_3x3(&self) -> Mat3<S> {
        Mat3::from_cols(self.c0.truncate(), self.c1.truncate(), self.c2.truncate())
    }

    /// Extract the translation column
    #[inline]
    pub fn translation_vec(&self) -> Vec3<S> {
        self.c3.truncate()
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(
            self.c0.x, self.c0.y, self.c0.z, self.c0.w,
            self.c1.x, self.c1.y, self.c1.z, self.c1.w,
            self.c2.x, self.c2.y, self.c2.z, self.c2.w,
            self.c3.x, self.c3.y, self.c3.z, self.c3.w,
        )
    }

    /// The 3x3 submatrix left after deleting row `row` and column `col`.
    pub fn minor(&self, row: usize, col: usize) -> Mat3<S> {
        let mut m = Mat3::zero();
        let mut rr = 0;
        for r in 0..4 {
            if r == row {
                continue;
            }
            let mut cc = 0;
            for c in 0..4 {
                if c == col {
                    continue;
                }
                m.set(rr, cc, self.get(r, c));
                cc += 1;
            }
            rr += 1;
        }
        m
    }

    /// Signed minor: (-1)^(row+col) * det(minor(row, col)), zero-based.
    #[inline]
    pub fn cofactor(&self, row: usize, col: usize) -> S {
        let minor_det = self.minor(row, col).determinant();
        if (row + col) % 2 == 0 {
            minor_det
        } else {
            -minor_det
        }
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> S {
        self.get(0, 0) * self.cofactor(0, 0)
            + self.get(0, 1) * self.cofactor(0, 1)
            + self.get(0, 2) * self.cofactor(0, 2)
            + self.get(0, 3) * self.cofactor(0, 3)
    }

    /// Inverse via the adjugate, same scheme as [`Mat3::try_inverse`]:
    /// cofactor(r, c) at the transposed position, scaled by 1/det.
    /// Returns None for a singular matrix.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < S::EPSILON {
            return None;
        }
        let inv_det = det.recip();
        let mut inv = Self::zero();
        for r in 0..4 {
            for c in 0..4 {
                inv.set(c, r, self.cofactor(r, c) * inv_det);
            }
        }
        Some(inv)
    }

    /// Matrix-Vec4 product
    #[inline]
    pub fn mul_vec4(&self, v: Vec4<S>) -> Vec4<S> {
        self.c0 * v.x + self.c1 * v.y + self.c2 * v.z + self.c3 * v.w
    }

    /// Transform a point (w=1, includes translation)
    #[inline]
    pub fn transform_point(&self, p: Point3<S>) -> Point3<S> {
        let v = self.mul_vec4(p.to_homogeneous());
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a vector (w=0, ignores translation)
    #[inline]
    pub fn transform_vec(&self, v: Vec3<S>) -> Vec3<S> {
        let r = self.mul_vec4(v.extend(S::ZERO));
        Vec3::new(r.x, r.y, r.z)
    }

    /// Transform a normal (uses inverse transpose of 3x3)
    pub fn transform_normal(&self, n: Vec3<S>) -> Vec3<S> {
        let m3 = self.upper_left_3x3();
        match m3.try_inverse() {
            Some(inv) => inv.transpose().mul_vec(n),
            None => n,
        }
    }

    /// Matrix-matrix product. Built into fresh columns, so the destination
    /// never aliases either operand.
    pub fn mul_mat(&self, rhs: &Mat4<S>) -> Mat4<S> {
        Mat4::from_cols(
            self.mul_vec4(rhs.c0),
            self.mul_vec4(rhs.c1),
            self.mul_vec4(rhs.c2),
            self.mul_vec4(rhs.c3),
        )
    }
}

impl<S: Scalar> Default for Mat4<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Add for Mat4<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_cols(
            self.c0 + rhs.c0,
            self.c1 + rhs.c1,
            self.c2 + rhs.c2,
            self.c3 + rhs.c3,
        )
    }
}

impl<S: Scalar> Sub for Mat4<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_cols(
            self.c0 - rhs.c0,
            self.c1 - rhs.c1,
            self.c2 - rhs.c2,
            self.c3 - rhs.c3,
        )
    }
}

impl<S: Scalar> Neg for Mat4<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_cols(-self.c0, -self.c1, -self.c2, -self.c3)
    }
}

impl<S: Scalar> Mul<S> for Mat4<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::from_cols(self.c0 * rhs, self.c1 * rhs, self.c2 * rhs, self.c3 * rhs)
    }
}

// Mat4 * Vec4
impl<S: Scalar> Mul<Vec4<S>> for Mat4<S> {
    type Output = Vec4<S>;
    #[inline]
    fn mul(self, rhs: Vec4<S>) -> Vec4<S> {
        self.mul_vec4(rhs)
    }
}

// Mat4 * Mat4
impl<S: Scalar> Mul for Mat4<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_transform() {
        let m = Mat4::<f64>::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(m.transform_point(p), p);
    }

    #[test]
    fn translation() {
        let m = Mat4::translation(10.0, 20.0, 30.0);
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = m.transform_point(p);
        assert_eq!(result, Point3::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn translation_ignores_vectors() {
        let m = Mat4::translation(10.0, 20.0, 30.0);
        let v = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(m.transform_vec(v), v);
    }

    #[test]
    fn row_round_trip() {
        let mut m = Mat4::<f64>::identity();
        m.set_row(2, Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(m.row(2), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(m.row(0), Vec4::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(m.row(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn determinant_of_scale() {
        let m = Mat4::scale(2.0, 3.0, 4.0);
        assert!((m.determinant() - 24.0).abs() < 1e-10);
        assert!((Mat4::<f64>::translation(5.0, 6.0, 7.0).determinant() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn minor_and_cofactor() {
        let m = Mat4::scale(2.0, 3.0, 4.0);
        let minor = m.minor(0, 0);
        assert!((minor.determinant() - 12.0).abs() < 1e-10);
        assert!((m.cofactor(0, 0) - 12.0).abs() < 1e-10);
    }

    #[test]
    fn inverse_roundtrip() {
        let m = Mat4::translation(1.0, 2.0, 3.0) * Mat4::rotation_z(0.5);
        let mi = m.try_inverse().unwrap();
        let prod = m * mi;
        let id = Mat4::<f64>::identity();
        for r in 0..4 {
            for c in 0..4 {
                assert!(
                    (prod.get(r, c) - id.get(r, c)).abs() < 1e-10,
                    "mismatch at ({}, {}): {} vs {}",
                    r,
                    c,
                    prod.get(r, c),
                    id.get(r, c)
                );
            }
        }
    }

    #[test]
    fn perspective_inverse_roundtrip() {
        let m = Mat4::perspective(core::f64::consts::FRAC_PI_2, 16.0 / 9.0, 0.1, 100.0);
        let mi = m.try_inverse().unwrap();
        let prod = m * mi;
        for r in 0..4 {
            for c in 0..4 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert!((prod.get(r, c) - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn singular_has_no_inverse() {
        let m = Mat4::scale(1.0, 1.0, 0.0);
        assert!(m.try_inverse().is_none());
    }

    #[test]
    fn from_quat_matches_rotation_constructor() {
        let q = Quat::from_axis_angle(Vec3::<f64>::z(), 0.6);
        let a = Mat4::from_quat(&q);
        let b = Mat4::rotation_z(0.6);
        for r in 0..4 {
            for c in 0..4 {
                assert!((a.get(r, c) - b.get(r, c)).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn compose() {
        let t = Mat4::translation(1.0, 0.0, 0.0);
        let r = Mat4::rotation_z(core::f64::consts::FRAC_PI_2);
        // Rotate then translate
        let m = t * r;
        let p = Point3::new(1.0, 0.0, 0.0);
        let result = m.transform_point(p);
        // Rotating (1,0,0) by 90 deg gives (0,1,0), then translating by (1,0,0) gives (1,1,0)
        assert!((result.x - 1.0).abs() < 1e-10);
        assert!((result.y - 1.0).abs() < 1e-10);
    }

    #[test]
    fn look_at_maps_eye_to_origin() {
        let eye = Point3::new(2.0, 3.0, 5.0);
        let m = Mat4::look_at(eye, Point3::origin(), Vec3::y());
        let mapped = m.transform_point(eye);
        assert!(mapped.to_vec().norm() < 1e-10);
        // The target lands on the negative Z axis in view space.
        let target = m.transform_point(Point3::origin());
        assert!(target.x.abs() < 1e-10);
        assert!(target.y.abs() < 1e-10);
        assert!(target.z < 0.0);
    }

    #[test]
    fn perspective_depth_range() {
        let near = 0.5;
        let far = 50.0;
        let m = Mat4::perspective(1.0, 1.0, near, far);
        let on_near = m * Vec4::new(0.0, 0.0, -near, 1.0);
        let on_far = m * Vec4::new(0.0, 0.0, -far, 1.0);
        assert!((on_near.z / on_near.w).abs() < 1e-10);
        assert!((on_far.z / on_far.w - 1.0).abs() < 1e-10);
    }

    #[test]
    fn orthographic_maps_box_to_unit_cube() {
        let m = Mat4::orthographic(-2.0, 2.0, -1.0, 1.0, 0.0, 10.0);
        let p = m.transform_point(Point3::new(2.0, 1.0, -10.0));
        assert!((p.x - 1.0).abs() < 1e-10);
        assert!((p.y - 1.0).abs() < 1e-10);
        assert!((p.z - 1.0).abs() < 1e-10);
    }

    #[test]
    fn transform_normal_under_scale() {
        // A plane normal under non-uniform scale must use the inverse
        // transpose, not the plain matrix.
        let m = Mat4::scale(2.0, 1.0, 1.0);
        let n = Vec3::new(1.0, 1.0, 0.0).normalize();
        let tn = m.transform_normal(n);
        let tangent = m.transform_vec(Vec3::new(-1.0, 1.0, 0.0));
        assert!(tn.dot(tangent).abs() < 1e-10);
    }
}
