use crate::{Mat2, Scalar, Vec3};
use core::ops::{Add, AddAssign, Mul, Neg, Sub};

/// 3x3 matrix, column-major storage.
///
/// Used for rotations and inertia tensors. Stored as three column vectors
/// for natural column access; constructors take elements in row-major
/// argument order for readability:
/// ```text
/// | m00 m01 m02 |
/// | m10 m11 m12 |
/// | m20 m21 m22 |
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3<S> {
    /// Column 0
    pub c0: Vec3<S>,
    /// Column 1
    pub c1: Vec3<S>,
    /// Column 2
    pub c2: Vec3<S>,
}

impl<S: Scalar> Mat3<S> {
    #[inline]
    pub fn new(m00: S, m01: S, m02: S, m10: S, m11: S, m12: S, m20: S, m21: S, m22: S) -> Self {
        Self {
            c0: Vec3::new(m00, m10, m20),
            c1: Vec3::new(m01, m11, m21),
            c2: Vec3::new(m02, m12, m22),
        }
    }

    /// Construct from column vectors
    #[inline]
    pub fn from_cols(c0: Vec3<S>, c1: Vec3<S>, c2: Vec3<S>) -> Self {
        Self { c0, c1, c2 }
    }

    /// Construct from row vectors
    #[inline]
    pub fn from_rows(r0: Vec3<S>, r1: Vec3<S>, r2: Vec3<S>) -> Self {
        Self::new(r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z)
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_cols(Vec3::zero(), Vec3::zero(), Vec3::zero())
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(
            S::ONE,
            S::ZERO,
            S::ZERO,
            S::ZERO,
            S::ONE,
            S::ZERO,
            S::ZERO,
            S::ZERO,
            S::ONE,
        )
    }

    #[inline]
    pub fn diagonal(d: Vec3<S>) -> Self {
        Self::new(
            d.x,
            S::ZERO,
            S::ZERO,
            S::ZERO,
            d.y,
            S::ZERO,
            S::ZERO,
            S::ZERO,
            d.z,
        )
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        let c = match col {
            0 => &self.c0,
            1 => &self.c1,
            _ => &self.c2,
        };
        match row {
            0 => c.x,
            1 => c.y,
            _ => c.z,
        }
    }

    /// Element write (row, col)
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: S) {
        let c = match col {
            0 => &mut self.c0,
            1 => &mut self.c1,
            _ => &mut self.c2,
        };
        match row {
            0 => c.x = value,
            1 => c.y = value,
            _ => c.z = value,
        }
    }

    /// Column access
    #[inline]
    pub fn col(&self, i: usize) -> Vec3<S> {
        match i {
            0 => self.c0,
            1 => self.c1,
            _ => self.c2,
        }
    }

    /// Row access
    #[inline]
    pub fn row(&self, i: usize) -> Vec3<S> {
        Vec3::new(self.get(i, 0), self.get(i, 1), self.get(i, 2))
    }

    /// Row write
    #[inline]
    pub fn set_row(&mut self, i: usize, row: Vec3<S>) {
        self.set(i, 0, row.x);
        self.set(i, 1, row.y);
        self.set(i, 2, row.z);
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(
            self.c0.x, self.c0.y, self.c0.z, self.c1.x, self.c1.y, self.c1.z, self.c2.x, self.c2.y,
            self.c2.z,
        )
    }

    /// Trace
    #[inline]
    pub fn trace(&self) -> S {
        self.c0.x + self.c1.y + self.c2.z
    }

    /// The 2x2 submatrix left after deleting row `row` and column `col`.
    pub fn minor(&self, row: usize, col: usize) -> Mat2<S> {
        let mut m = [S::ZERO; 4];
        let mut k = 0;
        for r in 0..3 {
            if r == row {
                continue;
            }
            for c in 0..3 {
                if c == col {
                    continue;
                }
                m[k] = self.get(r, c);
                k += 1;
            }
        }
        Mat2::new(m[0], m[1], m[2], m[3])
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
    }

    /// Inverse via the adjugate: cofactor(r, c) lands at the transposed
    /// position (c, r), scaled by 1/det. Returns None for a singular
    /// matrix (a vanishing determinant has no meaningful inverse).
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < S::EPSILON {
            return None;
        }
        let inv_det = det.recip();
        let mut inv = Self::zero();
        for r in 0..3 {
            for c in 0..3 {
                inv.set(c, r, self.cofactor(r, c) * inv_det);
            }
        }
        Some(inv)
    }

    /// Matrix-vector product
    #[inline]
    pub fn mul_vec(&self, v: Vec3<S>) -> Vec3<S> {
        self.c0 * v.x + self.c1 * v.y + self.c2 * v.z
    }

    /// Matrix-matrix product. Built into fresh columns, so the destination
    /// never aliases either operand.
    #[inline]
    pub fn mul_mat(&self, rhs: &Mat3<S>) -> Mat3<S> {
        Mat3::from_cols(
            self.mul_vec(rhs.c0),
            self.mul_vec(rhs.c1),
            self.mul_vec(rhs.c2),
        )
    }

    /// Rotation matrix about X axis
    pub fn rotation_x(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(S::ONE, S::ZERO, S::ZERO, S::ZERO, c, -s, S::ZERO, s, c)
    }

    /// Rotation matrix about Y axis
    pub fn rotation_y(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, S::ZERO, s, S::ZERO, S::ONE, S::ZERO, -s, S::ZERO, c)
    }

    /// Rotation matrix about Z axis
    pub fn rotation_z(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, S::ZERO, s, c, S::ZERO, S::ZERO, S::ZERO, S::ONE)
    }

    /// Rotation matrix about an arbitrary axis (Rodrigues' formula)
    pub fn rotation_axis(axis: Vec3<S>, angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let t = S::ONE - c;
        let Vec3 { x, y, z } = axis;
        Self::new(
            t * x * x + c,
            t * x * y - s * z,
            t * x * z + s * y,
            t * x * y + s * z,
            t * y * y + c,
            t * y * z - s * x,
            t * x * z - s * y,
            t * y * z + s * x,
            t * z * z + c,
        )
    }
}

impl<S: Scalar> Default for Mat3<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Add for Mat3<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }
}

impl<S: Scalar> AddAssign for Mat3<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.c0 += rhs.c0;
        self.c1 += rhs.c1;
        self.c2 += rhs.c2;
    }
}

impl<S: Scalar> Sub for Mat3<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }
}

impl<S: Scalar> Neg for Mat3<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_cols(-self.c0, -self.c1, -self.c2)
    }
}

impl<S: Scalar> Mul<S> for Mat3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::from_cols(self.c0 * rhs, self.c1 * rhs, self.c2 * rhs)
    }
}

// Mat3 * Vec3
impl<S: Scalar> Mul<Vec3<S>> for Mat3<S> {
    type Output = Vec3<S>;
    #[inline]
    fn mul(self, rhs: Vec3<S>) -> Vec3<S> {
        self.mul_vec(rhs)
    }
}

// Mat3 * Mat3
impl<S: Scalar> Mul for Mat3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}
