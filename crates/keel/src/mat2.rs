use crate::{Scalar, Vec2};
use core::ops::{Add, Mul};

/// 2x2 matrix, column-major storage.
///
/// Mostly exists as the minor of a 3x3 matrix during cofactor expansion.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2<S> {
    /// Column 0
    pub c0: Vec2<S>,
    /// Column 1
    pub c1: Vec2<S>,
}

impl<S: Scalar> Mat2<S> {
    /// Construct from individual elements (row-major argument order for readability).
    #[inline]
    pub fn new(m00: S, m01: S, m10: S, m11: S) -> Self {
        Self {
            c0: Vec2::new(m00, m10),
            c1: Vec2::new(m01, m11),
        }
    }

    #[inline]
    pub fn from_cols(c0: Vec2<S>, c1: Vec2<S>) -> Self {
        Self { c0, c1 }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_cols(Vec2::zero(), Vec2::zero())
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(S::ONE, S::ZERO, S::ZERO, S::ONE)
    }

    #[inline]
    pub fn determinant(&self) -> S {
        self.c0.x * self.c1.y - self.c1.x * self.c0.y
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(self.c0.x, self.c0.y, self.c1.x, self.c1.y)
    }

    #[inline]
    pub fn mul_vec(&self, v: Vec2<S>) -> Vec2<S> {
        self.c0 * v.x + self.c1 * v.y
    }
}

impl<S: Scalar> Default for Mat2<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Add for Mat2<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl<S: Scalar> Mul<S> for Mat2<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::from_cols(self.c0 * rhs, self.c1 * rhs)
    }
}

impl<S: Scalar> Mul<Vec2<S>> for Mat2<S> {
    type Output = Vec2<S>;
    #[inline]
    fn mul(self, rhs: Vec2<S>) -> Vec2<S> {
        self.mul_vec(rhs)
    }
}
