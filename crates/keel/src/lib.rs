//! keel — hand-rolled math for rigid-body simulation
//!
//! The linear-algebra kernel under the keel physics crates: vectors,
//! quaternions and square matrices, generic over scalar precision so the
//! same code runs in f32 on the simulation path and f64 in verification
//! tests.
//!
//! # Design principles
//! - Generic over a `Scalar` trait (f32, f64)
//! - `#[repr(C)]` everywhere for GPU interop
//! - No nalgebra/glam dependency — full control of the stack
//! - Column-major matrices with row-major constructor arguments
//! - Degenerate inputs degrade (`Option`, no-op normalize), never panic

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod mat2;
mod mat3;
mod mat4;
mod point3;
mod quat;
mod scalar;
mod vec2;
mod vec3;
mod vec4;

pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use point3::Point3;
pub use quat::Quat;
pub use scalar::Scalar;
pub use vec2::Vec2;
pub use vec3::{make_orthonormal_basis, Vec3};
pub use vec4::Vec4;

// Bytemuck impls for concrete f32/f64 types (generic structs can't derive Pod)
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: All fields are the same float type, #[repr(C)], no padding
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Vec2<f32>);
    impl_pod!(Vec2<f64>);
    impl_pod!(Vec3<f32>);
    impl_pod!(Vec3<f64>);
    impl_pod!(Vec4<f32>);
    impl_pod!(Vec4<f64>);
    impl_pod!(Point3<f32>);
    impl_pod!(Point3<f64>);
    impl_pod!(Mat2<f32>);
    impl_pod!(Mat2<f64>);
    impl_pod!(Mat3<f32>);
    impl_pod!(Mat3<f64>);
    impl_pod!(Mat4<f32>);
    impl_pod!(Mat4<f64>);
    impl_pod!(Quat<f32>);
    impl_pod!(Quat<f64>);
}
