use keel_geom::{Mat4, Quat, Real, Vec3};

/// Render-side collaborator a body pushes its transform to.
///
/// Implemented outside this crate by whatever owns the GPU resources
/// (mesh, material, uniform buffers). The simulation only ever hands it a
/// world transform — decomposed or as a 4x4 matrix, whichever entry point
/// the renderer prefers — plus the per-frame tick for drawable-local
/// animation state.
pub trait Drawable {
    fn set_transform(&mut self, position: Vec3, rotation: Quat, scale: Vec3);

    /// Matrix form of [`set_transform`](Self::set_transform).
    fn set_transform_matrix(&mut self, transform: &Mat4);

    fn update(&mut self, dt: Real);
}
