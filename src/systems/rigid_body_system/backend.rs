use crate::rigid_body::{BodyMaterial, Vec2};

/// Opaque body identity handed out by a backend.
pub type BodyHandle = u64;

/// Narrow interface the debris manager needs from a physics engine.
///
/// Times are milliseconds, positions scene units with y growing downward.
/// Handles are never reused by a backend, so a stale handle is simply ignored.
pub trait PhysicsBackend {
    /// Create a dynamic circle at rest.
    fn create_circle(&mut self, pos: Vec2, radius: f32, material: BodyMaterial) -> BodyHandle;

    /// Create an immovable box centred at `center`.
    fn create_static_box(&mut self, center: Vec2, width: f32, height: f32) -> BodyHandle;

    fn set_velocity(&mut self, body: BodyHandle, velocity: Vec2);

    /// Remove a body. Returns false when the handle is unknown.
    fn remove(&mut self, body: BodyHandle) -> bool;

    /// Downward gravity in units of the scene's nominal gravity.
    fn set_gravity(&mut self, gravity_y: f32);

    /// Advance the simulation by `dt_ms`.
    fn step(&mut self, dt_ms: f32);

    fn position(&self, body: BodyHandle) -> Option<Vec2>;

    fn radius(&self, body: BodyHandle) -> Option<f32>;

    /// Remove every body, static and dynamic.
    fn clear(&mut self);

    /// Total bodies, static included.
    fn body_count(&self) -> usize;
}
