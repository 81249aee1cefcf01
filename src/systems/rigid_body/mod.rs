//! RigidBody - bodies simulated by the built-in physics backend
//!
//! Two shapes are enough for the snow scene: dynamic circles for thrown
//! debris and static boxes for the ground slab and side walls.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::{BodyMaterial, RigidBody, Shape};
