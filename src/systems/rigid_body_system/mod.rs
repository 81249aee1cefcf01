//! RigidBodySystem - small built-in physics backend for snow debris
//!
//! The debris lifecycle manager only talks to physics through the
//! `PhysicsBackend` trait. This module provides the default implementation:
//! - Dynamic circles with gravity, air drag and a speed clamp.
//! - Static boxes as obstacles (ground slab, side walls).
//! - Circle/box and circle/circle contacts with restitution and friction.
//! - No rotation, no sleeping, no broadphase. Body counts are capped well
//!   below the point where the O(n^2) pair pass matters.

mod backend;
mod collision;
mod system;

pub use backend::{BodyHandle, PhysicsBackend};
pub use system::RigidBodySystem;
