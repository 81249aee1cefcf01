use crate::rigid_body::{BodyMaterial, RigidBody, Shape, Vec2};

use super::backend::{BodyHandle, PhysicsBackend};
use super::collision::{bounce, circle_vs_box, circle_vs_circle};

/// Reference frame length; velocities are in units per frame of this length.
pub const FRAME_MS: f32 = 1000.0 / 60.0;

/// Velocity gained per frame at `gravity_y = 1.0`.
const GRAVITY_PER_FRAME: f32 = 0.278;

/// Clamp to keep cost bounded and avoid tunneling through the ground slab.
const MAX_SPEED: f32 = 80.0;

/// A single step never integrates more than this many frames (tab switches).
const MAX_FRAMES_PER_STEP: f32 = 4.0;

/// Fraction of the overlap corrected per contact.
const POSITION_CORRECTION: f32 = 0.8;

/// Manages all rigid bodies in the simulation
pub struct RigidBodySystem {
    bodies: Vec<RigidBody>,
    // Monotonic, never reused
    next_id: BodyHandle,
    gravity_y: f32,
}

impl RigidBodySystem {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
            gravity_y: 1.0,
        }
    }

    fn add(&mut self, mut body: RigidBody) -> BodyHandle {
        let id = self.next_id;
        self.next_id += 1;
        body.id = id;
        self.bodies.push(body);
        id
    }

    fn get(&self, id: BodyHandle) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Number of dynamic bodies.
    pub fn dynamic_count(&self) -> usize {
        self.bodies.iter().filter(|b| !b.is_static).count()
    }

    /// Number of static bodies.
    pub fn static_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_static).count()
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    fn integrate(&mut self, frames: f32) {
        let gravity = self.gravity_y * GRAVITY_PER_FRAME * frames;

        for body in self.bodies.iter_mut().filter(|b| !b.is_static) {
            body.velocity.y += gravity;

            let drag = (1.0 - body.material.friction_air).powf(frames);
            body.velocity = (body.velocity * drag).clamp_each(MAX_SPEED);
            if !body.velocity.is_finite() {
                body.velocity = Vec2::zero();
            }

            body.pos += body.velocity * frames;
        }
    }

    /// Push dynamic circles out of static boxes and reflect their velocity.
    fn resolve_static_contacts(&mut self) {
        let obstacles: Vec<(Vec2, f32, f32)> = self
            .bodies
            .iter()
            .filter(|b| b.is_static)
            .filter_map(|b| match b.shape {
                Shape::Box { half_width, half_height } => Some((b.pos, half_width, half_height)),
                Shape::Circle { .. } => None,
            })
            .collect();

        if obstacles.is_empty() {
            return;
        }

        for body in self.bodies.iter_mut().filter(|b| !b.is_static) {
            let Shape::Circle { radius } = body.shape else {
                continue;
            };

            for &(center, hw, hh) in obstacles.iter() {
                if let Some(contact) = circle_vs_box(body.pos, radius, center, hw, hh) {
                    body.pos += contact.normal * contact.depth;
                    body.velocity = bounce(
                        body.velocity,
                        contact.normal,
                        body.material.restitution,
                        body.material.friction,
                    );
                }
            }
        }
    }

    /// Pairwise circle contacts between dynamic bodies.
    fn resolve_body_contacts(&mut self) {
        let n = self.bodies.len();
        for j in 1..n {
            let (left, right) = self.bodies.split_at_mut(j);
            let b = &mut right[0];
            if b.is_static {
                continue;
            }
            let Shape::Circle { radius: rb } = b.shape else {
                continue;
            };

            for a in left.iter_mut() {
                if a.is_static {
                    continue;
                }
                let Shape::Circle { radius: ra } = a.shape else {
                    continue;
                };
                let Some(contact) = circle_vs_circle(a.pos, ra, b.pos, rb) else {
                    continue;
                };

                let inv_sum = a.inv_mass + b.inv_mass;
                if inv_sum <= 0.0 {
                    continue;
                }

                // Positional split by inverse mass
                let correction = contact.normal * (contact.depth * POSITION_CORRECTION / inv_sum);
                a.pos += correction * a.inv_mass;
                b.pos -= correction * b.inv_mass;

                let approach = (a.velocity - b.velocity).dot(contact.normal);
                if approach >= 0.0 {
                    continue;
                }
                let e = a.material.restitution.max(b.material.restitution);
                let j_mag = -(1.0 + e) * approach / inv_sum;
                let impulse = contact.normal * j_mag;
                a.apply_impulse(impulse);
                b.apply_impulse(-impulse);
            }
        }
    }
}

impl PhysicsBackend for RigidBodySystem {
    fn create_circle(&mut self, pos: Vec2, radius: f32, material: BodyMaterial) -> BodyHandle {
        self.add(RigidBody::new_circle(pos.x, pos.y, radius, material, 0))
    }

    fn create_static_box(&mut self, center: Vec2, width: f32, height: f32) -> BodyHandle {
        self.add(RigidBody::new_static_box(center.x, center.y, width, height, 0))
    }

    fn set_velocity(&mut self, body: BodyHandle, velocity: Vec2) {
        if let Some(b) = self.bodies.iter_mut().find(|b| b.id == body && !b.is_static) {
            b.velocity = velocity.clamp_each(MAX_SPEED);
        }
    }

    fn remove(&mut self, body: BodyHandle) -> bool {
        if let Some(idx) = self.bodies.iter().position(|b| b.id == body) {
            self.bodies.swap_remove(idx);
            return true;
        }
        false
    }

    fn set_gravity(&mut self, gravity_y: f32) {
        self.gravity_y = gravity_y;
    }

    fn step(&mut self, dt_ms: f32) {
        let frames = (dt_ms / FRAME_MS).min(MAX_FRAMES_PER_STEP);
        if frames.is_nan() || frames <= 0.0 {
            return;
        }

        self.integrate(frames);
        self.resolve_body_contacts();
        self.resolve_static_contacts();
    }

    fn position(&self, body: BodyHandle) -> Option<Vec2> {
        self.get(body).map(|b| b.pos)
    }

    fn radius(&self, body: BodyHandle) -> Option<f32> {
        self.get(body).map(|b| b.radius())
    }

    fn clear(&mut self) {
        self.bodies.clear();
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new()
    }
}
