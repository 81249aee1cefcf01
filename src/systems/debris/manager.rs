use std::collections::{HashMap, VecDeque};

use crate::core::SimRng;
use crate::rigid_body::{BodyMaterial, Vec2};
use crate::rigid_body_system::{BodyHandle, PhysicsBackend, RigidBodySystem};

use super::config::{DebrisConfig, DebrisConfigPatch};

/// Bodies further than this outside the viewport are dropped.
const MARGIN_X: f32 = 500.0;
const MARGIN_TOP: f32 = 800.0;
const MARGIN_BOTTOM: f32 = 800.0;

/// Thickness of the ground slab and side walls.
const BOUNDARY_THICKNESS: f32 = 160.0;
/// Extra length so the slab and walls overhang the viewport.
const BOUNDARY_OVERHANG: f32 = 800.0;

/// Per-body radius factor is `0.7 + rand * 0.9`.
const RADIUS_MIN_FACTOR: f32 = 0.7;
const RADIUS_SPREAD: f32 = 0.9;

/// Backend steps are bounded to two nominal frames.
const MAX_STEP_MS: f32 = 1000.0 / 30.0;

/// One throw: `count` chunks around `origin` moving roughly at `velocity`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRequest {
    pub origin: Vec2,
    pub velocity: Vec2,
    pub count: u32,
    pub base_radius: f32,
}

/// What a step removed, by cause.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub expired: u32,
    pub escaped: u32,
    pub evicted: u32,
}

/// The capability handed to whatever produces throws.
pub trait DebrisSink {
    fn throw(&mut self, request: &SpawnRequest, now_ms: f64);
    fn configure(&mut self, patch: &DebrisConfigPatch);
}

pub struct DebrisManager<B: PhysicsBackend = RigidBodySystem> {
    backend: B,
    config: DebrisConfig,
    // Oldest first
    live: VecDeque<BodyHandle>,
    born_at: HashMap<BodyHandle, f64>,
    boundaries: Vec<BodyHandle>,
    width: f32,
    height: f32,
    rng: SimRng,
}

impl<B: PhysicsBackend> DebrisManager<B> {
    pub fn new(backend: B, config: DebrisConfig, width: f32, height: f32, rng: SimRng) -> Self {
        let mut manager = Self {
            backend,
            config,
            live: VecDeque::new(),
            born_at: HashMap::new(),
            boundaries: Vec::new(),
            width,
            height,
            rng,
        };
        manager.backend.set_gravity(config.gravity_y);
        manager.rebuild_boundaries();
        manager
    }

    pub fn config(&self) -> &DebrisConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub(super) fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn boundary_count(&self) -> usize {
        self.boundaries.len()
    }

    /// Live handles, oldest first.
    pub fn live_handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.live.iter().copied()
    }

    pub fn born_at(&self, body: BodyHandle) -> Option<f64> {
        self.born_at.get(&body).copied()
    }

    /// Position and radius of every live body, oldest first.
    pub fn bodies(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.live.iter().filter_map(|&h| {
            let pos = self.backend.position(h)?;
            let r = self.backend.radius(h)?;
            Some((pos, r))
        })
    }

    /// Create `count` bodies near the origin, then enforce the cap.
    /// Returns how many older bodies the cap evicted.
    pub fn spawn(&mut self, request: &SpawnRequest, now_ms: f64) -> u32 {
        let material = BodyMaterial {
            restitution: self.config.restitution,
            friction: self.config.friction,
            friction_air: self.config.friction_air,
        };
        let base = request.base_radius.max(0.1);

        for _ in 0..request.count {
            let r = base * (RADIUS_MIN_FACTOR + self.rng.next_f32() * RADIUS_SPREAD);
            let offset = Vec2::new(self.rng.centered(), self.rng.centered()) * (2.0 * base);
            let body = self.backend.create_circle(request.origin + offset, r, material);

            // Sideways spread plus an upward kick so chunks arc out of the shovel
            let velocity = Vec2::new(
                request.velocity.x * 0.9 + self.rng.centered() * 6.0,
                request.velocity.y * 0.7 - (8.0 + self.rng.next_f32() * 8.0),
            );
            self.backend.set_velocity(body, velocity);

            self.born_at.insert(body, now_ms);
            self.live.push_back(body);
        }

        self.enforce_cap()
    }

    /// Advance physics, then drop bodies that expired or flew off-screen.
    pub fn step(&mut self, dt_ms: f32, now_ms: f64) -> StepReport {
        self.backend.step(dt_ms.clamp(0.0, MAX_STEP_MS));

        let mut report = StepReport::default();
        let ttl = self.config.ttl_ms;

        // Removal mutates `live`; walk a snapshot.
        let snapshot: Vec<BodyHandle> = self.live.iter().copied().collect();
        for body in snapshot {
            let born = self.born_at.get(&body).copied().unwrap_or(now_ms);
            if now_ms - born >= ttl {
                self.remove_tracked(body);
                report.expired += 1;
                continue;
            }

            match self.backend.position(body) {
                Some(pos) if self.is_on_stage(pos) => {}
                _ => {
                    self.remove_tracked(body);
                    report.escaped += 1;
                }
            }
        }

        report.evicted = self.enforce_cap();
        report
    }

    /// Evict oldest bodies until the live count fits the cap.
    pub fn enforce_cap(&mut self) -> u32 {
        let mut evicted = 0;
        while self.live.len() > self.config.max_bodies {
            let Some(oldest) = self.live.pop_front() else {
                break;
            };
            self.backend.remove(oldest);
            self.born_at.remove(&oldest);
            evicted += 1;
        }
        evicted
    }

    /// Merge a partial config into the live one.
    pub fn set_config(&mut self, patch: &DebrisConfigPatch) {
        let prev = self.config;
        self.config = prev.merged(patch);

        self.backend.set_gravity(self.config.gravity_y);

        if self.config.allow_side_exit != prev.allow_side_exit {
            console_log!(
                "[snowdrift] side exit {}, rebuilding boundaries",
                if self.config.allow_side_exit { "open" } else { "walled" }
            );
            self.rebuild_boundaries();
        }

        if patch.max_bodies.is_some() {
            self.enforce_cap();
        }
    }

    /// Rebuild boundaries for a new viewport. Live bodies are untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.rebuild_boundaries();
    }

    /// Release every backend body. The manager stays usable but empty.
    pub fn clear(&mut self) {
        self.backend.clear();
        self.live.clear();
        self.born_at.clear();
        self.boundaries.clear();
    }

    fn remove_tracked(&mut self, body: BodyHandle) {
        self.backend.remove(body);
        if let Some(idx) = self.live.iter().position(|&h| h == body) {
            self.live.remove(idx);
        }
        self.born_at.remove(&body);
    }

    #[inline]
    fn is_on_stage(&self, pos: Vec2) -> bool {
        pos.x >= -MARGIN_X
            && pos.x <= self.width + MARGIN_X
            && pos.y >= -MARGIN_TOP
            && pos.y <= self.height + MARGIN_BOTTOM
    }

    fn rebuild_boundaries(&mut self) {
        for b in self.boundaries.drain(..) {
            self.backend.remove(b);
        }

        let (w, h) = (self.width, self.height);
        let t = BOUNDARY_THICKNESS;

        // Ground slab, top edge on the viewport bottom
        let ground = self.backend.create_static_box(
            Vec2::new(w * 0.5, h + t * 0.5),
            w + BOUNDARY_OVERHANG,
            t,
        );
        self.boundaries.push(ground);

        if !self.config.allow_side_exit {
            let left = self.backend.create_static_box(
                Vec2::new(-t * 0.5, h * 0.5),
                t,
                h + BOUNDARY_OVERHANG,
            );
            let right = self.backend.create_static_box(
                Vec2::new(w + t * 0.5, h * 0.5),
                t,
                h + BOUNDARY_OVERHANG,
            );
            self.boundaries.push(left);
            self.boundaries.push(right);
        }
    }
}

impl<B: PhysicsBackend> DebrisSink for DebrisManager<B> {
    fn throw(&mut self, request: &SpawnRequest, now_ms: f64) {
        self.spawn(request, now_ms);
    }

    fn configure(&mut self, patch: &DebrisConfigPatch) {
        self.set_config(patch);
    }
}
