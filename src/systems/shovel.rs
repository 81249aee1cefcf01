//! Shovel - scoops snow out of the pile and throws it as debris
//!
//! While held down the shovel removes a rectangular footprint from the
//! heightfield each frame and accumulates the removed amount as load, up to
//! its capacity. Releasing with enough load turns it into one spawn request.

use crate::heightfield::Heightfield;
use crate::rigid_body::Vec2;
use crate::debris::SpawnRequest;

const HEAD_WIDTH: f32 = 92.0;
const HEAD_HEIGHT: f32 = 44.0;
const CAPACITY: f32 = 140.0;
/// Blade centre relative to the pointer
const BLADE_OFFSET: (f32, f32) = (22.0, 16.0);

/// Load must exceed this for a release to throw anything.
pub const THROW_MIN_LOAD: f32 = 1.0;
const THROW_MAX_SPEED: f32 = 70.0;
const THROW_MIN_COUNT: f32 = 10.0;
const THROW_MAX_COUNT: f32 = 44.0;
const LOAD_PER_CHUNK: f32 = 7.0;
const CHUNK_RADIUS: f32 = 2.4;

const FRAME_MS: f64 = 16.67;
const MIN_THROW_DT_MS: f64 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub t_ms: f64,
}

/// Shovel dimensions for a given scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShovelGeometry {
    pub scale: f32,
    pub head_w: f32,
    pub head_h: f32,
    pub capacity: f32,
}

impl ShovelGeometry {
    pub fn for_scale(scale: f32) -> Self {
        Self {
            scale,
            head_w: HEAD_WIDTH * scale,
            head_h: HEAD_HEIGHT * scale,
            capacity: CAPACITY * scale,
        }
    }
}

/// Throw velocity from the motion between `from` and the release point, in
/// units per 60 Hz frame, each axis clamped.
pub fn throw_velocity(from: PointerSample, x: f32, y: f32, now_ms: f64) -> Vec2 {
    let dt = (now_ms - from.t_ms).max(MIN_THROW_DT_MS);
    let frames = (dt / FRAME_MS) as f32;
    Vec2::new((x - from.x) / frames, (y - from.y) / frames).clamp_each(THROW_MAX_SPEED)
}

/// Chunk count and base radius for a load.
pub fn throw_shape(load: f32, scale: f32) -> (u32, f32) {
    let count = (load / (LOAD_PER_CHUNK * scale)).clamp(THROW_MIN_COUNT, THROW_MAX_COUNT).floor();
    (count as u32, CHUNK_RADIUS * scale)
}

pub struct Shovel {
    geom: ShovelGeometry,
    armed: bool,
    dragging: bool,
    pos: Vec2,
    load: f32,
    // Where the current drag started
    anchor: PointerSample,
}

impl Shovel {
    pub fn new(scale: f32) -> Self {
        Self {
            geom: ShovelGeometry::for_scale(scale),
            armed: false,
            dragging: false,
            pos: Vec2::new(120.0, 120.0),
            load: 0.0,
            anchor: PointerSample { x: 0.0, y: 0.0, t_ms: 0.0 },
        }
    }

    pub fn geometry(&self) -> &ShovelGeometry {
        &self.geom
    }

    /// Change scale; the current load is kept but clamped to the new capacity.
    pub fn set_scale(&mut self, scale: f32) {
        self.geom = ShovelGeometry::for_scale(scale);
        self.load = self.load.min(self.geom.capacity);
    }

    pub fn set_armed(&mut self, armed: bool) {
        self.armed = armed;
        if !armed {
            self.dragging = false;
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn load(&self) -> f32 {
        self.load
    }

    pub fn load_ratio(&self) -> f32 {
        if self.geom.capacity > 0.0 { self.load / self.geom.capacity } else { 0.0 }
    }

    /// Non-finite pointer coordinates are ignored.
    pub fn move_to(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pos = Vec2::new(x, y);
        }
    }

    /// Pointer down. Starts a drag only while armed.
    pub fn press(&mut self, x: f32, y: f32, now_ms: f64) {
        self.move_to(x, y);
        if !self.armed || !(x.is_finite() && y.is_finite() && now_ms.is_finite()) {
            return;
        }
        self.dragging = true;
        self.anchor = PointerSample { x, y, t_ms: now_ms };
    }

    /// Pointer cancelled: stop scooping, keep the load.
    pub fn cancel(&mut self) {
        self.dragging = false;
    }

    /// Blade footprint `(x, y, w, h)` at the current pointer position.
    pub fn footprint(&self) -> (f32, f32, f32, f32) {
        let g = &self.geom;
        let blade_x = self.pos.x + BLADE_OFFSET.0 * g.scale;
        let blade_y = self.pos.y + BLADE_OFFSET.1 * g.scale;
        (blade_x - g.head_w * 0.5, blade_y - g.head_h * 0.5, g.head_w, g.head_h)
    }

    /// One scoop pass while dragging. Returns the amount picked up.
    pub fn scoop(&mut self, field: &mut Heightfield) -> f32 {
        if !self.armed || !self.dragging {
            return 0.0;
        }
        let remaining = self.geom.capacity - self.load;
        if remaining <= 0.0 {
            return 0.0;
        }

        let (x, y, w, h) = self.footprint();
        let taken = field.remove_rect(x, y, w, h, remaining);
        if taken > 0.0 {
            self.load = (self.load + taken).clamp(0.0, self.geom.capacity);
        }
        taken
    }

    /// Pointer up. Empties the shovel into a spawn request when armed and
    /// carrying more than the minimum load.
    pub fn release(&mut self, x: f32, y: f32, now_ms: f64) -> Option<SpawnRequest> {
        self.move_to(x, y);
        self.dragging = false;

        if !self.armed || self.load <= THROW_MIN_LOAD {
            return None;
        }

        let Vec2 { x, y } = self.pos;
        let velocity = throw_velocity(self.anchor, x, y, now_ms);
        self.anchor = PointerSample { x, y, t_ms: now_ms };

        let load = std::mem::take(&mut self.load);
        let (count, base_radius) = throw_shape(load, self.geom.scale);

        Some(SpawnRequest {
            origin: Vec2::new(x, y),
            velocity,
            count,
            base_radius,
        })
    }
}
