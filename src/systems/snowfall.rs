//! Snowfall - falling flakes that feed the heightfield
//!
//! Each flake drifts with the wind, falls under a light gravity and, once it
//! reaches the snow surface under its column, deposits into the heightfield
//! and respawns above the viewport.

use crate::core::SimRng;
use crate::heightfield::Heightfield;

/// Frame delta clamp, so a stalled tab does not teleport flakes.
const MIN_DT_MS: f32 = 10.0;
const MAX_DT_MS: f32 = 40.0;
const FRAME_MS: f32 = 16.67;

const WIND_ACCEL: f32 = 0.0026;
const HORIZONTAL_DAMPING: f32 = 0.995;
const FALL_ACCEL: f32 = 0.0011;

/// Flakes wrap horizontally this far outside the viewport.
const WRAP_MARGIN: f32 = 10.0;

const DEPOSIT_BASE: f32 = 0.55;
const DEPOSIT_PER_RADIUS: f32 = 0.28;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flake {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub r: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnowfallParams {
    pub count: usize,
    /// Fall speed multiplier
    pub speed: f32,
    pub size_min: f32,
    pub size_max: f32,
}

pub struct Snowfall {
    params: SnowfallParams,
    flakes: Vec<Flake>,
    width: f32,
    height: f32,
}

impl Snowfall {
    pub fn new(params: SnowfallParams) -> Self {
        Self {
            params,
            flakes: Vec::with_capacity(params.count),
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn flakes(&self) -> &[Flake] {
        &self.flakes
    }

    pub fn params(&self) -> &SnowfallParams {
        &self.params
    }

    /// Scatter a fresh set of flakes over the whole viewport.
    pub fn reset(&mut self, width: f32, height: f32, rng: &mut SimRng) {
        self.width = width;
        self.height = height;

        let p = self.params;
        self.flakes.clear();
        self.flakes.extend((0..p.count).map(|_| Flake {
            x: rng.next_f32() * width,
            y: rng.next_f32() * height,
            vx: rng.centered() * 0.25,
            vy: (0.35 + rng.next_f32() * 0.9) * p.speed,
            r: rng.range(p.size_min, p.size_max),
        }));
    }

    /// Drop every flake. `reset` brings them back.
    pub fn clear(&mut self) {
        self.flakes.clear();
    }

    /// Change parameters and rescatter.
    pub fn reconfigure(&mut self, params: SnowfallParams, rng: &mut SimRng) {
        self.params = params;
        let (w, h) = (self.width, self.height);
        self.reset(w, h, rng);
    }

    /// Move every flake one frame. Returns the number that landed.
    pub fn update(&mut self, dt_ms: f32, wind_x: f32, field: &mut Heightfield, rng: &mut SimRng) -> u32 {
        let dt = dt_ms.clamp(MIN_DT_MS, MAX_DT_MS);
        let p = self.params;
        let w = self.width;
        let mut landed = 0;

        for f in self.flakes.iter_mut() {
            f.vx += wind_x * WIND_ACCEL;
            f.vx *= HORIZONTAL_DAMPING;
            f.vy += FALL_ACCEL * (dt / FRAME_MS) * p.speed;

            f.x += f.vx * dt;
            f.y += f.vy * dt;

            if f.x < -WRAP_MARGIN {
                f.x = w + WRAP_MARGIN;
            }
            if f.x > w + WRAP_MARGIN {
                f.x = -WRAP_MARGIN;
            }

            if f.y >= field.surface_y(f.x) {
                field.deposit(f.x, DEPOSIT_BASE + f.r * DEPOSIT_PER_RADIUS);
                landed += 1;

                f.x = rng.next_f32() * w;
                f.y = -10.0 - rng.next_f32() * 140.0;
                f.vx = rng.centered() * 0.25;
                f.vy = (0.35 + rng.next_f32() * 0.95) * p.speed;
                f.r = rng.range(p.size_min, p.size_max);
            }
        }

        landed
    }

    /// Append `[x, y, r]` per flake.
    pub fn write_render(&self, out: &mut Vec<f32>) {
        out.clear();
        out.reserve(self.flakes.len() * 3);
        for f in &self.flakes {
            out.extend_from_slice(&[f.x, f.y, f.r]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SnowfallParams {
        SnowfallParams { count: 120, speed: 1.0, size_min: 0.9, size_max: 2.2 }
    }

    #[test]
    fn reset_places_flakes_in_viewport() {
        let mut rng = SimRng::with_seed(11);
        let mut snow = Snowfall::new(params());
        snow.reset(300.0, 200.0, &mut rng);

        assert_eq!(snow.flakes().len(), 120);
        for f in snow.flakes() {
            assert!((0.0..300.0).contains(&f.x));
            assert!((0.0..200.0).contains(&f.y));
            assert!(f.r >= 0.9 && f.r < 2.2);
        }
    }

    #[test]
    fn landing_flakes_build_the_pile() {
        let mut rng = SimRng::with_seed(11);
        let mut field = Heightfield::for_viewport(300.0, 200.0, 6.0, 160.0);
        let mut snow = Snowfall::new(params());
        snow.reset(300.0, 200.0, &mut rng);

        let mut landed = 0;
        for _ in 0..600 {
            landed += snow.update(16.67, 0.0, &mut field, &mut rng);
        }

        assert!(landed > 0);
        assert!(field.average_height() > 0.0);
        // Respawned flakes start above the viewport
        assert!(snow.flakes().iter().all(|f| f.y < 200.0));
    }

    #[test]
    fn flakes_wrap_horizontally() {
        let mut rng = SimRng::with_seed(2);
        let mut field = Heightfield::for_viewport(100.0, 10_000.0, 6.0, 160.0);
        let mut snow = Snowfall::new(SnowfallParams { count: 1, ..params() });
        snow.reset(100.0, 10_000.0, &mut rng);

        for _ in 0..400 {
            snow.update(40.0, 2.0, &mut field, &mut rng);
            let f = snow.flakes()[0];
            assert!(f.x >= -10.0 && f.x <= 110.0, "x = {}", f.x);
        }
    }

    #[test]
    fn render_buffer_is_tightly_packed() {
        let mut rng = SimRng::with_seed(4);
        let mut snow = Snowfall::new(SnowfallParams { count: 3, ..params() });
        snow.reset(50.0, 50.0, &mut rng);

        let mut out = vec![1.0; 99];
        snow.write_render(&mut out);
        assert_eq!(out.len(), 9);
        assert_eq!(out[3], snow.flakes()[1].x);
    }
}
