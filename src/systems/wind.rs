//! Wind from page scrolling
//!
//! Scroll velocity (units per ms) is mapped to a wind value in -2..2. The
//! value holds until the next scroll event.

/// Shortest interval credited between two scroll samples.
const MIN_SCROLL_DT_MS: f64 = 16.0;
const SCROLL_GAIN: f64 = 20.0;
pub const WIND_LIMIT: f32 = 2.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollWind {
    last: Option<(f64, f64)>,
    value: f32,
}

impl ScrollWind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll position. The first sample only sets the baseline.
    pub fn on_scroll(&mut self, scroll_y: f64, now_ms: f64) -> f32 {
        if let Some((last_y, last_t)) = self.last {
            let dt = (now_ms - last_t).max(MIN_SCROLL_DT_MS);
            let v = (scroll_y - last_y) / dt;
            self.value = (v * SCROLL_GAIN).clamp(-WIND_LIMIT as f64, WIND_LIMIT as f64) as f32;
        }
        self.last = Some((scroll_y, now_ms));
        self.value
    }

    /// Scene wind for a preset of the given strength.
    pub fn scaled(&self, strength: f32) -> f32 {
        (self.value * strength).clamp(-WIND_LIMIT, WIND_LIMIT)
    }
}
