//! Snow scene - one mounted instance of the effect
//!
//! Owns the heightfield, the falling flakes, the shovel and the debris
//! manager for a single viewport. Nothing here is global: a page may mount
//! several scenes and tear each down on its own.
//!
//! Per frame, in order:
//! 1. viewport check (a size change rebuilds the pile from scratch)
//! 2. flakes fall and deposit
//! 3. shovel scoops, if revealed and held
//! 4. pile drift + smoothing, gated by the pile tick rate
//! 5. debris physics, TTL and cap eviction

use crate::core::SimRng;
use crate::debris::{DebrisConfigPatch, DebrisManager};
use crate::domain::{SnowOptions, SnowSettings};
use crate::heightfield::{ColumnMeta, Heightfield};
use crate::shovel::Shovel;
use crate::snowfall::Snowfall;
use crate::wind::ScrollWind;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::SnowScene;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Environment sampled by the page for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub now_ms: f64,
    pub width: f32,
    pub height: f32,
}

/// Flat `[x, y, r]` buffers handed to the renderer.
pub(crate) struct RenderBuffers {
    pub(crate) flakes: Vec<f32>,
    pub(crate) debris: Vec<f32>,
}

pub struct SceneCore {
    options: SnowOptions,
    settings: SnowSettings,
    // Clamped page debris patches, applied over every resolved preset
    debris_overrides: DebrisConfigPatch,

    field: Option<Heightfield>,
    snowfall: Snowfall,
    shovel: Shovel,
    debris: Option<DebrisManager>,
    wind: ScrollWind,

    // Viewport the field was built for; (0, 0) until the first frame
    width: f32,
    height: f32,

    last_frame_ms: Option<f64>,
    last_pile_ms: Option<f64>,
    revealed: bool,
    alive: bool,
    frame: u64,
    rng: SimRng,

    render: RenderBuffers,

    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SceneCore {
    pub fn new(options: SnowOptions) -> Self {
        init::create_scene_core(options, SimRng::from_clock())
    }

    /// Scene with an explicit RNG seed, for reproducible native runs.
    pub fn with_seed(options: SnowOptions, seed: u32) -> Self {
        init::create_scene_core(options, SimRng::with_seed(seed))
    }

    pub fn options(&self) -> &SnowOptions { &self.options }

    pub fn settings(&self) -> &SnowSettings { &self.settings }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn is_alive(&self) -> bool { self.alive }

    /// True once a viewport exists and the scene has not been destroyed.
    pub fn is_ready(&self) -> bool {
        self.alive && self.field.is_some()
    }

    pub fn field(&self) -> Option<&Heightfield> { self.field.as_ref() }

    pub fn snowfall(&self) -> &Snowfall { &self.snowfall }

    pub fn shovel(&self) -> &Shovel { &self.shovel }

    pub fn debris(&self) -> Option<&DebrisManager> { self.debris.as_ref() }

    pub fn wind(&self) -> f32 {
        self.wind.scaled(self.settings.wind_strength)
    }

    /// Column layout of the current pile, once the first frame has sized it.
    pub fn column_meta(&self) -> Option<ColumnMeta> {
        self.field.as_ref().map(Heightfield::meta)
    }

    pub fn average_depth(&self) -> f32 {
        self.field.as_ref().map_or(0.0, Heightfield::average_height)
    }

    /// Whether the shovel is currently shown and accepts input.
    pub fn shovel_revealed(&self) -> bool { self.revealed }

    pub fn debris_count(&self) -> usize {
        self.debris.as_ref().map_or(0, DebrisManager::live_count)
    }

    pub fn step(&mut self, input: FrameInput) {
        step::step(self, input);
    }

    // === SETTINGS ===

    pub fn set_options(&mut self, options: SnowOptions) {
        settings::set_options(self, options);
    }

    pub fn set_options_json(&mut self, json: &str) -> Result<(), String> {
        settings::set_options_json(self, json)
    }

    pub fn set_debris_config_json(&mut self, json: &str) -> Result<(), String> {
        settings::set_debris_config_json(self, json)
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === INPUT ===

    pub fn on_scroll(&mut self, scroll_y: f64, now_ms: f64) -> f32 {
        commands::on_scroll(self, scroll_y, now_ms)
    }

    pub fn set_shovel_armed(&mut self, armed: bool) {
        commands::set_shovel_armed(self, armed);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, now_ms: f64) {
        commands::pointer_down(self, x, y, now_ms);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        commands::pointer_move(self, x, y);
    }

    /// Returns the number of chunks thrown.
    pub fn pointer_up(&mut self, x: f32, y: f32, now_ms: f64) -> u32 {
        commands::pointer_up(self, x, y, now_ms)
    }

    pub fn pointer_cancel(&mut self) {
        commands::pointer_cancel(self);
    }

    /// Direct surface access for the page: deposit at x.
    pub fn deposit(&mut self, x: f32, amount: f32) {
        commands::deposit(self, x, amount);
    }

    /// Direct surface access for the page: scoop a rectangle.
    pub fn remove_rect(&mut self, x: f32, y: f32, w: f32, h: f32, max_remove: f32) -> f32 {
        commands::remove_rect(self, x, y, w, h, max_remove)
    }

    pub fn destroy(&mut self) {
        commands::destroy(self);
    }

    // === RENDER ===

    pub fn heights(&self) -> &[f32] {
        self.field.as_ref().map(Heightfield::heights).unwrap_or(&[])
    }

    pub fn flakes_buffer(&self) -> &[f32] { &self.render.flakes }

    pub fn debris_buffer(&self) -> &[f32] { &self.render.debris }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
