use wasm_bindgen::prelude::*;

use crate::domain::SnowOptions;

use super::perf_stats::PerfStats;
use super::{FrameInput, SceneCore};

/// One snow effect instance, driven by the page's animation frame.
#[wasm_bindgen]
pub struct SnowScene {
    core: SceneCore,
}

#[wasm_bindgen]
impl SnowScene {
    /// Build a scene from JSON options (`{}` or `""` for defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(options_json: String) -> Result<SnowScene, JsValue> {
        let options = SnowOptions::from_json(&options_json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core: SceneCore::new(options) })
    }

    /// Advance one frame. Viewport size is sampled by the caller every frame.
    pub fn step(&mut self, now_ms: f64, width: f32, height: f32) {
        self.core.step(FrameInput { now_ms, width, height });
    }

    pub fn set_options(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .set_options_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Partial debris settings (`ttlMs`, `allowSideExit`, `maxBodies`, ...).
    pub fn set_debris_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .set_debris_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Feed `window.scrollY`. Returns the scene wind after the update.
    pub fn on_scroll(&mut self, scroll_y: f64, now_ms: f64) -> f32 {
        self.core.on_scroll(scroll_y, now_ms)
    }

    pub fn set_shovel_armed(&mut self, armed: bool) {
        self.core.set_shovel_armed(armed);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, now_ms: f64) {
        self.core.pointer_down(x, y, now_ms);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.core.pointer_move(x, y);
    }

    /// Returns how many chunks were thrown.
    pub fn pointer_up(&mut self, x: f32, y: f32, now_ms: f64) -> u32 {
        self.core.pointer_up(x, y, now_ms)
    }

    pub fn pointer_cancel(&mut self) {
        self.core.pointer_cancel();
    }

    pub fn deposit(&mut self, x: f32, amount: f32) {
        self.core.deposit(x, amount);
    }

    pub fn remove_rect(&mut self, x: f32, y: f32, w: f32, h: f32, max_remove: f32) -> f32 {
        self.core.remove_rect(x, y, w, h, max_remove)
    }

    /// Release all physics bodies. The scene does nothing afterwards.
    pub fn destroy(&mut self) {
        self.core.destroy();
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn alive(&self) -> bool { self.core.is_alive() }

    #[wasm_bindgen(getter)]
    pub fn wind(&self) -> f32 { self.core.wind() }

    #[wasm_bindgen(getter)]
    pub fn average_depth(&self) -> f32 { self.core.average_depth() }

    #[wasm_bindgen(getter)]
    pub fn shovel_visible(&self) -> bool { self.core.shovel_revealed() }

    #[wasm_bindgen(getter)]
    pub fn shovel_armed(&self) -> bool { self.core.shovel().is_armed() }

    #[wasm_bindgen(getter)]
    pub fn shovel_x(&self) -> f32 { self.core.shovel().position().x }

    #[wasm_bindgen(getter)]
    pub fn shovel_y(&self) -> f32 { self.core.shovel().position().y }

    #[wasm_bindgen(getter)]
    pub fn shovel_load_ratio(&self) -> f32 { self.core.shovel().load_ratio() }

    #[wasm_bindgen(getter)]
    pub fn debris_count(&self) -> u32 { self.core.debris_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 {
        self.core.column_meta().map_or(0, |m| m.cols as u32)
    }

    #[wasm_bindgen(getter)]
    pub fn column_width(&self) -> f32 {
        self.core.column_meta().map_or(0.0, |m| m.col_w)
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === Render buffers (views into wasm memory, valid until the next call) ===

    pub fn heights_ptr(&self) -> *const f32 { self.core.heights().as_ptr() }

    pub fn heights_len(&self) -> usize { self.core.heights().len() }

    /// `[x, y, r]` per flake
    pub fn flakes_ptr(&self) -> *const f32 { self.core.flakes_buffer().as_ptr() }

    pub fn flakes_len(&self) -> usize { self.core.flakes_buffer().len() }

    /// `[x, y, r]` per live debris body
    pub fn debris_ptr(&self) -> *const f32 { self.core.debris_buffer().as_ptr() }

    pub fn debris_len(&self) -> usize { self.core.debris_buffer().len() }
}

impl SnowScene {
    /// Native constructor for tests and embedders that already hold options.
    pub fn from_options(options: SnowOptions, seed: u32) -> Self {
        Self { core: SceneCore::with_seed(options, seed) }
    }

    pub fn core(&self) -> &SceneCore {
        &self.core
    }
}
