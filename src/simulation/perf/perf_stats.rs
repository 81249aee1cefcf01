use wasm_bindgen::prelude::*;

/// Timings and counters of the last step. All zero while perf is disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) flakes_ms: f64,
    pub(super) shovel_ms: f64,
    pub(super) pile_ms: f64,
    pub(super) debris_ms: f64,
    pub(super) render_ms: f64,
    pub(super) flakes_landed: u32,
    pub(super) scooped: f32,
    pub(super) pile_ticked: bool,
    pub(super) debris_live: u32,
    pub(super) debris_expired: u32,
    pub(super) debris_escaped: u32,
    pub(super) debris_evicted: u32,
    pub(super) columns: u32,
    pub(super) average_depth: f32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn flakes_ms(&self) -> f64 { self.flakes_ms }
    #[wasm_bindgen(getter)]
    pub fn shovel_ms(&self) -> f64 { self.shovel_ms }
    #[wasm_bindgen(getter)]
    pub fn pile_ms(&self) -> f64 { self.pile_ms }
    #[wasm_bindgen(getter)]
    pub fn debris_ms(&self) -> f64 { self.debris_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn flakes_landed(&self) -> u32 { self.flakes_landed }
    #[wasm_bindgen(getter)]
    pub fn scooped(&self) -> f32 { self.scooped }
    #[wasm_bindgen(getter)]
    pub fn pile_ticked(&self) -> bool { self.pile_ticked }
    #[wasm_bindgen(getter)]
    pub fn debris_live(&self) -> u32 { self.debris_live }
    #[wasm_bindgen(getter)]
    pub fn debris_expired(&self) -> u32 { self.debris_expired }
    #[wasm_bindgen(getter)]
    pub fn debris_escaped(&self) -> u32 { self.debris_escaped }
    #[wasm_bindgen(getter)]
    pub fn debris_evicted(&self) -> u32 { self.debris_evicted }
    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 { self.columns }
    #[wasm_bindgen(getter)]
    pub fn average_depth(&self) -> f32 { self.average_depth }
}
