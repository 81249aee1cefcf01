//! Snowdrift Engine - accumulating snow effect in WASM
//!
//! Architecture:
//! - core/        - macros, console logging, RNG
//! - domain/      - presets and page options
//! - systems/     - heightfield, snowfall, shovel, rigid bodies, debris lifecycle
//! - simulation/  - per-instance scene, frame step, wasm facade

// Utils with safety and logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths for the systems
pub use systems::debris;
pub use systems::heightfield;
pub use systems::rigid_body;
pub use systems::rigid_body_system;
pub use systems::shovel;
pub use systems::snowfall;
pub use systems::wind;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization (browser only)
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("[snowdrift] engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Preset names accepted in the `preset` option, as a JSON array.
#[wasm_bindgen]
pub fn preset_names() -> String {
    serde_json::to_string(&domain::preset_names()).unwrap_or_else(|_| "[]".to_string())
}

// Re-export main types
pub use domain::{PresetName, SnowOptions, SnowSettings};
pub use simulation::{FrameInput, PerfStats, SceneCore, SnowScene};
