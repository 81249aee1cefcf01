pub mod options;
pub mod presets;

pub use options::SnowOptions;
pub use presets::{clamp_debris_patch, preset_names, PresetName, SnowSettings};
