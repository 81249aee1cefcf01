use serde::{Deserialize, Serialize};

use super::presets::{PresetName, SnowSettings};

/// Options as passed in from the page. Every field is optional.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnowOptions {
    pub enabled: bool,
    pub preset: PresetName,
    /// 0..1
    pub intensity: f32,
    /// 0..1
    pub speed: f32,
    /// 0..1
    pub wind: f32,
    /// Shovel and debris physics
    pub interactive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_debris: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_side_exit: Option<bool>,
}

impl Default for SnowOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            preset: PresetName::Calm,
            intensity: 0.0,
            speed: 0.0,
            wind: 0.0,
            interactive: false,
            max_debris: None,
            allow_side_exit: None,
        }
    }
}

impl SnowOptions {
    /// Empty or whitespace input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// `interactive` overrides the chosen preset.
    pub fn preset_name(&self) -> PresetName {
        if self.interactive { PresetName::Interactive } else { self.preset }
    }

    pub fn resolve(&self) -> SnowSettings {
        let mut base = SnowSettings::base(self.preset_name());
        if let Some(cap) = self.max_debris {
            base.debris_cap = cap;
        }
        if let Some(open) = self.allow_side_exit {
            base.debris_allow_side_exit = open;
        }
        base.morph(self.intensity, self.speed, self.wind)
    }
}
