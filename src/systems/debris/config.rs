use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_BODIES: usize = 200;

/// Live debris physics settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DebrisConfig {
    /// Gravity multiplier (1.0 = nominal)
    pub gravity_y: f32,
    pub restitution: f32,
    pub friction: f32,
    /// Air drag per 60 Hz frame
    pub friction_air: f32,
    /// Time-to-live of a thrown body
    pub ttl_ms: f64,
    /// When false, walls keep debris inside the viewport horizontally
    pub allow_side_exit: bool,
    /// Hard ceiling on live dynamic bodies
    pub max_bodies: usize,
}

impl Default for DebrisConfig {
    fn default() -> Self {
        Self {
            gravity_y: 1.0,
            restitution: 0.35,
            friction: 0.10,
            friction_air: 0.02,
            ttl_ms: 2500.0,
            allow_side_exit: true,
            max_bodies: DEFAULT_MAX_BODIES,
        }
    }
}

impl DebrisConfig {
    /// Copy of `self` with every field present in `patch` replaced.
    pub fn merged(&self, patch: &DebrisConfigPatch) -> Self {
        Self {
            gravity_y: patch.gravity_y.unwrap_or(self.gravity_y),
            restitution: patch.restitution.unwrap_or(self.restitution),
            friction: patch.friction.unwrap_or(self.friction),
            friction_air: patch.friction_air.unwrap_or(self.friction_air),
            ttl_ms: patch.ttl_ms.unwrap_or(self.ttl_ms),
            allow_side_exit: patch.allow_side_exit.unwrap_or(self.allow_side_exit),
            max_bodies: patch.max_bodies.unwrap_or(self.max_bodies),
        }
    }
}

/// Partial update for `DebrisConfig`; absent fields are left alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DebrisConfigPatch {
    pub gravity_y: Option<f32>,
    pub restitution: Option<f32>,
    pub friction: Option<f32>,
    pub friction_air: Option<f32>,
    pub ttl_ms: Option<f64>,
    pub allow_side_exit: Option<bool>,
    pub max_bodies: Option<usize>,
}

impl DebrisConfigPatch {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy of `self` with every field present in `newer` taking over.
    pub fn overlay(&self, newer: &Self) -> Self {
        Self {
            gravity_y: newer.gravity_y.or(self.gravity_y),
            restitution: newer.restitution.or(self.restitution),
            friction: newer.friction.or(self.friction),
            friction_air: newer.friction_air.or(self.friction_air),
            ttl_ms: newer.ttl_ms.or(self.ttl_ms),
            allow_side_exit: newer.allow_side_exit.or(self.allow_side_exit),
            max_bodies: newer.max_bodies.or(self.max_bodies),
        }
    }
}
