//! Preset table and the safety clamp every resolved setting goes through.

use serde::{Deserialize, Serialize};

use crate::debris::{DebrisConfig, DebrisConfigPatch, DEFAULT_MAX_BODIES};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetName {
    #[default]
    Calm,
    Cozy,
    Storm,
    /// Reveals the shovel sooner and enables debris
    Interactive,
}

impl PresetName {
    pub const ALL: [PresetName; 4] = [
        PresetName::Calm,
        PresetName::Cozy,
        PresetName::Storm,
        PresetName::Interactive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PresetName::Calm => "calm",
            PresetName::Cozy => "cozy",
            PresetName::Storm => "storm",
            PresetName::Interactive => "interactive",
        }
    }
}

/// Fully resolved scene settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnowSettings {
    pub flake_count: usize,
    pub fall_speed: f32,
    pub flake_size: (f32, f32),
    pub wind_strength: f32,

    pub pile_max_depth: f32,
    pub pile_smoothness: f32,
    pub pile_fps: f32,

    pub shovel_scale: f32,
    pub shovel_reveal_depth: f32,

    pub debris_ttl_ms: f64,
    pub debris_restitution: f32,
    pub debris_air_drag: f32,
    pub debris_allow_side_exit: bool,
    pub debris_gravity: f32,
    pub debris_cap: usize,
}

const fn preset(
    flake_count: usize,
    fall_speed: f32,
    flake_size: (f32, f32),
    wind_strength: f32,
    pile: (f32, f32, f32),
    shovel_reveal_depth: f32,
    debris: (f64, f32, f32, f32),
) -> SnowSettings {
    SnowSettings {
        flake_count,
        fall_speed,
        flake_size,
        wind_strength,
        pile_max_depth: pile.0,
        pile_smoothness: pile.1,
        pile_fps: pile.2,
        shovel_scale: 1.0,
        shovel_reveal_depth,
        debris_ttl_ms: debris.0,
        debris_restitution: debris.1,
        debris_air_drag: debris.2,
        debris_allow_side_exit: true,
        debris_gravity: debris.3,
        debris_cap: DEFAULT_MAX_BODIES,
    }
}

// (depth, smoothness, fps) and (ttl, restitution, air drag, gravity)
const CALM: SnowSettings = preset(120, 0.60, (0.8, 1.8), 0.50, (160.0, 0.078, 20.0), 9999.0, (3800.0, 0.25, 0.03, 0.9));
const COZY: SnowSettings = preset(170, 0.90, (0.9, 2.2), 0.80, (200.0, 0.060, 30.0), 28.0, (4500.0, 0.35, 0.02, 1.0));
const STORM: SnowSettings = preset(240, 1.15, (1.0, 2.6), 1.15, (220.0, 0.058, 30.0), 22.0, (5000.0, 0.35, 0.02, 1.05));
const INTERACTIVE: SnowSettings = preset(220, 1.00, (0.9, 2.3), 1.00, (220.0, 0.060, 30.0), 18.0, (4500.0, 0.35, 0.02, 1.0));

pub const MAX_DEBRIS_CAP: usize = 1000;

#[inline]
fn clamp01(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// NaN falls back to the low end of the range.
#[inline]
fn clamp_num(v: f32, lo: f32, hi: f32) -> f32 {
    if v.is_nan() { lo } else { v.clamp(lo, hi) }
}

impl SnowSettings {
    pub fn base(name: PresetName) -> Self {
        match name {
            PresetName::Calm => CALM,
            PresetName::Cozy => COZY,
            PresetName::Storm => STORM,
            PresetName::Interactive => INTERACTIVE,
        }
    }

    /// Clamp every field into its safe range.
    pub fn apply_safety(self) -> Self {
        Self {
            flake_count: self.flake_count.clamp(60, 260),
            fall_speed: clamp_num(self.fall_speed, 0.45, 1.2),
            flake_size: (
                clamp_num(self.flake_size.0, 0.6, 1.6),
                clamp_num(self.flake_size.1, 1.2, 3.2),
            ),
            wind_strength: clamp_num(self.wind_strength, 0.0, 1.2),

            pile_max_depth: clamp_num(self.pile_max_depth, 80.0, 220.0),
            pile_smoothness: clamp_num(self.pile_smoothness, 0.055, 0.085),
            pile_fps: clamp_num(self.pile_fps, 15.0, 30.0),

            shovel_scale: clamp_num(self.shovel_scale, 0.85, 1.2),
            shovel_reveal_depth: clamp_num(self.shovel_reveal_depth, 12.0, 9999.0),

            debris_ttl_ms: if self.debris_ttl_ms.is_nan() { 2000.0 } else { self.debris_ttl_ms.clamp(2000.0, 7000.0) },
            debris_restitution: clamp_num(self.debris_restitution, 0.15, 0.55),
            debris_air_drag: clamp_num(self.debris_air_drag, 0.01, 0.06),
            debris_allow_side_exit: self.debris_allow_side_exit,
            debris_gravity: clamp_num(self.debris_gravity, 0.7, 1.2),
            debris_cap: self.debris_cap.clamp(1, MAX_DEBRIS_CAP),
        }
    }

    /// Scale the base preset by the 0..1 knobs, then clamp.
    pub fn morph(self, intensity: f32, speed: f32, wind: f32) -> Self {
        let (i, s, w) = (clamp01(intensity), clamp01(speed), clamp01(wind));
        Self {
            flake_count: (self.flake_count as f32 * (0.85 + 0.35 * i)).round() as usize,
            fall_speed: self.fall_speed * (0.9 + 0.25 * s),
            wind_strength: self.wind_strength * (0.9 + 0.25 * w),
            ..self
        }
        .apply_safety()
    }

    /// Debris physics settings derived from this preset.
    pub fn debris_config(&self) -> DebrisConfig {
        DebrisConfig {
            gravity_y: self.debris_gravity,
            restitution: self.debris_restitution,
            friction_air: self.debris_air_drag,
            ttl_ms: self.debris_ttl_ms,
            allow_side_exit: self.debris_allow_side_exit,
            max_bodies: self.debris_cap,
            ..DebrisConfig::default()
        }
    }

    /// Same as `debris_config` but as a patch for a live manager.
    pub fn debris_patch(&self) -> DebrisConfigPatch {
        let c = self.debris_config();
        DebrisConfigPatch {
            gravity_y: Some(c.gravity_y),
            restitution: Some(c.restitution),
            friction: None,
            friction_air: Some(c.friction_air),
            ttl_ms: Some(c.ttl_ms),
            allow_side_exit: Some(c.allow_side_exit),
            max_bodies: Some(c.max_bodies),
        }
    }

    /// Write a page debris patch over these settings. Friction has no preset
    /// field and is left to the manager.
    pub fn with_debris_patch(mut self, patch: &DebrisConfigPatch) -> Self {
        if let Some(v) = patch.gravity_y {
            self.debris_gravity = v;
        }
        if let Some(v) = patch.restitution {
            self.debris_restitution = v;
        }
        if let Some(v) = patch.friction_air {
            self.debris_air_drag = v;
        }
        if let Some(v) = patch.ttl_ms {
            self.debris_ttl_ms = v;
        }
        if let Some(v) = patch.allow_side_exit {
            self.debris_allow_side_exit = v;
        }
        if let Some(v) = patch.max_bodies {
            self.debris_cap = v;
        }
        self
    }
}

/// Clamp the fields of a patch coming straight from the page.
pub fn clamp_debris_patch(patch: &DebrisConfigPatch) -> DebrisConfigPatch {
    DebrisConfigPatch {
        gravity_y: patch.gravity_y.map(|v| clamp_num(v, 0.7, 1.2)),
        restitution: patch.restitution.map(|v| clamp_num(v, 0.15, 0.55)),
        friction: patch.friction.map(|v| clamp_num(v, 0.0, 1.0)),
        friction_air: patch.friction_air.map(|v| clamp_num(v, 0.01, 0.06)),
        ttl_ms: patch
            .ttl_ms
            .map(|v| if v.is_nan() { 2000.0 } else { v.clamp(2000.0, 7000.0) }),
        allow_side_exit: patch.allow_side_exit,
        max_bodies: patch.max_bodies.map(|v| v.clamp(1, MAX_DEBRIS_CAP)),
    }
}

pub fn preset_names() -> Vec<&'static str> {
    PresetName::ALL.iter().map(|p| p.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_presets_are_already_safe() {
        for name in PresetName::ALL {
            let base = SnowSettings::base(name);
            assert_eq!(base.apply_safety(), base, "{}", name.as_str());
        }
    }

    #[test]
    fn morph_scales_knobs() {
        let cozy = SnowSettings::base(PresetName::Cozy);
        let m = cozy.morph(1.0, 1.0, 1.0);

        assert_eq!(m.flake_count, 204); // round(170 * 1.2)
        assert!((m.fall_speed - 0.9 * 1.15).abs() < 1e-5);
        assert!((m.wind_strength - 0.8 * 1.15).abs() < 1e-5);
        assert_eq!(m.pile_max_depth, 200.0);
    }

    #[test]
    fn morph_clamps_after_scaling() {
        let storm = SnowSettings::base(PresetName::Storm);
        let m = storm.morph(5.0, 1.0, 1.0);

        assert_eq!(m.flake_count, 260);
        assert_eq!(m.fall_speed, 1.2);
        assert_eq!(m.wind_strength, 1.2);
    }

    #[test]
    fn zero_knobs_shrink_slightly() {
        let calm = SnowSettings::base(PresetName::Calm).morph(0.0, 0.0, f32::NAN);
        assert_eq!(calm.flake_count, 102);
        assert!((calm.fall_speed - 0.54).abs() < 1e-5);
        assert!((calm.wind_strength - 0.45).abs() < 1e-5);
    }

    #[test]
    fn safety_clamps_out_of_range_values() {
        let wild = SnowSettings {
            flake_count: 5000,
            pile_smoothness: 0.5,
            pile_fps: 120.0,
            debris_ttl_ms: 100.0,
            debris_cap: 0,
            shovel_scale: f32::NAN,
            ..SnowSettings::base(PresetName::Cozy)
        }
        .apply_safety();

        assert_eq!(wild.flake_count, 260);
        assert_eq!(wild.pile_smoothness, 0.085);
        assert_eq!(wild.pile_fps, 30.0);
        assert_eq!(wild.debris_ttl_ms, 2000.0);
        assert_eq!(wild.debris_cap, 1);
        assert_eq!(wild.shovel_scale, 0.85);
    }

    #[test]
    fn debris_config_follows_preset() {
        let c = SnowSettings::base(PresetName::Calm).debris_config();
        assert_eq!(c.ttl_ms, 3800.0);
        assert_eq!(c.restitution, 0.25);
        assert_eq!(c.friction_air, 0.03);
        assert_eq!(c.gravity_y, 0.9);
        assert_eq!(c.max_bodies, 200);
        assert_eq!(c.friction, 0.10);
    }

    #[test]
    fn page_patch_is_clamped() {
        let p = clamp_debris_patch(&DebrisConfigPatch {
            max_bodies: Some(0),
            ttl_ms: Some(1e9),
            ..Default::default()
        });
        assert_eq!(p.max_bodies, Some(1));
        assert_eq!(p.ttl_ms, Some(7000.0));
        assert_eq!(p.gravity_y, None);
    }

    #[test]
    fn names_round_trip_through_serde() {
        assert_eq!(preset_names(), vec!["calm", "cozy", "storm", "interactive"]);
        let p: PresetName = serde_json::from_str("\"storm\"").unwrap();
        assert_eq!(p, PresetName::Storm);
    }
}
