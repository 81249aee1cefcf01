use crate::debris::{DebrisConfigPatch, DebrisSink};
use crate::domain::{clamp_debris_patch, SnowOptions};

use super::init::{reset_viewport, snowfall_params, sync_debris};
use super::perf_stats::PerfStats;
use super::SceneCore;

pub(super) fn enable_perf_metrics(scene: &mut SceneCore, enabled: bool) {
    scene.perf_enabled = enabled;
    if !enabled {
        scene.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(scene: &SceneCore) -> PerfStats {
    scene.perf_stats.clone()
}

/// Resolve and apply new page options.
///
/// A different pile depth rebuilds the pile (same as a resize). Flake
/// parameters rescatter the flakes. Debris patches sent earlier by the page
/// still win over the preset, and the result is pushed to the live manager
/// without touching its bodies.
pub(super) fn set_options(scene: &mut SceneCore, options: SnowOptions) {
    if !scene.alive {
        return;
    }

    let prev = scene.settings;
    let next = options.resolve().with_debris_patch(&scene.debris_overrides);
    scene.options = options;
    scene.settings = next;

    let has_viewport = scene.width > 0.0 && scene.height > 0.0;

    if next.pile_max_depth != prev.pile_max_depth && has_viewport {
        let (w, h) = (scene.width, scene.height);
        reset_viewport(scene, w, h);
    } else if snowfall_params(&next) != snowfall_params(&prev) {
        scene.snowfall.reconfigure(snowfall_params(&next), &mut scene.rng);
    }

    if next.shovel_scale != prev.shovel_scale {
        scene.shovel.set_scale(next.shovel_scale);
    }

    sync_debris(scene);
    if let Some(debris) = scene.debris.as_mut() {
        debris.set_config(&next.debris_patch());
    }
}

pub(super) fn set_options_json(scene: &mut SceneCore, json: &str) -> Result<(), String> {
    let options = SnowOptions::from_json(json).map_err(|e| {
        console_warn!("[snowdrift] rejected options: {}", e);
        e
    })?;
    set_options(scene, options);
    Ok(())
}

/// Partial debris update from the page. Values are clamped first and kept as
/// overrides, so later option changes and a rebuilt manager start the same way.
pub(super) fn set_debris_config_json(scene: &mut SceneCore, json: &str) -> Result<(), String> {
    let patch = DebrisConfigPatch::from_json(json).map_err(|e| {
        console_warn!("[snowdrift] rejected debris config: {}", e);
        e
    })?;
    set_debris_config(scene, &patch);
    Ok(())
}

pub(super) fn set_debris_config(scene: &mut SceneCore, patch: &DebrisConfigPatch) {
    if !scene.alive || patch.is_empty() {
        return;
    }
    let patch = clamp_debris_patch(patch);

    scene.debris_overrides = scene.debris_overrides.overlay(&patch);
    scene.settings = scene.settings.with_debris_patch(&patch);

    if let Some(debris) = scene.debris.as_mut() {
        debris.configure(&patch);
    }
}
