use crate::core::SimRng;
use crate::debris::{DebrisConfigPatch, DebrisManager};
use crate::domain::{SnowOptions, SnowSettings};
use crate::heightfield::{Heightfield, DEFAULT_COLUMN_WIDTH};
use crate::rigid_body_system::RigidBodySystem;
use crate::shovel::Shovel;
use crate::snowfall::{Snowfall, SnowfallParams};
use crate::wind::ScrollWind;

use super::perf_stats::PerfStats;
use super::{RenderBuffers, SceneCore};

pub(super) fn create_scene_core(options: SnowOptions, rng: SimRng) -> SceneCore {
    let settings = options.resolve();

    console_log!(
        "[snowdrift] scene created (preset {}, interactive {})",
        options.preset_name().as_str(),
        options.interactive
    );

    SceneCore {
        options,
        settings,
        debris_overrides: DebrisConfigPatch::default(),
        field: None,
        snowfall: Snowfall::new(snowfall_params(&settings)),
        shovel: Shovel::new(settings.shovel_scale),
        debris: None,
        wind: ScrollWind::new(),
        width: 0.0,
        height: 0.0,
        last_frame_ms: None,
        last_pile_ms: None,
        revealed: false,
        alive: true,
        frame: 0,
        rng,
        render: RenderBuffers {
            flakes: Vec::with_capacity(settings.flake_count * 3),
            debris: Vec::new(),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn snowfall_params(settings: &SnowSettings) -> SnowfallParams {
    SnowfallParams {
        count: settings.flake_count,
        speed: settings.fall_speed,
        size_min: settings.flake_size.0,
        size_max: settings.flake_size.1,
    }
}

/// Hard reset for a new viewport: fresh pile, rescattered flakes, debris
/// boundaries moved. Live debris survives.
pub(super) fn reset_viewport(scene: &mut SceneCore, width: f32, height: f32) {
    scene.width = width;
    scene.height = height;

    scene.field = Some(Heightfield::for_viewport(
        width,
        height,
        DEFAULT_COLUMN_WIDTH,
        scene.settings.pile_max_depth,
    ));
    scene.snowfall.reset(width, height, &mut scene.rng);
    scene.last_pile_ms = None;
    scene.revealed = false;
    scene.shovel.cancel();

    match scene.debris.as_mut() {
        Some(debris) => debris.resize(width, height),
        None => sync_debris(scene),
    }

    console_log!("[snowdrift] viewport {}x{}, pile reset", width, height);
}

/// Create or drop the debris manager to match the current options.
pub(super) fn sync_debris(scene: &mut SceneCore) {
    let wanted = scene.options.enabled && scene.options.interactive;

    if !wanted {
        if let Some(mut debris) = scene.debris.take() {
            debris.clear();
        }
        return;
    }

    if scene.debris.is_none() && scene.width > 0.0 && scene.height > 0.0 {
        let rng = SimRng::with_seed(scene.rng.next_u32());
        scene.debris = Some(DebrisManager::new(
            RigidBodySystem::new(),
            scene.settings.debris_config().merged(&scene.debris_overrides),
            scene.width,
            scene.height,
            rng,
        ));
    }
}
