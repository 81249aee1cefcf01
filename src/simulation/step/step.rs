use crate::heightfield::Heightfield;
use crate::shovel::Shovel;

use super::init::reset_viewport;
use super::render_extract::extract_render;
use super::{FrameInput, PerfTimer, SceneCore};

/// Nominal frame length used for the very first frame.
const FIRST_FRAME_MS: f64 = 1000.0 / 60.0;

pub(super) fn step(scene: &mut SceneCore, input: FrameInput) {
    if !scene.alive || !scene.options.enabled {
        return;
    }

    let FrameInput { now_ms, width, height } = input;
    // Hidden or collapsed viewport: skip the frame entirely
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return;
    }
    if scene.field.is_none() || width != scene.width || height != scene.height {
        reset_viewport(scene, width, height);
    }

    let perf_on = scene.perf_enabled;
    if perf_on {
        scene.perf_stats.reset();
    }
    let step_timer = PerfTimer::start_if(perf_on);

    let dt = match scene.last_frame_ms {
        Some(last) => (now_ms - last).max(0.0),
        None => FIRST_FRAME_MS,
    };
    scene.last_frame_ms = Some(now_ms);
    let wind = scene.wind.scaled(scene.settings.wind_strength);

    let Some(field) = scene.field.as_mut() else {
        return;
    };

    // Flakes land before the pile relaxes so fresh snow joins this tick's pass
    let t0 = PerfTimer::start_if(perf_on);
    let landed = scene.snowfall.update(dt as f32, wind, field, &mut scene.rng);
    if let Some(t) = t0 {
        scene.perf_stats.flakes_ms = t.elapsed_ms();
        scene.perf_stats.flakes_landed = landed;
    }

    let t0 = PerfTimer::start_if(perf_on);
    scene.revealed = scene.options.interactive && field.average_height() >= scene.settings.shovel_reveal_depth;
    let scooped = scoop_if_revealed(&mut scene.shovel, scene.revealed, field);
    if let Some(t) = t0 {
        scene.perf_stats.shovel_ms = t.elapsed_ms();
        scene.perf_stats.scooped = scooped;
    }

    let pile_interval = 1000.0 / scene.settings.pile_fps as f64;
    let pile_due = scene
        .last_pile_ms
        .map_or(true, |last| now_ms - last >= pile_interval);
    if pile_due {
        let t0 = PerfTimer::start_if(perf_on);
        field.drift(wind);
        field.smooth(scene.settings.pile_smoothness);
        scene.last_pile_ms = Some(now_ms);
        if let Some(t) = t0 {
            scene.perf_stats.pile_ms = t.elapsed_ms();
            scene.perf_stats.pile_ticked = true;
        }
    }

    if let Some(debris) = scene.debris.as_mut() {
        let t0 = PerfTimer::start_if(perf_on);
        let report = debris.step(dt as f32, now_ms);
        if let Some(t) = t0 {
            let stats = &mut scene.perf_stats;
            stats.debris_ms = t.elapsed_ms();
            stats.debris_expired = report.expired;
            stats.debris_escaped = report.escaped;
            stats.debris_evicted = report.evicted;
            stats.debris_live = debris.live_count() as u32;
        }
    }

    let t0 = PerfTimer::start_if(perf_on);
    extract_render(scene);
    if let Some(t) = t0 {
        scene.perf_stats.render_ms = t.elapsed_ms();
    }

    scene.frame += 1;

    if let Some(t) = step_timer {
        let stats = &mut scene.perf_stats;
        stats.step_ms = t.elapsed_ms();
        if let Some(field) = scene.field.as_ref() {
            stats.columns = field.cols() as u32;
            stats.average_depth = field.average_height();
        }
    }
}

/// Unrevealed shovels drop the drag so a held pointer does not resume
/// scooping the moment the pile crosses the reveal depth.
fn scoop_if_revealed(shovel: &mut Shovel, revealed: bool, field: &mut Heightfield) -> f32 {
    if !revealed {
        shovel.cancel();
        return 0.0;
    }
    shovel.scoop(field)
}
