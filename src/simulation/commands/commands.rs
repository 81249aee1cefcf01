use crate::debris::{DebrisSink, SpawnRequest};

use super::render_extract::clear_render;
use super::SceneCore;

pub(super) fn on_scroll(scene: &mut SceneCore, scroll_y: f64, now_ms: f64) -> f32 {
    if !scene.alive {
        return 0.0;
    }
    scene.wind.on_scroll(scroll_y, now_ms);
    scene.wind.scaled(scene.settings.wind_strength)
}

pub(super) fn set_shovel_armed(scene: &mut SceneCore, armed: bool) {
    if !scene.alive {
        return;
    }
    scene.shovel.set_armed(armed);
}

pub(super) fn pointer_down(scene: &mut SceneCore, x: f32, y: f32, now_ms: f64) {
    if !scene.alive {
        return;
    }
    scene.shovel.move_to(x, y);
    if scene.revealed {
        scene.shovel.press(x, y, now_ms);
    }
}

pub(super) fn pointer_move(scene: &mut SceneCore, x: f32, y: f32) {
    if !scene.alive {
        return;
    }
    scene.shovel.move_to(x, y);
}

/// Release the shovel. A loaded shovel is emptied into one throw handed to
/// the debris sink.
pub(super) fn pointer_up(scene: &mut SceneCore, x: f32, y: f32, now_ms: f64) -> u32 {
    if !scene.alive {
        return 0;
    }
    if !scene.revealed {
        scene.shovel.move_to(x, y);
        scene.shovel.cancel();
        return 0;
    }

    let Some(request) = scene.shovel.release(x, y, now_ms) else {
        return 0;
    };
    match scene.debris.as_mut() {
        Some(debris) => {
            throw_into(debris, &request, now_ms);
            request.count
        }
        None => 0,
    }
}

fn throw_into(sink: &mut dyn DebrisSink, request: &SpawnRequest, now_ms: f64) {
    sink.throw(request, now_ms);
}

pub(super) fn pointer_cancel(scene: &mut SceneCore) {
    scene.shovel.cancel();
}

pub(super) fn deposit(scene: &mut SceneCore, x: f32, amount: f32) {
    if !scene.alive || amount.is_nan() || amount <= 0.0 {
        return;
    }
    if let Some(field) = scene.field.as_mut() {
        field.deposit(x, amount);
    }
}

pub(super) fn remove_rect(scene: &mut SceneCore, x: f32, y: f32, w: f32, h: f32, max_remove: f32) -> f32 {
    let rect_ok = [x, y, w, h].iter().all(|v| v.is_finite());
    if !scene.alive || !rect_ok || max_remove.is_nan() {
        return 0.0;
    }
    scene
        .field
        .as_mut()
        .map_or(0.0, |field| field.remove_rect(x, y, w, h, max_remove))
}

/// Release every physics body and drop the pile. Later calls are no-ops.
pub(super) fn destroy(scene: &mut SceneCore) {
    if !scene.alive {
        return;
    }
    scene.alive = false;

    if let Some(mut debris) = scene.debris.take() {
        debris.clear();
    }
    scene.field = None;
    scene.snowfall.clear();
    scene.shovel.set_armed(false);
    scene.revealed = false;
    clear_render(scene);

    console_log!("[snowdrift] scene destroyed after {} frames", scene.frame);
}
