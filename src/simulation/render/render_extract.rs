use super::SceneCore;

/// Refresh the flake and debris buffers read by the page after each step.
pub(super) fn extract_render(scene: &mut SceneCore) {
    scene.snowfall.write_render(&mut scene.render.flakes);

    let out = &mut scene.render.debris;
    out.clear();
    if let Some(debris) = scene.debris.as_ref() {
        out.reserve(debris.live_count() * 3);
        for (pos, r) in debris.bodies() {
            out.extend_from_slice(&[pos.x, pos.y, r]);
        }
    }
}

/// Drop both buffers, e.g. on teardown.
pub(super) fn clear_render(scene: &mut SceneCore) {
    scene.render.flakes.clear();
    scene.render.debris.clear();
}
