use super::*;
use crate::domain::PresetName;

fn frame(now_ms: f64) -> FrameInput {
    FrameInput { now_ms, width: 600.0, height: 400.0 }
}

fn interactive() -> SceneCore {
    SceneCore::with_seed(SnowOptions { interactive: true, ..Default::default() }, 7)
}

/// Deep, even pile across the default 600-wide viewport.
fn fill(scene: &mut SceneCore, amount: f32) {
    for i in 0..100 {
        scene.deposit(i as f32 * 6.0 + 3.0, amount);
    }
}

/// Reveal the shovel, scoop a full load and throw it.
fn scoop_and_throw(scene: &mut SceneCore) -> u32 {
    scene.step(frame(0.0));
    fill(scene, 150.0);
    scene.step(frame(16.0));
    assert!(scene.shovel_revealed());

    scene.set_shovel_armed(true);
    scene.pointer_down(300.0, 250.0, 32.0);
    for k in 0..5 {
        scene.step(frame(48.0 + k as f64 * 16.0));
    }
    assert!(scene.shovel().load() > 1.0);

    scene.pointer_up(320.0, 240.0, 200.0)
}

#[test]
fn calls_before_first_frame_are_noops() {
    let mut scene = SceneCore::with_seed(SnowOptions::default(), 1);

    assert!(!scene.is_ready());
    scene.deposit(10.0, 5.0);
    assert_eq!(scene.remove_rect(0.0, 0.0, 50.0, 50.0, 10.0), 0.0);
    assert!(scene.heights().is_empty());
    assert_eq!(scene.pointer_up(10.0, 10.0, 0.0), 0);
}

#[test]
fn first_frame_builds_the_scene() {
    let mut scene = SceneCore::with_seed(SnowOptions::default(), 1);
    scene.step(frame(0.0));

    assert!(scene.is_ready());
    assert_eq!(scene.heights().len(), 100);
    let flakes = scene.settings().flake_count;
    assert_eq!(scene.snowfall().flakes().len(), flakes);
    assert_eq!(scene.flakes_buffer().len(), flakes * 3);
    assert_eq!(scene.frame(), 1);
    // Calm is not interactive: no physics at all
    assert!(scene.debris().is_none());
}

#[test]
fn resize_discards_the_pile() {
    let mut scene = SceneCore::with_seed(SnowOptions::default(), 1);
    scene.step(frame(0.0));
    fill(&mut scene, 200.0);
    assert!(scene.average_depth() > 100.0);

    scene.step(FrameInput { now_ms: 16.0, width: 800.0, height: 400.0 });

    assert_eq!(scene.heights().len(), 134);
    assert!(scene.average_depth() < 5.0);
}

#[test]
fn collapsed_viewport_skips_the_frame() {
    let mut scene = SceneCore::with_seed(SnowOptions::default(), 1);
    scene.step(FrameInput { now_ms: 0.0, width: 0.0, height: 400.0 });
    scene.step(FrameInput { now_ms: 16.0, width: f32::NAN, height: 400.0 });

    assert!(!scene.is_ready());
    assert_eq!(scene.frame(), 0);
}

#[test]
fn pile_relaxes_at_the_pile_tick_rate() {
    // Calm runs the pile at 20 Hz
    let mut scene = SceneCore::with_seed(SnowOptions::default(), 1);
    scene.enable_perf_metrics(true);

    scene.step(frame(0.0));
    assert!(scene.get_perf_stats().pile_ticked());

    scene.step(frame(10.0));
    assert!(!scene.get_perf_stats().pile_ticked());

    scene.step(frame(60.0));
    assert!(scene.get_perf_stats().pile_ticked());
}

#[test]
fn perf_stats_stay_zero_when_disabled() {
    let mut scene = SceneCore::with_seed(SnowOptions::default(), 1);
    scene.step(frame(0.0));
    let stats = scene.get_perf_stats();
    assert_eq!(stats.step_ms(), 0.0);
    assert_eq!(stats.columns(), 0);
}

#[test]
fn shovel_hidden_until_reveal_depth() {
    let mut scene = interactive();
    scene.step(frame(0.0));
    assert!(!scene.shovel_revealed());

    scene.set_shovel_armed(true);
    scene.pointer_down(300.0, 390.0, 0.0);
    assert!(!scene.shovel().is_dragging());
    assert_eq!(scene.pointer_up(300.0, 390.0, 50.0), 0);
}

#[test]
fn calm_preset_never_reveals_the_shovel() {
    let mut scene = SceneCore::with_seed(SnowOptions::default(), 1);
    scene.step(frame(0.0));
    fill(&mut scene, 150.0);
    scene.step(frame(16.0));

    assert!(!scene.shovel_revealed());
}

#[test]
fn scoop_and_throw_spawns_debris() {
    let mut scene = interactive();
    let thrown = scoop_and_throw(&mut scene);

    assert_eq!(thrown, 20); // full 140 load at scale 1
    assert_eq!(scene.debris_count(), 20);
    assert_eq!(scene.shovel().load(), 0.0);

    scene.step(frame(216.0));
    assert_eq!(scene.debris_buffer().len(), scene.debris_count() * 3);
}

#[test]
fn debris_config_json_lowers_the_cap() {
    let mut scene = interactive();
    scoop_and_throw(&mut scene);

    scene.set_debris_config_json(r#"{"maxBodies": 3}"#).unwrap();

    assert_eq!(scene.debris_count(), 3);
    assert_eq!(scene.settings().debris_cap, 3);
}

#[test]
fn rejected_json_leaves_config_untouched() {
    let mut scene = interactive();
    scene.step(frame(0.0));

    assert!(scene.set_debris_config_json("{\"maxBodies\": -1}").is_err());
    assert!(scene.set_options_json("{\"preset\": 3}").is_err());

    assert_eq!(scene.settings().debris_cap, 200);
    assert_eq!(scene.options().preset_name(), PresetName::Interactive);
}

#[test]
fn debris_patch_survives_option_changes() {
    let mut scene = interactive();
    scene.step(frame(0.0));
    scene.set_debris_config_json(r#"{"maxBodies": 3, "ttlMs": 5000}"#).unwrap();

    scene.set_options(SnowOptions { interactive: true, intensity: 0.8, ..Default::default() });

    assert_eq!(scene.settings().debris_cap, 3);
    assert_eq!(scene.settings().debris_ttl_ms, 5000.0);
    let config = *scene.debris().unwrap().config();
    assert_eq!((config.max_bodies, config.ttl_ms), (3, 5000.0));

    // A rebuilt manager starts from the same overrides
    scene.set_options(SnowOptions::default());
    assert!(scene.debris().is_none());
    scene.set_options(SnowOptions { interactive: true, ..Default::default() });
    assert_eq!(scene.debris().unwrap().config().max_bodies, 3);
}

#[test]
fn non_finite_rectangle_leaves_pile_untouched() {
    let mut scene = interactive();
    scene.step(frame(0.0));
    fill(&mut scene, 20.0);

    assert_eq!(scene.remove_rect(40.0, 0.0, 30.0, f32::NAN, 100.0), 0.0);
    assert_eq!(scene.remove_rect(f32::NAN, 0.0, 30.0, 400.0, 100.0), 0.0);
    scene.pointer_move(f32::NAN, f32::NAN);
    scene.step(frame(16.0));

    assert!(scene.average_depth().is_finite());
    assert!(scene.heights().iter().all(|h| h.is_finite()));
}

#[test]
fn column_meta_follows_viewport() {
    let mut scene = interactive();
    assert!(scene.column_meta().is_none());

    scene.step(frame(0.0));
    let meta = scene.column_meta().unwrap();
    assert_eq!(meta.cols, 100);
    assert_eq!(meta.col_w, 6.0);
    assert_eq!((meta.width, meta.height), (600.0, 400.0));
}

#[test]
fn resize_keeps_live_debris() {
    let mut scene = interactive();
    scoop_and_throw(&mut scene);
    let live = scene.debris_count();

    scene.step(FrameInput { now_ms: 216.0, width: 900.0, height: 500.0 });

    assert_eq!(scene.debris_count(), live);
    assert_eq!(scene.debris().map(|d| d.boundary_count()), Some(1));
}

#[test]
fn leaving_interactive_mode_releases_physics() {
    let mut scene = interactive();
    scoop_and_throw(&mut scene);

    scene.set_options(SnowOptions { preset: PresetName::Cozy, ..Default::default() });

    assert!(scene.debris().is_none());
    assert_eq!(scene.debris_count(), 0);
    // Cozy has a shallower pile: rebuilt from scratch
    assert_eq!(scene.field().map(|f| f.max_depth()), Some(200.0));
}

#[test]
fn debris_expires_after_ttl() {
    let mut scene = interactive();
    scoop_and_throw(&mut scene);
    assert!(scene.debris_count() > 0);

    // Interactive TTL is 4500 ms after the throw at t=200
    let mut now = 216.0;
    while now < 4800.0 {
        scene.step(frame(now));
        now += 16.0;
    }

    assert_eq!(scene.debris_count(), 0);
}

#[test]
fn scroll_wind_is_scaled_by_preset() {
    let mut scene = SceneCore::with_seed(SnowOptions::default(), 1);
    scene.on_scroll(0.0, 0.0);
    let w = scene.on_scroll(1.6, 32.0);

    // 1.0 raw times calm strength 0.45
    assert!((w - 0.45).abs() < 1e-5);
    assert_eq!(scene.wind(), w);
}

#[test]
fn disabled_scene_does_nothing() {
    let mut scene = SceneCore::with_seed(SnowOptions { enabled: false, ..Default::default() }, 1);
    scene.step(frame(0.0));

    assert_eq!(scene.frame(), 0);
    assert!(!scene.is_ready());
}

#[test]
fn destroy_stops_everything() {
    let mut scene = interactive();
    scoop_and_throw(&mut scene);
    let frames = scene.frame();

    scene.destroy();

    assert!(!scene.is_alive());
    assert!(scene.debris().is_none());
    assert!(scene.heights().is_empty());
    assert!(scene.flakes_buffer().is_empty());

    scene.step(frame(1000.0));
    scene.deposit(10.0, 5.0);
    scene.set_options(SnowOptions::default());
    assert_eq!(scene.frame(), frames);
    assert!(!scene.is_ready());
    assert_eq!(scene.options().preset_name(), PresetName::Interactive);
}
