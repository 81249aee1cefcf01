use snowdrift_engine::{SnowOptions, SnowScene};

#[test]
fn perf_smoke_step() {
    let mut scene = SnowScene::from_options(SnowOptions { interactive: true, ..Default::default() }, 3);
    scene.enable_perf_metrics(true);

    for i in 0..120 {
        scene.step(i as f64 * 16.67, 1280.0, 720.0);
    }

    let stats = scene.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.columns(), 214); // ceil(1280 / 6)
    assert!(stats.flakes_landed() <= 260);
}
