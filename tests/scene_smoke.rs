use snowdrift_engine::{PresetName, SnowOptions, SnowScene};

fn storm() -> SnowScene {
    SnowScene::new(r#"{"preset":"storm","intensity":1,"interactive":true}"#.to_string()).unwrap()
}

#[test]
fn json_constructor_applies_options() {
    let scene = storm();
    assert_eq!(scene.core().options().preset, PresetName::Storm);
    // Interactive wins over the named preset
    assert_eq!(scene.core().settings().shovel_reveal_depth, 18.0);
    assert!(scene.alive());
}

#[test]
fn snow_accumulates_within_bounds() {
    let mut scene = SnowScene::from_options(
        SnowOptions { preset: PresetName::Storm, intensity: 1.0, ..Default::default() },
        42,
    );

    let mut now = 0.0;
    for _ in 0..3000 {
        scene.step(now, 640.0, 360.0);
        now += 16.67;
    }

    let max_depth = scene.core().settings().pile_max_depth;
    let heights = scene.core().heights();
    assert_eq!(heights.len(), scene.heights_len());
    assert!(scene.average_depth() > 0.0);
    assert!(heights.iter().all(|&h| (0.0..=max_depth).contains(&h)));
    assert_eq!(scene.flakes_len(), scene.core().settings().flake_count * 3);
}

/// Edge column depths after two seconds of pile ticks on an even pile.
fn settled_edges(scroll: bool) -> (f32, f32) {
    let mut scene = SnowScene::from_options(SnowOptions::default(), 9);
    scene.step(0.0, 600.0, 400.0);
    for i in 0..100 {
        scene.deposit(i as f32 * 6.0 + 3.0, 20.0);
    }

    if scroll {
        scene.on_scroll(0.0, 0.0);
        let wind = scene.on_scroll(10_000.0, 16.0);
        assert!(wind > 0.0);
        assert_eq!(scene.wind(), wind);
    }

    let mut now = 16.0;
    for _ in 0..120 {
        now += 50.0;
        scene.step(now, 600.0, 400.0);
    }

    let h = scene.core().heights();
    (h[0], h[h.len() - 1])
}

#[test]
fn scroll_wind_pushes_the_pile_downwind() {
    let (still_left, still_right) = settled_edges(false);
    let (windy_left, windy_right) = settled_edges(true);

    assert!(windy_right - windy_left > still_right - still_left + 2.0);
}

#[test]
fn shovel_round_trip_through_facade() {
    let mut scene = storm();
    scene.step(0.0, 600.0, 400.0);
    for i in 0..100 {
        scene.deposit(i as f32 * 6.0 + 3.0, 150.0);
    }
    scene.step(16.0, 600.0, 400.0);
    assert!(scene.shovel_visible());

    scene.set_shovel_armed(true);
    scene.pointer_down(300.0, 250.0, 20.0);
    scene.step(33.0, 600.0, 400.0);
    assert!(scene.shovel_load_ratio() > 0.99);

    let thrown = scene.pointer_up(360.0, 200.0, 60.0);
    assert!((10..=44).contains(&thrown));
    assert_eq!(scene.debris_count(), thrown);

    scene.step(50.0, 600.0, 400.0);
    assert_eq!(scene.debris_len(), thrown as usize * 3);

    scene.destroy();
    assert!(!scene.alive());
    assert_eq!(scene.debris_count(), 0);
    assert_eq!(scene.heights_len(), 0);
}

#[test]
fn debris_config_updates_through_facade() {
    let mut scene = storm();
    scene.step(0.0, 600.0, 400.0);

    scene.set_debris_config(r#"{"allowSideExit":false,"maxBodies":12}"#.to_string()).unwrap();

    let core = scene.core();
    assert_eq!(core.settings().debris_cap, 12);
    let debris = core.debris().unwrap();
    assert_eq!(debris.boundary_count(), 3);
    assert_eq!(debris.config().max_bodies, 12);
}
