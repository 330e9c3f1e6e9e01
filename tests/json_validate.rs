use scrollstage::{SceneConfig, Stage, StageConfig, Viewport};

#[test]
fn scene_set_fixture_parses_and_lays_out() {
    let s = include_str!("data/two_pinned.json");
    let scenes: Vec<SceneConfig> = serde_json::from_str(s).unwrap();
    assert_eq!(scenes.len(), 3);

    let mut stage = Stage::new(Viewport::new(1000.0).unwrap(), StageConfig::default()).unwrap();
    for scene in scenes {
        scene.validate().unwrap();
        stage.register_scene(scene).unwrap();
    }

    let opening = stage.scene_range("opening").unwrap();
    assert_eq!((opening.start, opening.end), (0.0, 1000.0));
    let feature = stage.scene_range("feature").unwrap();
    assert_eq!((feature.start, feature.end), (1000.0, 2500.0));
    let outro = stage.scene_range("outro").unwrap();
    assert_eq!((outro.start, outro.end), (2500.0, 4500.0));
    assert_eq!(stage.max_scroll(), 4500.0);
}

#[test]
fn scene_set_roundtrips_through_json() {
    let s = include_str!("data/two_pinned.json");
    let scenes: Vec<SceneConfig> = serde_json::from_str(s).unwrap();
    let re = serde_json::to_string(&scenes).unwrap();
    let back: Vec<SceneConfig> = serde_json::from_str(&re).unwrap();
    assert_eq!(back.len(), scenes.len());
    assert_eq!(back[0].id, "opening");
    assert_eq!(back[0].timelines[0].timeline.segments.len(), 3);
}
