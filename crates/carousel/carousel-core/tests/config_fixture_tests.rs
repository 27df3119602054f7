use carousel_core::{Bias, CarouselConfig, Direction, Engine, Inputs};
use carousel_test_fixtures::configs;

fn load(name: &str) -> CarouselConfig {
    let raw = configs::json(name).expect("fixture should be readable");
    CarouselConfig::from_json(&raw).expect("fixture should parse")
}

#[test]
fn all_fixture_configs_parse_and_validate() {
    let keys = configs::keys();
    assert!(!keys.is_empty());
    for name in keys {
        let cfg = load(&name);
        cfg.validate()
            .unwrap_or_else(|e| panic!("fixture '{name}' failed validation: {e}"));
    }
}

#[test]
fn default_fixture_matches_builtin_defaults() {
    assert_eq!(load("default"), CarouselConfig::default());
}

#[test]
fn looped_fixture_drives_an_engine() {
    let cfg = load("looped");
    assert!(cfg.looping);
    let mut engine = Engine::new(10, cfg);
    assert_eq!(engine.current_index(), 4);
    let outputs = engine.update(0.016, Inputs::none());
    assert_eq!(outputs.placements.len(), 10);
    assert!(engine.can_go_next() && engine.can_go_prev());
}

#[test]
fn reversed_rtl_fixture_fields() {
    let cfg = load("reversed-rtl");
    assert!(cfg.reverse);
    assert!(cfg.autoplay);
    assert_eq!(cfg.autoplay_direction, Direction::Rtl);
    assert_eq!(cfg.autoplay_interval_ms, 1500);
}

#[test]
fn flat_one_directional_fixture_fields() {
    let cfg = load("flat-one-directional");
    assert_eq!(cfg.visible_count, 7);
    assert_eq!(cfg.bias, Bias::Right);
    assert!(cfg.disable_3d);
    assert!(cfg.one_directional);
    assert_eq!(cfg.space, Some(150.0));
    assert_eq!(cfg.swipe_threshold, 24.0);
}

#[test]
fn unknown_fixture_name_errors() {
    assert!(configs::json("no-such-config").is_err());
}
