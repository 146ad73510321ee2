use sprite_runner::config::GameConfig;

#[test]
fn shipped_config_asset_parses() {
    let cfg = GameConfig::load_from_file("assets/config/game.ron")
        .expect("assets/config/game.ron must parse");
    assert_eq!(cfg.movement.ground_group, 0b0010);
    assert!(cfg.level.platforms.len() >= 2);
}

#[test]
fn defaults_match_shipped_movement_tuning() {
    let shipped = GameConfig::load_from_file("assets/config/game.ron").expect("parse asset");
    let defaults = GameConfig::default();
    assert_eq!(shipped.movement.run_speed, defaults.movement.run_speed);
    assert_eq!(shipped.movement.jump_height, defaults.movement.jump_height);
    assert_eq!(shipped.gravity, defaults.gravity);
}

#[test]
fn garbage_config_reports_parse_error() {
    let mut path = std::env::temp_dir();
    path.push("sprite_runner_garbage_config.ron");
    std::fs::write(&path, "(window: (width: \"not a number\"))").unwrap();
    let err = GameConfig::load_from_file(&path).unwrap_err();
    assert!(err.contains("parse RON"), "unexpected error: {err}");
}
