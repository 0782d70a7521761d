use log::LevelFilter;
use visuals_core::config::{KEY_LOG, KEY_PAUSE_HIDDEN, KEY_ROTATION};
use visuals_core::{LoopConfig, RotationMode, VisualsError};

#[test]
fn defaults_preserve_page_behaviour() {
    let cfg = LoopConfig::default();
    assert_eq!(cfg.rotation, RotationMode::PerFrame);
    assert!(!cfg.pause_when_hidden);
    assert_eq!(cfg.log_level, LevelFilter::Info);
}

#[test]
fn parses_all_keys() {
    let (cfg, errors) = LoopConfig::from_pairs([
        (KEY_ROTATION, "time-scaled"),
        (KEY_PAUSE_HIDDEN, "true"),
        (KEY_LOG, "debug"),
    ]);
    assert!(errors.is_empty());
    assert_eq!(cfg.rotation, RotationMode::TimeScaled);
    assert!(cfg.pause_when_hidden);
    assert_eq!(cfg.log_level, LevelFilter::Debug);
}

#[test]
fn bare_flag_attribute_means_on() {
    let (cfg, errors) = LoopConfig::from_pairs([(KEY_PAUSE_HIDDEN, "")]);
    assert!(errors.is_empty());
    assert!(cfg.pause_when_hidden);
}

#[test]
fn bad_values_keep_defaults_and_are_reported() {
    let (cfg, errors) = LoopConfig::from_pairs([
        (KEY_ROTATION, "sideways"),
        (KEY_PAUSE_HIDDEN, "maybe"),
        (KEY_LOG, "loud"),
    ]);
    assert_eq!(cfg, LoopConfig::default());
    assert_eq!(errors.len(), 3);
    assert!(matches!(
        &errors[0],
        VisualsError::InvalidConfig { key, value } if key == "rotation" && value == "sideways"
    ));
}

#[test]
fn unknown_keys_are_ignored() {
    let mut cfg = LoopConfig::default();
    assert!(cfg.apply("theme", "dark").is_ok());
    assert_eq!(cfg, LoopConfig::default());
}

#[test]
fn later_values_win() {
    let (cfg, _) = LoopConfig::from_pairs([(KEY_ROTATION, "time"), (KEY_ROTATION, "per-frame")]);
    assert_eq!(cfg.rotation, RotationMode::PerFrame);
}

#[test]
fn rotation_mode_round_trips_through_display() {
    for mode in [RotationMode::PerFrame, RotationMode::TimeScaled] {
        assert_eq!(mode.to_string().parse::<RotationMode>(), Ok(mode));
    }
}
