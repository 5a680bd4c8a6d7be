//! Configuration validation and serialisation tests.

use glam::Vec3;
use pathwalk::{ConfigError, LocomotionConfig, LocomotionController};
use rstest::rstest;

#[rstest]
#[case::zero_speed(LocomotionConfig { speed: 0.0, ..LocomotionConfig::default() })]
#[case::negative_speed(LocomotionConfig { speed: -0.01, ..LocomotionConfig::default() })]
#[case::nan_speed(LocomotionConfig { speed: f32::NAN, ..LocomotionConfig::default() })]
fn invalid_speed_is_rejected(#[case] config: LocomotionConfig) {
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonPositiveSpeed { .. })
    ));
}

#[rstest]
#[case::zero_height(LocomotionConfig { jump_height: 0.0, ..LocomotionConfig::default() })]
#[case::negative_height(LocomotionConfig { jump_height: -10.0, ..LocomotionConfig::default() })]
fn invalid_jump_height_is_rejected(#[case] config: LocomotionConfig) {
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonPositiveJumpHeight { .. })
    ));
}

#[rstest]
#[case::zero_scale(LocomotionConfig { gravity_scale: 0.0, ..LocomotionConfig::default() })]
#[case::negative_scale(LocomotionConfig { gravity_scale: -5.0, ..LocomotionConfig::default() })]
fn invalid_gravity_scale_is_rejected(#[case] config: LocomotionConfig) {
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonPositiveGravityScale { .. })
    ));
}

#[test]
fn controller_construction_rejects_invalid_config_before_the_first_tick() {
    let config = LocomotionConfig {
        gravity_scale: 0.0,
        ..LocomotionConfig::default()
    };
    let result = LocomotionController::new(config);
    assert!(matches!(
        result,
        Err(ConfigError::NonPositiveGravityScale { gravity_scale }) if gravity_scale == 0.0
    ));
}

#[test]
fn partial_json_falls_back_to_defaults_per_field() {
    let config: LocomotionConfig =
        serde_json::from_str(r#"{ "speed": 0.02 }"#).expect("config should parse");
    assert_eq!(config.speed, 0.02);
    assert_eq!(
        config.jump_height,
        LocomotionConfig::default().jump_height
    );
    assert_eq!(config.lateral_offset, Vec3::ZERO);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn lateral_offset_parses_as_a_component_array() {
    let config: LocomotionConfig =
        serde_json::from_str(r#"{ "lateral_offset": [0.0, 1.5, -2.0] }"#)
            .expect("config should parse");
    assert_eq!(config.lateral_offset, Vec3::new(0.0, 1.5, -2.0));
}

#[test]
fn config_round_trips_through_json() {
    let config = LocomotionConfig {
        speed: 0.03,
        jump_height: 4.0,
        gravity_scale: 2.0,
        lateral_offset: Vec3::new(1.0, 0.0, 0.5),
    };
    let text = serde_json::to_string(&config).expect("config should serialise");
    let parsed: LocomotionConfig = serde_json::from_str(&text).expect("config should parse");
    assert_eq!(parsed, config);
}
