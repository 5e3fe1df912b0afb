//! Configuration Tests
//!
//! Tests for:
//! - AnimationConfig defaults (demo sequence, Catmull-Rom, fixed angles, 0.02 step)
//! - JSON loading with partial fields and validation
//! - File loading error paths

use keyframe::animation::{
    DEFAULT_STEP, KeyframeSequence, OrientationInterpolator, OrientationMode, QuaternionPolicy,
    SplineMode,
};
use keyframe::{AnimationConfig, AnimationError, Animator};

#[test]
fn default_config_plays_demo_sequence() {
    let config = AnimationConfig::default();
    assert_eq!(config.keyframes, KeyframeSequence::demo());
    assert_eq!(config.keyframes.len(), 4);
    assert_eq!(config.spline, SplineMode::CatmullRom);
    assert_eq!(config.orientation, OrientationMode::FixedAngles);
    assert_eq!(config.interpolator, OrientationInterpolator::ComponentWise);
    assert_eq!(config.quaternion_policy, QuaternionPolicy::Propagate);
    assert_eq!(config.step, DEFAULT_STEP);
}

#[test]
fn empty_json_object_yields_defaults() {
    let config = AnimationConfig::from_json_str("{}").unwrap();
    assert_eq!(config, AnimationConfig::default());
}

#[test]
fn json_overrides_modes_and_keyframes() {
    let source = r#"{
        "keyframes": [
            { "position": [0, 0, 0], "orientation": [0, 0, 0, 1] },
            { "position": [1, 0, 0], "orientation": [0, 0, 0, 1] },
            { "position": [1, 1, 0], "orientation": [0, 0, 0, 1] },
            { "position": [0, 1, 0], "orientation": [0, 0, 0, 1] },
            { "position": [0, 0, 1], "orientation": [0, 0, 0, 1] }
        ],
        "spline": "b_spline",
        "orientation": "quaternion",
        "interpolator": "slerp",
        "quaternion_policy": "clamp",
        "step": 0.1
    }"#;

    let config = AnimationConfig::from_json_str(source).unwrap();
    assert_eq!(config.keyframes.len(), 5);
    assert_eq!(config.keyframes[2].position, [1.0, 1.0, 0.0]);
    assert_eq!(config.spline, SplineMode::BSpline);
    assert_eq!(config.orientation, OrientationMode::Quaternion);
    assert_eq!(config.interpolator, OrientationInterpolator::Slerp);
    assert_eq!(config.quaternion_policy, QuaternionPolicy::Clamp);
    assert!((config.step - 0.1).abs() < 1e-6);

    let animator = Animator::from_config(&config).unwrap();
    assert_eq!(animator.track().keyframes().len(), 5);
    assert_eq!(animator.clock().len(), 5);
}

#[test]
fn json_with_too_few_keyframes_is_rejected() {
    let source = r#"{
        "keyframes": [
            { "position": [0, 0, 0], "orientation": [0, 0, 0, 1] },
            { "position": [1, 0, 0], "orientation": [0, 0, 0, 1] },
            { "position": [1, 1, 0], "orientation": [0, 0, 0, 1] }
        ]
    }"#;

    let err = AnimationConfig::from_json_str(source).unwrap_err();
    assert!(matches!(err, AnimationError::JsonError(_)), "got {err:?}");
    assert!(err.to_string().contains("at least 4"), "got {err}");
}

#[test]
fn unknown_spline_name_is_rejected() {
    let err = AnimationConfig::from_json_str(r#"{ "spline": "hermite" }"#).unwrap_err();
    assert!(matches!(err, AnimationError::JsonError(_)));
}

#[test]
fn config_survives_json_serialization() {
    let config = AnimationConfig::default()
        .with_spline(SplineMode::BSpline)
        .with_orientation(OrientationMode::Quaternion)
        .with_step(0.05);

    let json = config.to_json_string().unwrap();
    assert!(json.contains("\"b_spline\""));
    assert_eq!(AnimationConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn config_loads_from_file() {
    let path = std::env::temp_dir().join(format!("keyframe_config_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "spline": "b_spline" }"#).unwrap();

    let config = AnimationConfig::from_json_file(&path);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.unwrap().spline, SplineMode::BSpline);
}

#[test]
fn missing_config_file_is_an_io_error() {
    let path = std::env::temp_dir().join("keyframe_config_does_not_exist.json");
    let err = AnimationConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, AnimationError::IoError(_)));
}
