// Host-side tests for tuning constants, device profiles and config overrides.
// The main crate is wasm-only, so we mount the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::constants::*;
use crate::core::{AnimatorConfig, ConfigError, DeviceProfile, Viewport};

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Chase coefficients must be usable as-is
    assert!(CHASE_SPEED_DESKTOP > 0.0 && CHASE_SPEED_DESKTOP <= 1.0);
    assert!(CHASE_SPEED_MOBILE > 0.0 && CHASE_SPEED_MOBILE <= 1.0);

    // Mobile is the calmer profile
    assert!(CHASE_SPEED_MOBILE < CHASE_SPEED_DESKTOP);
    assert!(VELOCITY_GAIN_MOBILE < VELOCITY_GAIN_DESKTOP);
    assert!(MAX_AMPLITUDE_VH_MOBILE < MAX_AMPLITUDE_VH_DESKTOP);
    assert!(TILT_DIVISOR_MOBILE > TILT_DIVISOR_DESKTOP);

    // Bounce gate sits inside the horizontal travel
    assert!(BOUNCE_START_VW < BOUNCE_FULL_VW);
    assert!(BOUNCE_FULL_VW <= HORIZONTAL_RANGE_VW);

    // Trail
    assert!(TRAIL_CAPACITY >= 2 && TRAIL_CAPACITY <= TRAIL_CAPACITY_MAX);
    assert!(TRAIL_FADE_MS > 0.0);
    assert!(TRAIL_HEIGHT_RATIO > 0.0 && TRAIL_HEIGHT_RATIO <= 1.0);

    // Jet arc
    assert!(JET_DIP_END > JET_LEVEL_OFF_T && JET_DIP_END < 1.0);
    assert!(JET_ROT_CHASE > 0.0 && JET_ROT_CHASE <= 1.0);
    assert!(VIDEO_PLAY_MARGIN >= 0.0);
}

#[test]
fn device_profile_from_user_agent() {
    let cases = [
        ("Mozilla/5.0 (X11; Linux x86_64) Firefox/128.0", DeviceProfile::Desktop),
        ("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) Safari/605.1.15", DeviceProfile::Desktop),
        ("Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) Mobile/15E148", DeviceProfile::Mobile),
        ("Mozilla/5.0 (Linux; Android 14; Pixel 8) Chrome/126.0 Mobile", DeviceProfile::Mobile),
        ("Mozilla/5.0 (iPad; CPU OS 17_5 like Mac OS X)", DeviceProfile::Mobile),
        ("", DeviceProfile::Desktop),
    ];
    for (ua, expected) in cases {
        assert_eq!(DeviceProfile::from_user_agent(ua), expected, "{ua}");
    }
}

#[test]
fn profiles_pick_their_tunables() {
    let desktop = AnimatorConfig::for_profile(DeviceProfile::Desktop);
    let mobile = AnimatorConfig::for_profile(DeviceProfile::Mobile);
    assert_eq!(AnimatorConfig::default(), desktop);
    assert_eq!(desktop.chase_speed, 0.15);
    assert_eq!(mobile.chase_speed, 0.08);
    assert_eq!(mobile.tilt_divisor, 3.0);
    assert_eq!(desktop.horizontal_range_vw, mobile.horizontal_range_vw);
    assert!(desktop.validate().is_ok());
    assert!(mobile.validate().is_ok());

    let vp = Viewport::new(1200.0, 900.0);
    assert_eq!(desktop.base_y(&vp), -180.0);
    assert_eq!(desktop.horizontal_range(&vp), 1560.0);
    assert_eq!(mobile.max_amplitude(&vp), 180.0);
}

#[test]
fn viewport_units_and_degenerate_sizes() {
    let vp = Viewport::new(1200.0, 900.0);
    assert_eq!(vp.vw(), 12.0);
    assert_eq!(vp.vh(), 9.0);
    assert!(!vp.is_degenerate());
    assert!(Viewport::new(0.0, 900.0).is_degenerate());
    assert!(Viewport::new(1200.0, -1.0).is_degenerate());
    assert!(Viewport::new(f64::NAN, 900.0).is_degenerate());
}

#[test]
fn partial_override_keeps_profile_defaults() {
    let json = r#"{ "chase_speed": 0.3, "trail_rgb": [255, 0, 0], "unknown": true }"#;
    let config = AnimatorConfig::with_overrides(DeviceProfile::Mobile, json).expect("valid override");
    let mobile = AnimatorConfig::for_profile(DeviceProfile::Mobile);
    assert_eq!(config.chase_speed, 0.3);
    assert_eq!(config.trail_rgb, [255, 0, 0]);
    assert_eq!(config.velocity_gain, mobile.velocity_gain);
    assert_eq!(config.trail_capacity, mobile.trail_capacity);

    let empty = AnimatorConfig::with_overrides(DeviceProfile::Desktop, "{}").expect("empty override");
    assert_eq!(empty, AnimatorConfig::default());
}

#[test]
fn malformed_overrides_are_rejected() {
    for json in ["{ chase_speed: 0.3", "[0.3]", "42", r#"{ "trail_capacity": "many" }"#] {
        assert!(
            AnimatorConfig::with_overrides(DeviceProfile::Desktop, json).is_err(),
            "{json}"
        );
    }

    let err = AnimatorConfig::with_overrides(DeviceProfile::Desktop, r#"{ "chase_speed": 2.0 }"#)
        .expect_err("out of range");
    assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::ChaseSpeed(2.0)));
}

#[test]
fn validation_names_the_bad_field() {
    let base = AnimatorConfig::default();
    let cases: Vec<(AnimatorConfig, ConfigError)> = vec![
        (
            AnimatorConfig {
                chase_speed: 0.0,
                ..base.clone()
            },
            ConfigError::ChaseSpeed(0.0),
        ),
        (
            AnimatorConfig {
                fade_duration_ms: -1.0,
                ..base.clone()
            },
            ConfigError::FadeDuration(-1.0),
        ),
        (
            AnimatorConfig {
                trail_capacity: 1,
                ..base.clone()
            },
            ConfigError::TrailCapacity(1),
        ),
        (
            AnimatorConfig {
                trail_capacity: TRAIL_CAPACITY_MAX + 1,
                ..base.clone()
            },
            ConfigError::TrailCapacity(TRAIL_CAPACITY_MAX + 1),
        ),
        (
            AnimatorConfig {
                bounce_start_vw: 100.0,
                bounce_full_vw: 30.0,
                ..base.clone()
            },
            ConfigError::BounceThresholds {
                start: 100.0,
                full: 30.0,
            },
        ),
        (
            AnimatorConfig {
                tilt_divisor: 0.0,
                ..base.clone()
            },
            ConfigError::TiltDivisor,
        ),
        (
            AnimatorConfig {
                max_tilt_deg: -5.0,
                ..base.clone()
            },
            ConfigError::MaxTilt(-5.0),
        ),
        (
            AnimatorConfig {
                idle_ease_ms: 0.0,
                ..base.clone()
            },
            ConfigError::IdleEase(0.0),
        ),
    ];
    for (config, expected) in cases {
        assert_eq!(config.validate(), Err(expected));
    }

    let nan = AnimatorConfig {
        chase_speed: f64::NAN,
        ..base
    };
    assert!(matches!(nan.validate(), Err(ConfigError::ChaseSpeed(_))));

    let wild_tilt = AnimatorConfig {
        max_tilt_deg: f64::INFINITY,
        ..AnimatorConfig::default()
    };
    assert_eq!(wild_tilt.validate(), Err(ConfigError::MaxTilt(f64::INFINITY)));
}

#[test]
fn overrides_that_would_break_the_frame_loop_are_rejected() {
    let err = AnimatorConfig::with_overrides(DeviceProfile::Desktop, r#"{ "max_tilt_deg": -5 }"#)
        .expect_err("negative tilt bound");
    assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::MaxTilt(-5.0)));

    let err = AnimatorConfig::with_overrides(
        DeviceProfile::Desktop,
        r#"{ "trail_capacity": 18446744073709551615 }"#,
    )
    .expect_err("unbounded trail");
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::TrailCapacity(usize::MAX))
    );

    let flat = AnimatorConfig::with_overrides(DeviceProfile::Desktop, r#"{ "max_tilt_deg": 0 }"#)
        .expect("zero tilt bound is allowed");
    assert_eq!(flat.max_tilt_deg, 0.0);
}
