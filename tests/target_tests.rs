// Host-side tests for scroll-driven target derivation.
// The main crate is wasm-only, so we mount the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::config::{AnimatorConfig, DeviceProfile, Viewport};
use crate::core::ease::Ease;
use crate::core::motion::MotionState;
use crate::core::target::{bounce_scale, ScrollSample, TargetDeriver};

const FRAME_MS: f64 = 16.0;

// vw = vh = 10px
fn viewport() -> Viewport {
    Viewport::new(1000.0, 1000.0)
}

fn desktop() -> AnimatorConfig {
    AnimatorConfig::for_profile(DeviceProfile::Desktop)
}

fn at(offset: f64) -> ScrollSample {
    ScrollSample {
        offset,
        page_ratio: 0.0,
    }
}

fn start_state(config: &AnimatorConfig, vp: &Viewport) -> MotionState {
    MotionState::new(0.0, config.base_y(vp), 0.0)
}

#[test]
fn bounce_scale_gates_on_horizontal_travel() {
    assert_eq!(bounce_scale(0.0, 30.0, 100.0), 0.0);
    assert_eq!(bounce_scale(30.0, 30.0, 100.0), 0.0);
    assert!((bounce_scale(65.0, 30.0, 100.0) - 0.5).abs() < 1e-12);
    assert_eq!(bounce_scale(100.0, 30.0, 100.0), 1.0);
    assert_eq!(bounce_scale(130.0, 30.0, 100.0), 1.0);

    let mut prev = 0.0;
    for h in 30..=100 {
        let s = bounce_scale(h as f64, 30.0, 100.0);
        assert!(s >= prev);
        prev = s;
    }
}

#[test]
fn progress_sets_clamped_horizontal_target() {
    let config = desktop();
    let vp = Viewport::new(100.0, 100.0);
    let mut d = TargetDeriver::new();
    let mut target = MotionState::default();

    d.set_progress(&mut target, 0.5, &config, &vp);
    assert!((target.x - 65.0).abs() < 1e-12);
    d.set_progress(&mut target, 1.7, &config, &vp);
    assert!((target.x - 130.0).abs() < 1e-12);
    d.set_progress(&mut target, -0.2, &config, &vp);
    assert_eq!(target.x, 0.0);
    d.set_progress(&mut target, f64::NAN, &config, &vp);
    assert_eq!(target.x, 0.0);
}

#[test]
fn page_ratio_drives_x_until_progress_arrives() {
    let config = desktop();
    let vp = viewport();
    let mut d = TargetDeriver::new();
    let mut target = start_state(&config, &vp);

    let sample = ScrollSample {
        offset: 0.0,
        page_ratio: 0.25,
    };
    d.derive(&mut target, 0.0, sample, &config, &vp);
    assert!((target.x - 1300.0 * 0.25).abs() < 1e-9);

    d.set_progress(&mut target, 0.1, &config, &vp);
    d.derive(&mut target, FRAME_MS, sample, &config, &vp);
    assert!((target.x - 130.0).abs() < 1e-9, "progress wins once it is positive");
}

#[test]
fn bounce_follows_phase_with_capped_amplitude() {
    let config = desktop();
    let vp = viewport();
    let mut d = TargetDeriver::new();
    let mut target = start_state(&config, &vp);
    d.set_progress(&mut target, 1.0, &config, &vp); // 130vw: full bounce

    // delta 50 -> amplitude 150px (under the 600px cap)
    d.derive(&mut target, 0.0, at(50.0), &config, &vp);
    let expected = -200.0 + (0.1_f64).sin() * 150.0;
    assert!((target.y - expected).abs() < 1e-9);
    assert!((d.phase() - 0.1).abs() < 1e-12);

    // delta 1000 -> amplitude capped at 60vh = 600px
    d.derive(&mut target, FRAME_MS, at(1050.0), &config, &vp);
    let expected = -200.0 + (0.2_f64).sin() * 600.0;
    assert!((target.y - expected).abs() < 1e-9);
}

#[test]
fn no_bounce_or_tilt_before_sprite_enters() {
    let config = desktop();
    let vp = viewport();
    let mut d = TargetDeriver::new();
    let mut target = start_state(&config, &vp);
    d.set_progress(&mut target, 0.2, &config, &vp); // 26vw < 30vw

    d.derive(&mut target, 0.0, at(80.0), &config, &vp);
    assert_eq!(target.y, config.base_y(&vp));
    assert_eq!(target.rotation_deg, 0.0);
    assert!(d.phase() > 0.0, "phase still advances while gated");
}

#[test]
fn tilt_is_clamped_and_signed() {
    let config = desktop();
    let vp = viewport();
    let mut d = TargetDeriver::new();
    let mut target = start_state(&config, &vp);
    d.set_progress(&mut target, 1.0, &config, &vp);

    d.derive(&mut target, 0.0, at(12.0), &config, &vp);
    assert!((target.rotation_deg - 12.0).abs() < 1e-12);
    d.derive(&mut target, FRAME_MS, at(112.0), &config, &vp);
    assert_eq!(target.rotation_deg, 20.0);
    d.derive(&mut target, 2.0 * FRAME_MS, at(12.0), &config, &vp);
    assert_eq!(target.rotation_deg, -20.0);

    let mobile = AnimatorConfig::for_profile(DeviceProfile::Mobile);
    let mut d = TargetDeriver::new();
    let mut target = start_state(&mobile, &vp);
    d.set_progress(&mut target, 1.0, &mobile, &vp);
    d.derive(&mut target, 0.0, at(-9.0), &mobile, &vp);
    assert!((target.rotation_deg + 3.0).abs() < 1e-12, "mobile divides by 3");
}

#[test]
fn idle_budget_starts_one_shot_ease_home() {
    let config = desktop();
    let vp = viewport();
    let base_y = config.base_y(&vp);
    let mut d = TargetDeriver::new();
    let mut target = start_state(&config, &vp);
    d.set_progress(&mut target, 1.0, &config, &vp);

    let mut now = 0.0;
    d.derive(&mut target, now, at(50.0), &config, &vp);
    let lifted = target.y;
    assert!(lifted != base_y);

    // within budget: target held
    for _ in 0..config.idle_frame_budget {
        now += FRAME_MS;
        d.derive(&mut target, now, at(50.0), &config, &vp);
        assert!(!d.is_easing_home());
        assert_eq!(target.y, lifted);
    }

    // first frame over budget starts the tween at its origin
    now += FRAME_MS;
    d.derive(&mut target, now, at(50.0), &config, &vp);
    assert!(d.is_easing_home());
    assert_eq!(target.y, lifted);
    let t0 = now;

    // halfway through: power3-out curve, not the chase filter
    d.derive(&mut target, t0 + config.idle_ease_ms / 2.0, at(50.0), &config, &vp);
    let k = Ease::Power3Out.apply(0.5);
    assert!((k - 0.9375).abs() < 1e-12);
    assert!((target.y - (lifted + (base_y - lifted) * k)).abs() < 1e-9);

    d.derive(&mut target, t0 + config.idle_ease_ms, at(50.0), &config, &vp);
    assert_eq!(target.y, base_y);
    assert!(!d.is_easing_home());

    // staying idle does not restart it
    d.derive(&mut target, t0 + 2.0 * config.idle_ease_ms, at(50.0), &config, &vp);
    assert!(!d.is_easing_home());
    assert_eq!(target.y, base_y);
}

#[test]
fn motion_cancels_ease_and_resets_idle_counter() {
    let config = desktop();
    let vp = viewport();
    let mut d = TargetDeriver::new();
    let mut target = start_state(&config, &vp);
    d.set_progress(&mut target, 1.0, &config, &vp);

    let mut now = 0.0;
    d.derive(&mut target, now, at(40.0), &config, &vp);
    for _ in 0..=config.idle_frame_budget {
        now += FRAME_MS;
        d.derive(&mut target, now, at(40.0), &config, &vp);
    }
    assert!(d.is_easing_home());

    now += FRAME_MS;
    d.derive(&mut target, now, at(60.0), &config, &vp);
    assert!(!d.is_easing_home());
    assert_eq!(d.idle_frames(), 0);
    let expected = config.base_y(&vp) + (0.2_f64).sin() * 60.0;
    assert!((target.y - expected).abs() < 1e-9);
}

#[test]
fn sub_unit_delta_counts_as_idle() {
    let config = desktop();
    let vp = viewport();
    let mut d = TargetDeriver::new();
    let mut target = start_state(&config, &vp);
    d.derive(&mut target, 0.0, at(0.6), &config, &vp);
    assert_eq!(d.idle_frames(), 1);
    assert_eq!(d.phase(), 0.0);
}

#[test]
fn degenerate_viewport_skips_frame_and_keeps_target() {
    let config = desktop();
    let vp = viewport();
    let mut d = TargetDeriver::new();
    let mut target = start_state(&config, &vp);
    d.set_progress(&mut target, 1.0, &config, &vp);
    d.derive(&mut target, 0.0, at(30.0), &config, &vp);
    let before = target;

    for zero in [Viewport::new(0.0, 800.0), Viewport::new(800.0, 0.0)] {
        assert!(!d.derive(&mut target, FRAME_MS, at(500.0), &config, &zero));
        assert_eq!(target, before);
    }
}

#[test]
fn idle_ease_lands_on_resized_rest_height() {
    let config = desktop();
    let vp = viewport();
    let mut d = TargetDeriver::new();
    let mut target = start_state(&config, &vp);
    d.set_progress(&mut target, 1.0, &config, &vp);

    let mut now = 0.0;
    d.derive(&mut target, now, at(50.0), &config, &vp);
    for _ in 0..=config.idle_frame_budget {
        now += FRAME_MS;
        d.derive(&mut target, now, at(50.0), &config, &vp);
    }
    assert!(d.is_easing_home());
    let t0 = now;

    // viewport doubles in height mid-ease
    let tall = Viewport::new(1000.0, 2000.0);
    d.derive(&mut target, t0 + config.idle_ease_ms / 2.0, at(50.0), &config, &tall);
    assert!(d.is_easing_home());
    d.derive(&mut target, t0 + config.idle_ease_ms, at(50.0), &config, &tall);
    assert!(!d.is_easing_home());
    assert_eq!(target.y, config.base_y(&tall));
    assert_eq!(target.y, -400.0);
}
