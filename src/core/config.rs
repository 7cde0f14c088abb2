//! Device profile, viewport and the tunables of the chase animator.
//!
//! Defaults come from [`super::constants`]; a host page may override any
//! field through a partial JSON document (see [`AnimatorConfig::with_overrides`]).

use super::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse device class. Mobile gets calmer motion and a shorter trigger range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceProfile {
    Desktop,
    Mobile,
}

impl DeviceProfile {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        let mobile = ["mobi", "android", "iphone", "ipad", "ipod"]
            .iter()
            .any(|token| ua.contains(token));
        if mobile {
            DeviceProfile::Mobile
        } else {
            DeviceProfile::Desktop
        }
    }

    #[inline]
    pub fn is_mobile(self) -> bool {
        self == DeviceProfile::Mobile
    }
}

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// 1% of the viewport width.
    #[inline]
    pub fn vw(&self) -> f64 {
        self.width / 100.0
    }

    /// 1% of the viewport height.
    #[inline]
    pub fn vh(&self) -> f64 {
        self.height / 100.0
    }

    /// A zero-sized (or NaN) viewport cannot resolve viewport units.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("chase speed must be in (0, 1], got {0}")]
    ChaseSpeed(f64),
    #[error("trail fade duration must be positive, got {0} ms")]
    FadeDuration(f64),
    #[error("trail capacity must be 2..={max} points, got {0}", max = TRAIL_CAPACITY_MAX)]
    TrailCapacity(usize),
    #[error("bounce thresholds must satisfy start < full, got {start} >= {full}")]
    BounceThresholds { start: f64, full: f64 },
    #[error("tilt divisor must be finite and non-zero")]
    TiltDivisor,
    #[error("max tilt must be finite and non-negative, got {0} deg")]
    MaxTilt(f64),
    #[error("idle ease duration must be positive, got {0} ms")]
    IdleEase(f64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    pub chase_speed: f64,
    pub velocity_gain: f64,
    pub max_amplitude_vh: f64,
    pub tilt_divisor: f64,
    pub max_tilt_deg: f64,
    pub base_y_vh: f64,
    pub horizontal_range_vw: f64,
    pub progress_range_vh: f64,
    pub bounce_start_vw: f64,
    pub bounce_full_vw: f64,
    pub phase_step: f64,
    pub negligible_delta: f64,
    pub idle_frame_budget: u32,
    pub idle_ease_ms: f64,
    pub trail_capacity: usize,
    pub fade_duration_ms: f64,
    pub min_segment_length: f64,
    pub min_stroke_width: f64,
    pub stroke_height_ratio: f64,
    pub trail_rgb: [u8; 3],
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self::for_profile(DeviceProfile::Desktop)
    }
}

impl AnimatorConfig {
    pub fn for_profile(profile: DeviceProfile) -> Self {
        let mobile = profile.is_mobile();
        let pick = |desktop: f64, mobile_value: f64| if mobile { mobile_value } else { desktop };
        Self {
            chase_speed: pick(CHASE_SPEED_DESKTOP, CHASE_SPEED_MOBILE),
            velocity_gain: pick(VELOCITY_GAIN_DESKTOP, VELOCITY_GAIN_MOBILE),
            max_amplitude_vh: pick(MAX_AMPLITUDE_VH_DESKTOP, MAX_AMPLITUDE_VH_MOBILE),
            tilt_divisor: pick(TILT_DIVISOR_DESKTOP, TILT_DIVISOR_MOBILE),
            max_tilt_deg: MAX_TILT_DEG,
            base_y_vh: pick(BASE_Y_VH_DESKTOP, BASE_Y_VH_MOBILE),
            horizontal_range_vw: HORIZONTAL_RANGE_VW,
            progress_range_vh: pick(PROGRESS_RANGE_VH_DESKTOP, PROGRESS_RANGE_VH_MOBILE),
            bounce_start_vw: BOUNCE_START_VW,
            bounce_full_vw: BOUNCE_FULL_VW,
            phase_step: BOUNCE_PHASE_STEP,
            negligible_delta: NEGLIGIBLE_SCROLL_DELTA,
            idle_frame_budget: IDLE_FRAME_BUDGET,
            idle_ease_ms: IDLE_EASE_MS,
            trail_capacity: TRAIL_CAPACITY,
            fade_duration_ms: TRAIL_FADE_MS,
            min_segment_length: TRAIL_MIN_SEGMENT,
            min_stroke_width: TRAIL_MIN_WIDTH,
            stroke_height_ratio: TRAIL_HEIGHT_RATIO,
            trail_rgb: TRAIL_RGB,
        }
    }

    /// Apply a partial JSON object over the profile defaults and validate the result.
    ///
    /// Fields missing from `json` keep the values of `profile`.
    pub fn with_overrides(profile: DeviceProfile, json: &str) -> anyhow::Result<Self> {
        let base = serde_json::to_value(Self::for_profile(profile))?;
        let patch: serde_json::Value = serde_json::from_str(json)?;
        let merged = match (base, patch) {
            (serde_json::Value::Object(mut base), serde_json::Value::Object(patch)) => {
                base.extend(patch);
                serde_json::Value::Object(base)
            }
            (_, other) => anyhow::bail!("config override must be a JSON object, got {other}"),
        };
        let config: Self = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.chase_speed > 0.0 && self.chase_speed <= 1.0) {
            return Err(ConfigError::ChaseSpeed(self.chase_speed));
        }
        if !(self.fade_duration_ms > 0.0) {
            return Err(ConfigError::FadeDuration(self.fade_duration_ms));
        }
        if !(2..=TRAIL_CAPACITY_MAX).contains(&self.trail_capacity) {
            return Err(ConfigError::TrailCapacity(self.trail_capacity));
        }
        if !(self.bounce_start_vw < self.bounce_full_vw) {
            return Err(ConfigError::BounceThresholds {
                start: self.bounce_start_vw,
                full: self.bounce_full_vw,
            });
        }
        if self.tilt_divisor == 0.0 || !self.tilt_divisor.is_finite() {
            return Err(ConfigError::TiltDivisor);
        }
        if !(self.max_tilt_deg.is_finite() && self.max_tilt_deg >= 0.0) {
            return Err(ConfigError::MaxTilt(self.max_tilt_deg));
        }
        if !(self.idle_ease_ms > 0.0) {
            return Err(ConfigError::IdleEase(self.idle_ease_ms));
        }
        Ok(())
    }

    /// Resting vertical offset in px for `viewport`.
    #[inline]
    pub fn base_y(&self, viewport: &Viewport) -> f64 {
        self.base_y_vh * viewport.vh()
    }

    #[inline]
    pub fn horizontal_range(&self, viewport: &Viewport) -> f64 {
        self.horizontal_range_vw * viewport.vw()
    }

    #[inline]
    pub fn max_amplitude(&self, viewport: &Viewport) -> f64 {
        self.max_amplitude_vh * viewport.vh()
    }
}
