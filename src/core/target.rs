//! Target derivation: horizontal travel from scroll progress, vertical bounce and
//! tilt from scroll velocity.

use super::config::{AnimatorConfig, Viewport};
use super::ease::{Ease, Tween};
use super::motion::MotionState;

/// Scroll position as seen by the render loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    /// Page scroll offset in px.
    pub offset: f64,
    /// Fraction of the whole document scrolled, in [0, 1].
    pub page_ratio: f64,
}

/// Gate for bounce and tilt as a function of horizontal travel in vw.
///
/// Zero up to `start`, one from `full`, linear in between.
#[inline]
pub fn bounce_scale(horizontal_vw: f64, start: f64, full: f64) -> f64 {
    if horizontal_vw <= start {
        0.0
    } else if horizontal_vw >= full {
        1.0
    } else {
        (horizontal_vw - start) / (full - start)
    }
}

#[derive(Clone, Debug, Default)]
pub struct TargetDeriver {
    last_offset: f64,
    phase: f64,
    idle_frames: u32,
    idle_tween: Option<Tween>,
    last_progress: f64,
}

impl TargetDeriver {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    #[inline]
    pub fn idle_frames(&self) -> u32 {
        self.idle_frames
    }

    #[inline]
    pub fn is_easing_home(&self) -> bool {
        self.idle_tween.is_some()
    }

    /// Horizontal target from a progress notification.
    pub fn set_progress(
        &mut self,
        target: &mut MotionState,
        progress: f64,
        config: &AnimatorConfig,
        viewport: &Viewport,
    ) {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.last_progress = progress;
        target.x = config.horizontal_range(viewport) * progress;
    }

    /// Update `target` for one frame. Returns `false` when the frame was skipped
    /// because the viewport cannot resolve viewport units.
    pub fn derive(
        &mut self,
        target: &mut MotionState,
        now_ms: f64,
        scroll: ScrollSample,
        config: &AnimatorConfig,
        viewport: &Viewport,
    ) -> bool {
        if viewport.is_degenerate() {
            return false;
        }
        let delta = scroll.offset - self.last_offset;
        self.last_offset = scroll.offset;

        // No progress notification yet: fall back to whole-page ratio
        if self.last_progress <= 0.0 {
            target.x = config.horizontal_range(viewport) * scroll.page_ratio.clamp(0.0, 1.0);
        }

        let base_y = config.base_y(viewport);
        let amplitude = (delta.abs() * config.velocity_gain).min(config.max_amplitude(viewport));
        let horizontal = target.x / viewport.vw();
        let scale = bounce_scale(horizontal, config.bounce_start_vw, config.bounce_full_vw);

        if delta.abs() < config.negligible_delta {
            self.idle_frames = self.idle_frames.saturating_add(1);
            if self.idle_frames == config.idle_frame_budget.saturating_add(1) {
                log::debug!("[target] idle, easing y {:.1} -> {:.1}", target.y, base_y);
                self.idle_tween = Some(Tween::new(
                    target.y,
                    base_y,
                    now_ms,
                    config.idle_ease_ms,
                    Ease::Power3Out,
                ));
            }
        } else {
            if self.idle_tween.take().is_some() {
                log::debug!("[target] motion resumed, idle ease cancelled");
            }
            self.idle_frames = 0;
            self.phase += config.phase_step;
            target.y = base_y + self.phase.sin() * amplitude * scale;
        }

        target.rotation_deg =
            (delta / config.tilt_divisor).clamp(-config.max_tilt_deg, config.max_tilt_deg) * scale;

        // Rest height follows the live viewport while easing home
        if let Some(tween) = self.idle_tween.as_mut() {
            tween.to = base_y;
            target.y = tween.value_at(now_ms);
            if tween.is_finished(now_ms) {
                self.idle_tween = None;
            }
        }
        true
    }
}
