//! The chase animator: owns target/actual poses and the trail, and talks to the
//! page only through [`DrawSurface`] and [`SpriteHost`].

use super::config::{AnimatorConfig, ConfigError, Viewport};
use super::motion::{ChaseSmoother, MotionState};
use super::target::{ScrollSample, TargetDeriver};
use super::trail::{Trail, TrailStyle};
use glam::DVec2;

/// On-screen bounding box in CSS px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Subset of a 2D canvas context needed to draw the trail.
pub trait DrawSurface {
    /// Backing size in px.
    fn size(&self) -> (f64, f64);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_stroke_rgba(&mut self, rgb: [u8; 3], alpha: f64);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn stroke(&mut self);
}

/// The animated element.
pub trait SpriteHost {
    /// `None` when the element is gone; the trail then skips sampling.
    fn bounding_rect(&self) -> Option<Rect>;
    fn apply(&mut self, state: &MotionState);
}

pub struct Animator<D: DrawSurface, H: SpriteHost> {
    config: AnimatorConfig,
    smoother: ChaseSmoother,
    deriver: TargetDeriver,
    target: MotionState,
    actual: MotionState,
    trail: Trail,
    surface: D,
    sprite: H,
    viewport: Viewport,
}

impl<D: DrawSurface, H: SpriteHost> Animator<D, H> {
    pub fn new(
        config: AnimatorConfig,
        surface: D,
        mut sprite: H,
        viewport: Viewport,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let base_y = if viewport.is_degenerate() {
            0.0
        } else {
            config.base_y(&viewport)
        };
        let start = MotionState::new(0.0, base_y, 0.0);
        sprite.apply(&start);
        Ok(Self {
            smoother: ChaseSmoother::new(config.chase_speed),
            deriver: TargetDeriver::new(),
            trail: Trail::new(config.trail_capacity),
            target: start,
            actual: start,
            config,
            surface,
            sprite,
            viewport,
        })
    }

    #[inline]
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    #[inline]
    pub fn target(&self) -> &MotionState {
        &self.target
    }

    #[inline]
    pub fn actual(&self) -> &MotionState {
        &self.actual
    }

    #[inline]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    #[inline]
    pub fn surface(&self) -> &D {
        &self.surface
    }

    #[inline]
    pub fn sprite(&self) -> &H {
        &self.sprite
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Scroll-progress notification for the horizontal trigger range.
    pub fn on_progress(&mut self, progress: f64) {
        if self.viewport.is_degenerate() {
            return;
        }
        self.deriver
            .set_progress(&mut self.target, progress, &self.config, &self.viewport);
    }

    /// One animation frame.
    pub fn frame(&mut self, now_ms: f64, scroll: ScrollSample) {
        self.deriver.derive(
            &mut self.target,
            now_ms,
            scroll,
            &self.config,
            &self.viewport,
        );
        self.smoother.step(&mut self.actual, &self.target);
        self.sprite.apply(&self.actual);

        let rect = self.sprite.bounding_rect();
        if let Some(r) = rect {
            self.trail.push(r.center(), now_ms);
        }
        self.render_trail(now_ms, rect.map(|r| r.height));
    }

    fn render_trail(&mut self, now_ms: f64, sprite_height: Option<f64>) {
        let (w, h) = self.surface.size();
        self.surface.clear_rect(0.0, 0.0, w, h);
        let Some(sprite_height) = sprite_height else {
            return;
        };
        let style = TrailStyle {
            fade_duration_ms: self.config.fade_duration_ms,
            min_segment_length: self.config.min_segment_length,
            min_width: self.config.min_stroke_width,
            max_width: sprite_height * self.config.stroke_height_ratio,
        };
        for seg in self.trail.segments(now_ms, &style) {
            self.surface.set_stroke_rgba(self.config.trail_rgb, seg.alpha);
            self.surface.set_line_width(seg.width);
            self.surface.begin_path();
            self.surface.move_to(seg.from.x, seg.from.y);
            self.surface
                .quadratic_curve_to(seg.control.x, seg.control.y, seg.to.x, seg.to.y);
            self.surface.stroke();
        }
    }
}
