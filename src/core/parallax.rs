//! Declarative parallax layers: linear tweens from trigger progress to a CSS
//! transform offset.

use super::config::Viewport;
use super::ease::Ease;
use super::trigger::TriggerEdge;
use std::fmt;

/// Wrapper whose scroll span drives the background layers.
pub const PARALLAX_WRAPPER: &str = ".parallax-wrapper";

/// Length as a sum of viewport-width, viewport-height and pixel terms.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Length {
    pub vw: f64,
    pub vh: f64,
    pub px: f64,
}

impl Length {
    pub const ZERO: Self = Self {
        vw: 0.0,
        vh: 0.0,
        px: 0.0,
    };

    pub const fn vw(vw: f64) -> Self {
        Self { vw, vh: 0.0, px: 0.0 }
    }

    pub const fn vh(vh: f64) -> Self {
        Self { vw: 0.0, vh, px: 0.0 }
    }

    pub fn plus_px(self, px: f64) -> Self {
        Self { px: self.px + px, ..self }
    }

    pub fn resolve(&self, viewport: &Viewport) -> f64 {
        self.vw * viewport.vw() + self.vh * viewport.vh() + self.px
    }
}

/// End state of a layer tween; the start state is the identity transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenTo {
    pub x: Length,
    pub y: Length,
    pub y_percent: f64,
    pub rotation_deg: f64,
    pub scale: f64,
    pub scale_y: f64,
}

impl Default for TweenTo {
    fn default() -> Self {
        Self {
            x: Length::ZERO,
            y: Length::ZERO,
            y_percent: 0.0,
            rotation_deg: 0.0,
            scale: 1.0,
            scale_y: 1.0,
        }
    }
}

impl TweenTo {
    pub fn x(mut self, x: Length) -> Self {
        self.x = x;
        self
    }

    pub fn y(mut self, y: Length) -> Self {
        self.y = y;
        self
    }

    pub fn y_percent(mut self, y_percent: f64) -> Self {
        self.y_percent = y_percent;
        self
    }

    pub fn rotation(mut self, deg: f64) -> Self {
        self.rotation_deg = deg;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn scale_y(mut self, scale_y: f64) -> Self {
        self.scale_y = scale_y;
        self
    }

    /// Interpolated transform at `progress` (scrubbed, no easing).
    pub fn sample(&self, progress: f64, viewport: &Viewport) -> Transform2d {
        let t = Ease::Linear.apply(progress);
        let lerp = |from: f64, to: f64| from + (to - from) * t;
        Transform2d {
            x: lerp(0.0, self.x.resolve(viewport)),
            y: lerp(0.0, self.y.resolve(viewport)),
            y_percent: lerp(0.0, self.y_percent),
            rotation_deg: lerp(0.0, self.rotation_deg),
            scale_x: lerp(1.0, self.scale),
            scale_y: lerp(1.0, self.scale * self.scale_y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2d {
    pub x: f64,
    pub y: f64,
    pub y_percent: f64,
    pub rotation_deg: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for Transform2d {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            y_percent: 0.0,
            rotation_deg: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl fmt::Display for Transform2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.y_percent != 0.0 {
            write!(f, "translate(0%,{:.3}%) ", self.y_percent)?;
        }
        write!(
            f,
            "translate({:.3}px,{:.3}px) rotate({:.3}deg) scale({:.4},{:.4})",
            self.x, self.y, self.rotation_deg, self.scale_x, self.scale_y
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub selector: &'static str,
    /// Element whose span drives the tween; `None` means the layer itself.
    pub trigger: Option<&'static str>,
    pub start: TriggerEdge,
    pub end: TriggerEdge,
    pub to: TweenTo,
}

impl ParallaxLayer {
    fn across_wrapper(selector: &'static str, to: TweenTo) -> Self {
        Self {
            selector,
            trigger: Some(PARALLAX_WRAPPER),
            start: TriggerEdge::TOP_TOP,
            end: TriggerEdge::BOTTOM_BOTTOM,
            to,
        }
    }

    fn through_viewport(selector: &'static str, to: TweenTo) -> Self {
        Self {
            selector,
            trigger: None,
            start: TriggerEdge::TOP_BOTTOM,
            end: TriggerEdge::BOTTOM_TOP,
            to,
        }
    }

    #[inline]
    pub fn trigger_selector(&self) -> &'static str {
        self.trigger.unwrap_or(self.selector)
    }
}

/// The page's background layers.
pub fn default_layers() -> Vec<ParallaxLayer> {
    let t = TweenTo::default;
    vec![
        ParallaxLayer::across_wrapper(".about_planet", t().y(Length::vh(20.0))),
        ParallaxLayer::across_wrapper(
            ".spacecats",
            t().x(Length::vw(-3.0))
                .y(Length::vh(55.0))
                .rotation(20.0)
                .scale(1.1),
        ),
        ParallaxLayer::across_wrapper(
            ".about_saturn",
            t().x(Length::vw(-2.0))
                .y(Length::vh(30.0))
                .rotation(-25.0)
                .scale(0.9),
        ),
        ParallaxLayer::across_wrapper(
            ".satellitemove",
            t().x(Length::vw(10.0))
                .y(Length::vh(50.0))
                .rotation(15.0)
                .scale(0.85),
        ),
        ParallaxLayer::across_wrapper(".about_watermoon", t().y(Length::vh(35.0))),
        ParallaxLayer::across_wrapper(".about_section_1", t().y(Length::vh(-10.0))),
        ParallaxLayer::through_viewport(".about_section_2", t().y(Length::vh(-10.0))),
        ParallaxLayer::through_viewport(".lakeshrink", t().scale_y(0.4)),
        ParallaxLayer::through_viewport(
            ".duckswim",
            t().x(Length::vw(-5.0).plus_px(-80.0)).y_percent(-35.0),
        ),
        ParallaxLayer {
            selector: ".about_rocket",
            trigger: Some(PARALLAX_WRAPPER),
            start: TriggerEdge::below_top(0.4),
            end: TriggerEdge::below_top(0.7),
            to: t().x(Length::vw(130.0)).y(Length::vw(-20.0)),
        },
        ParallaxLayer::through_viewport(
            ".about_turtle2",
            t().x(Length::vw(30.0)).y(Length::vw(5.0)).rotation(5.0),
        ),
        ParallaxLayer::through_viewport(
            ".about_turtle1",
            t().x(Length::vw(28.0)).y(Length::vw(-5.0)).rotation(-5.0),
        ),
        ParallaxLayer::through_viewport(
            ".about_nessie",
            t().x(Length::vw(7.0)).y(Length::vw(-13.0)).rotation(-30.0),
        ),
        ParallaxLayer::through_viewport(
            ".about_giant_squid",
            t().x(Length::vw(3.0)).y(Length::vw(7.0)).rotation(-5.0),
        ),
        ParallaxLayer {
            selector: ".about_flyduck",
            trigger: None,
            start: TriggerEdge::TOP_BOTTOM,
            end: TriggerEdge::bottom_at(80.0),
            to: t().x(Length::vw(120.0)).y(Length::vw(-15.0)),
        },
    ]
}
