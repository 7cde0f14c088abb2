//! Chase filter: first-order exponential smoothing of a rendered pose toward a
//! target pose.
//!
//! For a constant target the error after `n` frames is
//! `initial_error * (1 - speed)^n`; with `speed` in (0, 1] it never overshoots.

/// Position in px and rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
}

impl MotionState {
    pub fn new(x: f64, y: f64, rotation_deg: f64) -> Self {
        Self { x, y, rotation_deg }
    }

    /// CSS transform placing the sprite at this pose.
    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({:.3}px,{:.3}px,0) rotate({:.3}deg)",
            self.x, self.y, self.rotation_deg
        )
    }
}

/// Move `current` a `speed` fraction of the way to `target`.
#[inline]
pub fn chase(current: f64, target: f64, speed: f64) -> f64 {
    current + (target - current) * speed
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChaseSmoother {
    speed: f64,
}

impl ChaseSmoother {
    pub fn new(speed: f64) -> Self {
        Self { speed }
    }

    /// Advance `actual` by one frame toward `target`.
    pub fn step(&self, actual: &mut MotionState, target: &MotionState) {
        actual.x = chase(actual.x, target.x, self.speed);
        actual.y = chase(actual.y, target.y, self.speed);
        actual.rotation_deg = chase(actual.rotation_deg, target.rotation_deg, self.speed);
    }
}
