//! Galaxy layer: slow drift within its trigger range and a clip-path that follows
//! the visible part of another element.

use super::animator::Rect;
use super::config::{DeviceProfile, Viewport};
use super::constants::{GALAXY_RATIO_DESKTOP, GALAXY_RATIO_MOBILE};
use super::trigger::ScrollRange;
use std::fmt;

/// Insets in px from each viewport edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClipInset {
    Visible {
        top: f64,
        right: f64,
        bottom: f64,
        left: f64,
    },
    /// Nothing of the followed element is on screen.
    Empty,
}

impl fmt::Display for ClipInset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipInset::Visible {
                top,
                right,
                bottom,
                left,
            } => write!(f, "inset({top}px {right}px {bottom}px {left}px)"),
            ClipInset::Empty => f.write_str("inset(100% 0 0 100%)"),
        }
    }
}

/// Intersection of `rect` with the viewport, as insets.
pub fn clip_inset(rect: &Rect, viewport: &Viewport) -> ClipInset {
    let x1 = rect.left.max(0.0);
    let y1 = rect.top.max(0.0);
    let x2 = rect.right().min(viewport.width);
    let y2 = rect.bottom().min(viewport.height);
    if x2 <= x1 || y2 <= y1 {
        return ClipInset::Empty;
    }
    ClipInset::Visible {
        top: y1,
        right: viewport.width - x2,
        bottom: viewport.height - y2,
        left: x1,
    }
}

#[inline]
pub fn galaxy_ratio(profile: DeviceProfile) -> f64 {
    if profile.is_mobile() {
        GALAXY_RATIO_MOBILE
    } else {
        GALAXY_RATIO_DESKTOP
    }
}

/// Vertical drift for `offset`, held at the range ends outside it.
pub fn galaxy_drift(offset: f64, range: &ScrollRange, ratio: f64) -> f64 {
    if range.end <= range.start {
        return 0.0;
    }
    (offset.clamp(range.start, range.end) - range.start) * ratio
}
