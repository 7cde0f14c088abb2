//! Bounded history of sprite centres and the fading segments drawn through it.

use super::constants::TRAIL_CAPACITY_MAX;
use glam::DVec2;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub position: DVec2,
    pub timestamp_ms: f64,
}

/// Stroke parameters for one trail segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSegment {
    pub from: DVec2,
    /// Quadratic control point (segment midpoint).
    pub control: DVec2,
    pub to: DVec2,
    pub alpha: f64,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailStyle {
    pub fade_duration_ms: f64,
    pub min_segment_length: f64,
    pub min_width: f64,
    /// Width of a freshly sampled segment.
    pub max_width: f64,
}

/// Opacity of a segment whose older endpoint was sampled `age_ms` ago.
#[inline]
pub fn fade_alpha(age_ms: f64, fade_duration_ms: f64) -> f64 {
    1.0 - age_ms / fade_duration_ms
}

/// Stroke width between `min_width` (faded) and `max_width` (fresh).
#[inline]
pub fn stroke_width(alpha: f64, min_width: f64, max_width: f64) -> f64 {
    min_width + (max_width - min_width) * alpha
}

/// FIFO ring of recent points; pushing beyond capacity evicts the oldest.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity.min(TRAIL_CAPACITY_MAX).saturating_add(1)),
            capacity,
        }
    }

    pub fn push(&mut self, position: DVec2, timestamp_ms: f64) {
        self.points.push_back(TrailPoint {
            position,
            timestamp_ms,
        });
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    /// Visible segments at `now_ms`, oldest first.
    ///
    /// Segments shorter than the minimum length or fully faded are skipped.
    pub fn segments(&self, now_ms: f64, style: &TrailStyle) -> Vec<TrailSegment> {
        let mut out = Vec::with_capacity(self.points.len().saturating_sub(1));
        for (p1, p2) in self.points.iter().zip(self.points.iter().skip(1)) {
            let d = p2.position - p1.position;
            if d.length() < style.min_segment_length {
                continue;
            }
            let alpha = fade_alpha(now_ms - p1.timestamp_ms, style.fade_duration_ms);
            if alpha <= 0.0 {
                continue;
            }
            out.push(TrailSegment {
                from: p1.position,
                control: p1.position + d * 0.5,
                to: p2.position,
                alpha,
                width: stroke_width(alpha, style.min_width, style.max_width),
            });
        }
        out
    }
}
