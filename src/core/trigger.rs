//! Scroll trigger edges: the page offset at which a point on an element meets a
//! point on the viewport, and the progress of the scroll offset between two edges.

/// Element geometry in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementSpan {
    /// Document-space top (client top + scroll offset).
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerEdge {
    /// Point on the element as a fraction of its height (0 = top, 1 = bottom).
    pub element_fraction: f64,
    /// Extra offset below that point, as a fraction of viewport height.
    pub element_viewport_offset: f64,
    /// Point on the viewport as a fraction of its height (0 = top, 1 = bottom).
    pub viewport_fraction: f64,
}

impl TriggerEdge {
    pub const fn new(element_fraction: f64, viewport_fraction: f64) -> Self {
        Self {
            element_fraction,
            element_viewport_offset: 0.0,
            viewport_fraction,
        }
    }

    /// `"top top"`
    pub const TOP_TOP: Self = Self::new(0.0, 0.0);
    /// `"top bottom"`
    pub const TOP_BOTTOM: Self = Self::new(0.0, 1.0);
    /// `"bottom bottom"`
    pub const BOTTOM_BOTTOM: Self = Self::new(1.0, 1.0);
    /// `"bottom top"`
    pub const BOTTOM_TOP: Self = Self::new(1.0, 0.0);

    /// `"top N%"`
    pub fn top_at(viewport_percent: f64) -> Self {
        Self::new(0.0, viewport_percent / 100.0)
    }

    /// `"bottom N%"`
    pub fn bottom_at(viewport_percent: f64) -> Self {
        Self::new(1.0, viewport_percent / 100.0)
    }

    /// Element top plus `viewport_heights` of the viewport height, meeting the viewport top.
    pub fn below_top(viewport_heights: f64) -> Self {
        Self {
            element_fraction: 0.0,
            element_viewport_offset: viewport_heights,
            viewport_fraction: 0.0,
        }
    }

    /// Page offset at which this edge is reached.
    pub fn offset(&self, element: ElementSpan, viewport_height: f64) -> f64 {
        element.top
            + self.element_fraction * element.height
            + self.element_viewport_offset * viewport_height
            - self.viewport_fraction * viewport_height
    }
}

/// Pair of page offsets bounding a scrubbed animation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn from_edges(
        start: TriggerEdge,
        end: TriggerEdge,
        element: ElementSpan,
        viewport_height: f64,
    ) -> Self {
        Self {
            start: start.offset(element, viewport_height),
            end: end.offset(element, viewport_height),
        }
    }

    /// Progress in [0, 1]; a zero-length (or inverted) range is a step at `start`.
    pub fn progress(&self, offset: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if offset >= self.start { 1.0 } else { 0.0 };
        }
        ((offset - self.start) / span).clamp(0.0, 1.0)
    }
}

/// Fraction of the document scrolled.
pub fn page_ratio(offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let max = scroll_height - viewport_height;
    if max <= 0.0 {
        return 0.0;
    }
    (offset / max).clamp(0.0, 1.0)
}
