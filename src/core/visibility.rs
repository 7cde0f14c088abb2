//! Play/pause gating for background videos.

use super::animator::Rect;
use super::config::Viewport;
use super::constants::VIDEO_PLAY_MARGIN;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoCommand {
    Play,
    Pause,
}

/// True when `rect` overlaps the viewport grown by `margin` viewport heights
/// above and below.
pub fn intersects_band(rect: &Rect, viewport: &Viewport, margin: f64) -> bool {
    let pad = viewport.height * margin;
    rect.bottom() > -pad
        && rect.top < viewport.height + pad
        && rect.right() > 0.0
        && rect.left < viewport.width
}

/// Remembers the last command so each transition is issued once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VideoGate {
    last: Option<VideoCommand>,
}

impl VideoGate {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn last(&self) -> Option<VideoCommand> {
        self.last
    }

    /// Command to issue for the current geometry, if it differs from the last one.
    pub fn update(&mut self, rect: &Rect, viewport: &Viewport, hidden: bool) -> Option<VideoCommand> {
        let wanted = if !hidden && intersects_band(rect, viewport, VIDEO_PLAY_MARGIN) {
            VideoCommand::Play
        } else {
            VideoCommand::Pause
        };
        self.issue(wanted)
    }

    /// Page became visible again: only a video actually on screen resumes.
    pub fn resume(&mut self, rect: &Rect, viewport: &Viewport) -> Option<VideoCommand> {
        if intersects_band(rect, viewport, 0.0) {
            self.issue(VideoCommand::Play)
        } else {
            None
        }
    }

    fn issue(&mut self, command: VideoCommand) -> Option<VideoCommand> {
        if self.last == Some(command) {
            return None;
        }
        self.last = Some(command);
        Some(command)
    }
}
