//! Jet-plane flight path: a power-curve climb with an early dip, heading taken
//! from the path slope and chased toward on every update.

use super::config::{DeviceProfile, Viewport};
use super::constants::*;
use super::motion::chase;
use super::trigger::TriggerEdge;
use std::f64::consts::PI;

/// Scrub range of the flight: element top at mid-viewport until its bottom is 30%
/// from the viewport top.
pub fn trigger_edges() -> (TriggerEdge, TriggerEdge) {
    (TriggerEdge::top_at(50.0), TriggerEdge::bottom_at(30.0))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcPose {
    pub x: f64,
    pub y: f64,
    /// Heading before smoothing, in [-JET_MAX_CLIMB_DEG, 0].
    pub target_rotation_deg: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcFlight {
    arc_vh: f64,
    dip_vh: f64,
    rotation_deg: f64,
}

impl ArcFlight {
    pub fn new(profile: DeviceProfile) -> Self {
        let (arc_vh, dip_vh) = if profile.is_mobile() {
            (JET_ARC_VH_MOBILE, JET_DIP_VH_MOBILE)
        } else {
            (JET_ARC_VH_DESKTOP, JET_DIP_VH_DESKTOP)
        };
        Self {
            arc_vh,
            dip_vh,
            rotation_deg: 0.0,
        }
    }

    /// Smoothed rotation from the last [`ArcFlight::update`].
    #[inline]
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    pub fn pose(&self, t: f64, viewport: &Viewport) -> ArcPose {
        let t = t.clamp(0.0, 1.0);
        let vw = viewport.vw();
        let vh = viewport.vh();
        let arc = self.arc_vh * vh;
        let dip_amp = self.dip_vh * vh;

        let x = JET_TRAVEL_VW * vw * t;
        let climb = -arc * t.powf(JET_CLIMB_EXPONENT);
        let dip = if t < JET_DIP_END {
            dip_amp * (PI * t / JET_DIP_END).sin()
        } else {
            0.0
        };
        let y = JET_BASE_Y_VW * vw + dip + climb;

        let d_climb = -arc * JET_CLIMB_EXPONENT * t.max(0.0001).powf(JET_CLIMB_EXPONENT - 1.0);
        let d_dip = if t < JET_DIP_END {
            dip_amp * (PI / JET_DIP_END) * (PI * t / JET_DIP_END).cos()
        } else {
            0.0
        };
        let mut angle = (d_climb + d_dip).atan2(JET_SLOPE_RUN_VW * vw).to_degrees();
        if t < JET_LEVEL_OFF_T {
            angle *= t / JET_LEVEL_OFF_T;
        }
        ArcPose {
            x,
            y,
            target_rotation_deg: (angle * JET_HEADING_GAIN).clamp(-JET_MAX_CLIMB_DEG, 0.0),
        }
    }

    /// Pose at `t` with the rotation chased one step toward the path heading.
    pub fn update(&mut self, t: f64, viewport: &Viewport) -> ArcPose {
        let pose = self.pose(t, viewport);
        self.rotation_deg = chase(self.rotation_deg, pose.target_rotation_deg, JET_ROT_CHASE);
        pose
    }

    pub fn css_transform(&self, pose: &ArcPose) -> String {
        format!(
            "translate({:.3}px,{:.3}px) rotate({:.3}deg)",
            pose.x, pose.y, self.rotation_deg
        )
    }
}
