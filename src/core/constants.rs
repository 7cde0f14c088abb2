// Shared tuning constants for the scroll effects.
//
// Lengths suffixed `_VW`/`_VH` are in viewport units (1% of the viewport
// width/height) and are resolved against the live viewport every frame.

// Chase filter coefficient per frame, in (0, 1]
pub const CHASE_SPEED_DESKTOP: f64 = 0.15;
pub const CHASE_SPEED_MOBILE: f64 = 0.08;

// Vertical bounce
pub const VELOCITY_GAIN_DESKTOP: f64 = 3.0; // px of amplitude per px of scroll delta
pub const VELOCITY_GAIN_MOBILE: f64 = 1.0;
pub const MAX_AMPLITUDE_VH_DESKTOP: f64 = 60.0;
pub const MAX_AMPLITUDE_VH_MOBILE: f64 = 20.0;
pub const BASE_Y_VH_DESKTOP: f64 = -20.0; // resting height of the sprite
pub const BASE_Y_VH_MOBILE: f64 = -10.0;
pub const BOUNCE_PHASE_STEP: f64 = 0.1; // radians per moving frame

// Tilt
pub const TILT_DIVISOR_DESKTOP: f64 = 1.0;
pub const TILT_DIVISOR_MOBILE: f64 = 3.0;
pub const MAX_TILT_DEG: f64 = 20.0;

// Horizontal travel and the bounce gate (both in vw)
pub const HORIZONTAL_RANGE_VW: f64 = 130.0;
pub const BOUNCE_START_VW: f64 = 30.0;
pub const BOUNCE_FULL_VW: f64 = 100.0;

// End of the horizontal trigger range, as a fraction of viewport height past its start
pub const PROGRESS_RANGE_VH_DESKTOP: f64 = 50.0;
pub const PROGRESS_RANGE_VH_MOBILE: f64 = 25.0;

// Idle detection
pub const NEGLIGIBLE_SCROLL_DELTA: f64 = 1.0;
pub const IDLE_FRAME_BUDGET: u32 = 30;
pub const IDLE_EASE_MS: f64 = 400.0;

// Trail
pub const TRAIL_CAPACITY: usize = 40;
pub const TRAIL_CAPACITY_MAX: usize = 1024;
pub const TRAIL_FADE_MS: f64 = 800.0;
pub const TRAIL_MIN_SEGMENT: f64 = 1.0;
pub const TRAIL_MIN_WIDTH: f64 = 10.0;
pub const TRAIL_HEIGHT_RATIO: f64 = 0.4; // max stroke width relative to sprite height
pub const TRAIL_RGB: [u8; 3] = [225, 255, 0];

// Jet-plane arc
pub const JET_TRAVEL_VW: f64 = 145.0;
pub const JET_SLOPE_RUN_VW: f64 = 130.0;
pub const JET_BASE_Y_VW: f64 = -5.0;
pub const JET_ARC_VH_DESKTOP: f64 = 36.0;
pub const JET_ARC_VH_MOBILE: f64 = 26.0;
pub const JET_CLIMB_EXPONENT: f64 = 2.2;
pub const JET_DIP_END: f64 = 0.18;
pub const JET_DIP_VH_DESKTOP: f64 = 9.0;
pub const JET_DIP_VH_MOBILE: f64 = 6.0;
pub const JET_LEVEL_OFF_T: f64 = 0.05; // heading ramps in over the first 5%
pub const JET_HEADING_GAIN: f64 = 0.9;
pub const JET_MAX_CLIMB_DEG: f64 = 18.0;
pub const JET_ROT_CHASE: f64 = 0.15;

// Galaxy drift per px scrolled
pub const GALAXY_RATIO_DESKTOP: f64 = 0.006;
pub const GALAXY_RATIO_MOBILE: f64 = 0.003;

// Videos play inside the viewport extended by this fraction above and below
pub const VIDEO_PLAY_MARGIN: f64 = 0.2;
