//! DOM hooks the page exposes to the effects.

// Chase sprite and its trail overlay
pub const UFO_SELECTOR: &str = ".about_womanufo";
pub const UFO_CONFIG_ATTR: &str = "data-chase-config";
pub const TRAIL_CANVAS_ID: &str = "akiraMouseTrail";
pub const TRAIL_CANVAS_PARENT: &str = ".fixed_screen_area";
pub const TRAIL_CANVAS_Z_INDEX: &str = "10";

// Jet plane
pub const JET_SELECTOR: &str = ".about_jetplane";

// Galaxy drifts while `.about_underwater` passes, clipped to its visible area
pub const GALAXY_SELECTOR: &str = ".about_galaxy";
pub const UNDERWATER_SELECTOR: &str = ".about_underwater";

// Videos paused while off screen
pub const VIDEO_SELECTOR: &str = ".about_onceupon video, video[data-pause-offscreen]";
